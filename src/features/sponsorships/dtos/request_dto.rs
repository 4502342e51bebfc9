use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::sponsorships::listing::PageMeta;
use crate::features::sponsorships::models::{SponsorshipRequest, SponsorshipStatus};
use crate::shared::validation::PHONE_REGEX;

/// Request DTO for submitting a sponsorship request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Optional contact phone
    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Project name must be 1-255 characters"))]
    pub project_name: String,

    #[validate(length(min = 1, max = 100, message = "Category must be 1-100 characters"))]
    pub category: String,

    /// Requested amount; must be strictly positive
    #[validate(range(exclusive_min = 0.0, message = "Amount must be greater than zero"))]
    pub amount: f64,

    #[validate(length(min = 1, max = 5000, message = "Description must be 1-5000 characters"))]
    pub description: String,

    /// What the sponsor gets in return
    #[validate(length(max = 5000, message = "Benefits must not exceed 5000 characters"))]
    pub benefits: Option<String>,

    // Display-only demographics
    #[validate(range(min = 13, max = 120, message = "Age must be 13-120"))]
    pub age: Option<i32>,
    #[validate(length(max = 50))]
    pub gender: Option<String>,
    #[validate(length(max = 100))]
    pub city: Option<String>,
    #[validate(length(max = 100))]
    pub social_platform: Option<String>,
    #[validate(range(min = 0, message = "Follower count cannot be negative"))]
    pub follower_count: Option<i64>,
    #[validate(url(message = "Invalid social link"))]
    pub social_link: Option<String>,
}

/// Response DTO for a sponsorship request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestResponseDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub project_name: String,
    pub category: String,
    pub amount: f64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_link: Option<String>,
    pub status: SponsorshipStatus,
    pub created_at: DateTime<Utc>,
}

impl From<SponsorshipRequest> for RequestResponseDto {
    fn from(r: SponsorshipRequest) -> Self {
        Self {
            id: r.id,
            name: r.name,
            email: r.email,
            phone: r.phone,
            project_name: r.project_name,
            category: r.category,
            amount: r.amount.to_f64().unwrap_or(0.0),
            description: r.description,
            benefits: r.benefits,
            age: r.age,
            gender: r.gender,
            city: r.city,
            social_platform: r.social_platform,
            follower_count: r.follower_count,
            social_link: r.social_link,
            status: r.status,
            created_at: r.created_at,
        }
    }
}

/// One page of filtered sponsorship requests
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestListDto {
    pub items: Vec<RequestResponseDto>,
    pub pagination: PageMeta,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn valid_dto() -> CreateRequestDto {
        CreateRequestDto {
            name: Name().fake(),
            email: SafeEmail().fake(),
            phone: Some("+62 812-3456-7890".to_string()),
            project_name: "Community esports league".to_string(),
            category: "Sports".to_string(),
            amount: 2500.0,
            description: "Season sponsorship for a regional esports league".to_string(),
            benefits: Some("Logo placement on jerseys".to_string()),
            age: Some(27),
            gender: None,
            city: Some("Bandung".to_string()),
            social_platform: Some("Instagram".to_string()),
            follower_count: Some(12_000),
            social_link: Some("https://instagram.com/example".to_string()),
        }
    }

    #[test]
    fn test_valid_dto_passes() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_invalid_email_fails() {
        let mut dto = valid_dto();
        dto.email = "not-an-email".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_zero_amount_fails() {
        let mut dto = valid_dto();
        dto.amount = 0.0;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_negative_amount_fails() {
        let mut dto = valid_dto();
        dto.amount = -10.0;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_bad_phone_fails_but_missing_phone_is_fine() {
        let mut dto = valid_dto();
        dto.phone = Some("call me".to_string());
        assert!(dto.validate().is_err());

        dto.phone = None;
        assert!(dto.validate().is_ok());
    }
}
