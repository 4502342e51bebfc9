use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::sponsorships::listing::PageMeta;
use crate::features::sponsorships::models::{SponsorshipOffer, SponsorshipStatus};
use crate::shared::validation::PHONE_REGEX;

/// Request DTO for submitting a sponsorship offer
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOfferDto {
    #[validate(length(min = 1, max = 255, message = "Company name must be 1-255 characters"))]
    pub company_name: String,

    #[validate(length(min = 1, max = 255, message = "Contact person must be 1-255 characters"))]
    pub contact_person: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Industry must be 1-100 characters"))]
    pub industry: String,

    /// Sponsorship budget; must be strictly positive
    #[validate(range(exclusive_min = 0.0, message = "Budget must be greater than zero"))]
    pub budget: f64,

    /// What kinds of projects the company wants to sponsor
    #[validate(length(max = 5000, message = "Interests must not exceed 5000 characters"))]
    pub interests: Option<String>,

    #[validate(length(max = 5000, message = "Requirements must not exceed 5000 characters"))]
    pub requirements: Option<String>,
}

/// Response DTO for a sponsorship offer
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfferResponseDto {
    pub id: Uuid,
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub industry: String,
    pub budget: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    pub status: SponsorshipStatus,
    pub created_at: DateTime<Utc>,
}

impl From<SponsorshipOffer> for OfferResponseDto {
    fn from(o: SponsorshipOffer) -> Self {
        Self {
            id: o.id,
            company_name: o.company_name,
            contact_person: o.contact_person,
            email: o.email,
            phone: o.phone,
            industry: o.industry,
            budget: o.budget.to_f64().unwrap_or(0.0),
            interests: o.interests,
            requirements: o.requirements,
            status: o.status,
            created_at: o.created_at,
        }
    }
}

/// One page of filtered sponsorship offers
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfferListDto {
    pub items: Vec<OfferResponseDto>,
    pub pagination: PageMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> CreateOfferDto {
        CreateOfferDto {
            company_name: "Acme Corp".to_string(),
            contact_person: "Dana Reyes".to_string(),
            email: "partnerships@acme.example".to_string(),
            phone: None,
            industry: "Technology".to_string(),
            budget: 50_000.0,
            interests: Some("Developer events and open source".to_string()),
            requirements: None,
        }
    }

    #[test]
    fn test_valid_dto_passes() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_zero_budget_fails() {
        let mut dto = valid_dto();
        dto.budget = 0.0;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_empty_company_name_fails() {
        let mut dto = valid_dto();
        dto.company_name = String::new();
        assert!(dto.validate().is_err());
    }
}
