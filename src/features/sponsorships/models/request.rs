use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use super::status::SponsorshipStatus;
use crate::features::sponsorships::listing::ListRecord;

/// Database model for a sponsorship request (a party seeking funds).
///
/// Everything but `status` is immutable after submission. The demographic
/// and social fields are display-only.
#[derive(Debug, Clone, FromRow)]
pub struct SponsorshipRequest {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub project_name: String,
    pub category: String,
    pub amount: Decimal,
    pub description: String,
    pub benefits: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub city: Option<String>,
    pub social_platform: Option<String>,
    pub follower_count: Option<i64>,
    pub social_link: Option<String>,
    pub status: SponsorshipStatus,
    pub created_at: DateTime<Utc>,
}

impl ListRecord for SponsorshipRequest {
    fn search_fields(&self) -> [&str; 3] {
        [&self.name, &self.email, &self.project_name]
    }

    fn status(&self) -> SponsorshipStatus {
        self.status
    }

    fn segment(&self) -> &str {
        &self.category
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
