use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use super::status::SponsorshipStatus;
use crate::features::sponsorships::listing::ListRecord;

/// Database model for a sponsorship offer (a company providing funds)
#[derive(Debug, Clone, FromRow)]
pub struct SponsorshipOffer {
    pub id: Uuid,
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: Option<String>,
    pub industry: String,
    pub budget: Decimal,
    pub interests: Option<String>,
    pub requirements: Option<String>,
    pub status: SponsorshipStatus,
    pub created_at: DateTime<Utc>,
}

impl ListRecord for SponsorshipOffer {
    fn search_fields(&self) -> [&str; 3] {
        [&self.company_name, &self.contact_person, &self.email]
    }

    fn status(&self) -> SponsorshipStatus {
        self.status
    }

    fn segment(&self) -> &str {
        &self.industry
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
