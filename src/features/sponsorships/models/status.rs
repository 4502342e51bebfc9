use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Review status attached to every request and offer.
///
/// The service only ever writes these four values. The column is plain text,
/// so anything else found in the store decodes leniently to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SponsorshipStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
}

impl SponsorshipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SponsorshipStatus::Pending => "pending",
            SponsorshipStatus::Approved => "approved",
            SponsorshipStatus::Rejected => "rejected",
            SponsorshipStatus::Completed => "completed",
        }
    }

    /// Parse a stored value, falling back to `Pending` for anything unknown
    pub fn parse_lenient(value: &str) -> Self {
        match value {
            "approved" => SponsorshipStatus::Approved,
            "rejected" => SponsorshipStatus::Rejected,
            "completed" => SponsorshipStatus::Completed,
            _ => SponsorshipStatus::Pending,
        }
    }
}

impl std::fmt::Display for SponsorshipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl sqlx::Type<sqlx::Postgres> for SponsorshipStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <&str as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <&str as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl sqlx::Encode<'_, sqlx::Postgres> for SponsorshipStatus {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for SponsorshipStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let raw = <&str as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self::parse_lenient(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient_known_values() {
        assert_eq!(
            SponsorshipStatus::parse_lenient("pending"),
            SponsorshipStatus::Pending
        );
        assert_eq!(
            SponsorshipStatus::parse_lenient("approved"),
            SponsorshipStatus::Approved
        );
        assert_eq!(
            SponsorshipStatus::parse_lenient("rejected"),
            SponsorshipStatus::Rejected
        );
        assert_eq!(
            SponsorshipStatus::parse_lenient("completed"),
            SponsorshipStatus::Completed
        );
    }

    #[test]
    fn test_parse_lenient_unknown_falls_back_to_pending() {
        assert_eq!(
            SponsorshipStatus::parse_lenient("archived"),
            SponsorshipStatus::Pending
        );
        assert_eq!(
            SponsorshipStatus::parse_lenient(""),
            SponsorshipStatus::Pending
        );
        assert_eq!(
            SponsorshipStatus::parse_lenient("Approved"),
            SponsorshipStatus::Pending
        );
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&SponsorshipStatus::Completed).expect("serialize");
        assert_eq!(json, "\"completed\"");

        let parsed: SponsorshipStatus = serde_json::from_str("\"rejected\"").expect("deserialize");
        assert_eq!(parsed, SponsorshipStatus::Rejected);
    }

    #[test]
    fn test_unknown_status_input_is_rejected_by_serde() {
        // Unknown values never enter the store through the API surface
        let parsed: Result<SponsorshipStatus, _> = serde_json::from_str("\"archived\"");
        assert!(parsed.is_err());
    }
}
