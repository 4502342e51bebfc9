use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// The single aggregate counters row
#[derive(Debug, Clone, FromRow)]
pub struct DashboardStats {
    pub total_users: i64,
    pub active_sponsors: i64,
    pub completed_sponsorships: i64,
    pub updated_at: DateTime<Utc>,
}
