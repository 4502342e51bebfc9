use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::stats::models::DashboardStats;

/// Response DTO for the aggregate counters
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponseDto {
    pub total_users: i64,
    pub active_sponsors: i64,
    pub completed_sponsorships: i64,
    pub updated_at: DateTime<Utc>,
}

impl From<DashboardStats> for StatsResponseDto {
    fn from(s: DashboardStats) -> Self {
        Self {
            total_users: s.total_users,
            active_sponsors: s.active_sponsors,
            completed_sponsorships: s.completed_sponsorships,
            updated_at: s.updated_at,
        }
    }
}
