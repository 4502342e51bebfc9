use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::stats::models::DashboardStats;

/// Service for the aggregate counters row
pub struct StatsService {
    pool: PgPool,
}

impl StatsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Read the counters row
    pub async fn get(&self) -> Result<DashboardStats> {
        let stats = sqlx::query_as::<_, DashboardStats>(
            r#"
            SELECT total_users, active_sponsors, completed_sponsorships, updated_at
            FROM dashboard_stats
            WHERE id = 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch dashboard stats: {:?}", e);
            AppError::Database(e)
        })?;

        stats.ok_or_else(|| AppError::NotFound("Dashboard stats row not found".to_string()))
    }

    /// Bump the completed-sponsorships counter by one.
    ///
    /// Called on every transition into the completed status. Repeat
    /// transitions on the same record bump it again; the counter tracks
    /// transition events, not distinct completed records.
    pub async fn increment_completed(&self) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE dashboard_stats
            SET completed_sponsorships = completed_sponsorships + 1, updated_at = NOW()
            WHERE id = 1
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to increment completed sponsorships: {:?}", e);
            AppError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            tracing::warn!("Dashboard stats row missing; completed counter not incremented");
        }

        Ok(())
    }
}
