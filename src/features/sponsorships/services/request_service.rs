use std::sync::Arc;

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::sponsorships::dtos::CreateRequestDto;
use crate::features::sponsorships::models::{SponsorshipRequest, SponsorshipStatus};
use crate::features::stats::StatsService;

/// Service for sponsorship request operations
pub struct RequestService {
    pool: PgPool,
    stats: Arc<StatsService>,
}

impl RequestService {
    pub fn new(pool: PgPool, stats: Arc<StatsService>) -> Self {
        Self { pool, stats }
    }

    /// Create a request from a form submission
    pub async fn create(&self, dto: CreateRequestDto) -> Result<SponsorshipRequest> {
        let amount = Decimal::try_from(dto.amount)
            .map_err(|_| AppError::Validation("Amount is not a representable number".to_string()))?;

        let request = sqlx::query_as::<_, SponsorshipRequest>(
            r#"
            INSERT INTO client_requests (
                name, email, phone, project_name, category, amount, description, benefits,
                age, gender, city, social_platform, follower_count, social_link
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING
                id, name, email, phone, project_name, category, amount, description, benefits,
                age, gender, city, social_platform, follower_count, social_link,
                status, created_at
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.phone)
        .bind(&dto.project_name)
        .bind(&dto.category)
        .bind(amount)
        .bind(&dto.description)
        .bind(&dto.benefits)
        .bind(dto.age)
        .bind(&dto.gender)
        .bind(&dto.city)
        .bind(&dto.social_platform)
        .bind(dto.follower_count)
        .bind(&dto.social_link)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create sponsorship request: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Sponsorship request created: id={}, category={}",
            request.id,
            request.category
        );

        Ok(request)
    }

    /// Load the complete request list, newest first
    pub async fn list_all(&self) -> Result<Vec<SponsorshipRequest>> {
        sqlx::query_as::<_, SponsorshipRequest>(
            r#"
            SELECT
                id, name, email, phone, project_name, category, amount, description, benefits,
                age, gender, city, social_platform, follower_count, social_link,
                status, created_at
            FROM client_requests
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list sponsorship requests: {:?}", e);
            AppError::Database(e)
        })
    }

    /// Set one request's status.
    ///
    /// Every transition into completed bumps the aggregate counter, even a
    /// repeat transition on the same record.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: SponsorshipStatus,
    ) -> Result<SponsorshipRequest> {
        let request = sqlx::query_as::<_, SponsorshipRequest>(
            r#"
            UPDATE client_requests
            SET status = $2
            WHERE id = $1
            RETURNING
                id, name, email, phone, project_name, category, amount, description, benefits,
                age, gender, city, social_platform, follower_count, social_link,
                status, created_at
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update request status: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Sponsorship request '{}' not found", id)))?;

        if status == SponsorshipStatus::Completed {
            self.stats.increment_completed().await?;
        }

        tracing::info!("Request status updated: id={}, status={}", id, status);

        Ok(request)
    }

    /// Permanently delete one request
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM client_requests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete sponsorship request: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Sponsorship request '{}' not found",
                id
            )));
        }

        tracing::info!("Sponsorship request deleted: id={}", id);

        Ok(())
    }
}
