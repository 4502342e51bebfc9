use std::sync::Arc;

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::sponsorships::dtos::CreateOfferDto;
use crate::features::sponsorships::models::{SponsorshipOffer, SponsorshipStatus};
use crate::features::stats::StatsService;

/// Service for sponsorship offer operations
pub struct OfferService {
    pool: PgPool,
    stats: Arc<StatsService>,
}

impl OfferService {
    pub fn new(pool: PgPool, stats: Arc<StatsService>) -> Self {
        Self { pool, stats }
    }

    /// Create an offer from a form submission
    pub async fn create(&self, dto: CreateOfferDto) -> Result<SponsorshipOffer> {
        let budget = Decimal::try_from(dto.budget)
            .map_err(|_| AppError::Validation("Budget is not a representable number".to_string()))?;

        let offer = sqlx::query_as::<_, SponsorshipOffer>(
            r#"
            INSERT INTO company_offers (
                company_name, contact_person, email, phone, industry, budget,
                interests, requirements
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING
                id, company_name, contact_person, email, phone, industry, budget,
                interests, requirements, status, created_at
            "#,
        )
        .bind(&dto.company_name)
        .bind(&dto.contact_person)
        .bind(&dto.email)
        .bind(&dto.phone)
        .bind(&dto.industry)
        .bind(budget)
        .bind(&dto.interests)
        .bind(&dto.requirements)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create sponsorship offer: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Sponsorship offer created: id={}, industry={}",
            offer.id,
            offer.industry
        );

        Ok(offer)
    }

    /// Load the complete offer list, newest first
    pub async fn list_all(&self) -> Result<Vec<SponsorshipOffer>> {
        sqlx::query_as::<_, SponsorshipOffer>(
            r#"
            SELECT
                id, company_name, contact_person, email, phone, industry, budget,
                interests, requirements, status, created_at
            FROM company_offers
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list sponsorship offers: {:?}", e);
            AppError::Database(e)
        })
    }

    /// Set one offer's status.
    ///
    /// Every transition into completed bumps the aggregate counter, even a
    /// repeat transition on the same record.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: SponsorshipStatus,
    ) -> Result<SponsorshipOffer> {
        let offer = sqlx::query_as::<_, SponsorshipOffer>(
            r#"
            UPDATE company_offers
            SET status = $2
            WHERE id = $1
            RETURNING
                id, company_name, contact_person, email, phone, industry, budget,
                interests, requirements, status, created_at
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update offer status: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Sponsorship offer '{}' not found", id)))?;

        if status == SponsorshipStatus::Completed {
            self.stats.increment_completed().await?;
        }

        tracing::info!("Offer status updated: id={}, status={}", id, status);

        Ok(offer)
    }

    /// Permanently delete one offer
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM company_offers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete sponsorship offer: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Sponsorship offer '{}' not found",
                id
            )));
        }

        tracing::info!("Sponsorship offer deleted: id={}", id);

        Ok(())
    }
}
