use std::sync::Arc;

use chrono::{DateTime, FixedOffset};

use crate::core::error::Result;
use crate::features::dashboard::dtos::{DashboardSummaryDto, MonthlyBucketDto, SegmentSeriesDto};
use crate::features::dashboard::services::chart_service;
use crate::features::sponsorships::models::SponsorshipStatus;
use crate::features::sponsorships::services::{OfferService, RequestService};
use crate::features::stats::StatsService;

/// Service for admin dashboard queries.
///
/// Chart data is always derived from the complete record sets, fetched
/// fresh per call.
pub struct DashboardService {
    requests: Arc<RequestService>,
    offers: Arc<OfferService>,
    stats: Arc<StatsService>,
}

impl DashboardService {
    pub fn new(
        requests: Arc<RequestService>,
        offers: Arc<OfferService>,
        stats: Arc<StatsService>,
    ) -> Self {
        Self {
            requests,
            offers,
            stats,
        }
    }

    /// Headline numbers: the aggregate counters plus live per-kind totals
    pub async fn summary(&self) -> Result<DashboardSummaryDto> {
        let stats = self.stats.get().await?;
        let requests = self.requests.list_all().await?;
        let offers = self.offers.list_all().await?;

        let pending_requests = requests
            .iter()
            .filter(|r| r.status == SponsorshipStatus::Pending)
            .count() as i64;
        let pending_offers = offers
            .iter()
            .filter(|o| o.status == SponsorshipStatus::Pending)
            .count() as i64;

        Ok(DashboardSummaryDto {
            total_users: stats.total_users,
            active_sponsors: stats.active_sponsors,
            completed_sponsorships: stats.completed_sponsorships,
            total_requests: requests.len() as i64,
            total_offers: offers.len() as i64,
            pending_requests,
            pending_offers,
        })
    }

    /// Trailing six-month submission series
    pub async fn monthly(&self, now: DateTime<FixedOffset>) -> Result<Vec<MonthlyBucketDto>> {
        let requests = self.requests.list_all().await?;
        let offers = self.offers.list_all().await?;

        Ok(chart_service::monthly_buckets(&requests, &offers, now))
    }

    /// Category and industry buckets as two labeled series
    pub async fn segments(&self) -> Result<SegmentSeriesDto> {
        let requests = self.requests.list_all().await?;
        let offers = self.offers.list_all().await?;

        Ok(chart_service::segment_series(&requests, &offers))
    }
}
