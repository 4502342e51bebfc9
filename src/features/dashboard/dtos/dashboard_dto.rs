use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One calendar month in the trailing six-month submission series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MonthlyBucketDto {
    /// Short month name ("Jan", "Feb", ...)
    pub label: String,
    pub requests: i64,
    pub offers: i64,
}

/// One category or industry with its occurrence count and chart color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SegmentBucketDto {
    pub label: String,
    pub count: i64,
    /// Hex color from the fixed cyclic palette
    pub color: String,
}

/// Category and industry buckets as two labeled series.
///
/// The palette index runs on from the category series into the industry
/// series, so a client that concatenates the two reproduces the combined
/// coloring. Whether to merge them is the client's call.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SegmentSeriesDto {
    pub categories: Vec<SegmentBucketDto>,
    pub industries: Vec<SegmentBucketDto>,
}

/// Headline numbers for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummaryDto {
    pub total_users: i64,
    pub active_sponsors: i64,
    pub completed_sponsorships: i64,
    pub total_requests: i64,
    pub total_offers: i64,
    pub pending_requests: i64,
    pub pending_offers: i64,
}
