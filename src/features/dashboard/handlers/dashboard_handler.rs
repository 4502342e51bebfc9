use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Local;

use crate::core::error::Result;
use crate::features::auth::guards::RequireAdmin;
use crate::features::dashboard::dtos::{
    DashboardSummaryDto, MonthlyBucketDto, SegmentSeriesDto,
};
use crate::features::dashboard::services::DashboardService;
use crate::shared::types::ApiResponse;

/// Dashboard headline numbers (admin)
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    responses(
        (status = 200, description = "Dashboard summary", body = ApiResponse<DashboardSummaryDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "dashboard"
)]
pub async fn get_summary(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<DashboardSummaryDto>>> {
    let summary = service.summary().await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}

/// Trailing six-month submission series (admin)
#[utoipa::path(
    get,
    path = "/api/dashboard/monthly",
    responses(
        (status = 200, description = "Six monthly buckets, oldest first", body = ApiResponse<Vec<MonthlyBucketDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "dashboard"
)]
pub async fn get_monthly(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<Vec<MonthlyBucketDto>>>> {
    let buckets = service.monthly(Local::now().fixed_offset()).await?;
    Ok(Json(ApiResponse::success(Some(buckets), None, None)))
}

/// Category and industry buckets (admin)
#[utoipa::path(
    get,
    path = "/api/dashboard/segments",
    responses(
        (status = 200, description = "Category and industry series", body = ApiResponse<SegmentSeriesDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "dashboard"
)]
pub async fn get_segments(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<SegmentSeriesDto>>> {
    let series = service.segments().await?;
    Ok(Json(ApiResponse::success(Some(series), None, None)))
}
