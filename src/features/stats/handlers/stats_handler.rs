use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::stats::dtos::StatsResponseDto;
use crate::features::stats::services::StatsService;
use crate::shared::types::ApiResponse;

/// Get the aggregate platform counters
///
/// Public endpoint backing the marketing page counters.
#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Aggregate counters", body = ApiResponse<StatsResponseDto>),
        (status = 404, description = "Counters row missing")
    ),
    tag = "stats"
)]
pub async fn get_stats(
    State(service): State<Arc<StatsService>>,
) -> Result<Json<ApiResponse<StatsResponseDto>>> {
    let stats = service.get().await?;
    Ok(Json(ApiResponse::success(Some(stats.into()), None, None)))
}
