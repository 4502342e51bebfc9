use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Local;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::sponsorships::dtos::{
    CreateRequestDto, ListRequestsQuery, RequestListDto, RequestResponseDto, UpdateStatusDto,
};
use crate::features::sponsorships::listing;
use crate::features::sponsorships::services::RequestService;
use crate::shared::constants::DEFAULT_PAGE_SIZE;
use crate::shared::types::{ApiResponse, Meta};

/// Submit a sponsorship request
#[utoipa::path(
    post,
    path = "/api/requests",
    request_body = CreateRequestDto,
    responses(
        (status = 200, description = "Request submitted successfully", body = ApiResponse<RequestResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "requests"
)]
pub async fn create_request(
    user: AuthenticatedUser,
    State(service): State<Arc<RequestService>>,
    AppJson(dto): AppJson<CreateRequestDto>,
) -> Result<Json<ApiResponse<RequestResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    tracing::debug!("Request submission by {}", user.sub);

    let request = service.create(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(request.into()),
        Some("Your sponsorship request has been submitted.".to_string()),
        None,
    )))
}

/// List sponsorship requests with filters (admin)
///
/// Loads the full record set and narrows it in memory with the four filter
/// inputs, then slices out the requested page.
#[utoipa::path(
    get,
    path = "/api/requests",
    params(ListRequestsQuery),
    responses(
        (status = 200, description = "Filtered page of requests", body = ApiResponse<RequestListDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "requests"
)]
pub async fn list_requests(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<RequestService>>,
    Query(query): Query<ListRequestsQuery>,
) -> Result<Json<ApiResponse<RequestListDto>>> {
    let records = service.list_all().await?;
    let filtered = listing::apply_filter(records, &query.filter(), Local::now().fixed_offset());
    let page = listing::paginate(filtered, query.page, DEFAULT_PAGE_SIZE);

    let total = page.meta.total_items;
    let dto = RequestListDto {
        items: page.items.into_iter().map(Into::into).collect(),
        pagination: page.meta,
    };

    Ok(Json(ApiResponse::success(
        Some(dto),
        None,
        Some(Meta { total }),
    )))
}

/// Change one request's status (admin)
#[utoipa::path(
    patch,
    path = "/api/requests/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Request ID")
    ),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<RequestResponseDto>),
        (status = 404, description = "Request not found")
    ),
    security(("bearer_auth" = [])),
    tag = "requests"
)]
pub async fn update_request_status(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<RequestService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateStatusDto>,
) -> Result<Json<ApiResponse<RequestResponseDto>>> {
    let request = service.update_status(id, dto.status).await?;
    Ok(Json(ApiResponse::success(Some(request.into()), None, None)))
}

/// Permanently delete one request (admin)
#[utoipa::path(
    delete,
    path = "/api/requests/{id}",
    params(
        ("id" = Uuid, Path, description = "Request ID")
    ),
    responses(
        (status = 200, description = "Request deleted"),
        (status = 404, description = "Request not found")
    ),
    security(("bearer_auth" = [])),
    tag = "requests"
)]
pub async fn delete_request(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<RequestService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Sponsorship request deleted.".to_string()),
        None,
    )))
}
