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
    CreateOfferDto, ListOffersQuery, OfferListDto, OfferResponseDto, UpdateStatusDto,
};
use crate::features::sponsorships::listing;
use crate::features::sponsorships::services::OfferService;
use crate::shared::constants::DEFAULT_PAGE_SIZE;
use crate::shared::types::{ApiResponse, Meta};

/// Submit a sponsorship offer
#[utoipa::path(
    post,
    path = "/api/offers",
    request_body = CreateOfferDto,
    responses(
        (status = 200, description = "Offer submitted successfully", body = ApiResponse<OfferResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "offers"
)]
pub async fn create_offer(
    user: AuthenticatedUser,
    State(service): State<Arc<OfferService>>,
    AppJson(dto): AppJson<CreateOfferDto>,
) -> Result<Json<ApiResponse<OfferResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    tracing::debug!("Offer submission by {}", user.sub);

    let offer = service.create(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(offer.into()),
        Some("Your sponsorship offer has been submitted.".to_string()),
        None,
    )))
}

/// List sponsorship offers with filters (admin)
#[utoipa::path(
    get,
    path = "/api/offers",
    params(ListOffersQuery),
    responses(
        (status = 200, description = "Filtered page of offers", body = ApiResponse<OfferListDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "offers"
)]
pub async fn list_offers(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<OfferService>>,
    Query(query): Query<ListOffersQuery>,
) -> Result<Json<ApiResponse<OfferListDto>>> {
    let records = service.list_all().await?;
    let filtered = listing::apply_filter(records, &query.filter(), Local::now().fixed_offset());
    let page = listing::paginate(filtered, query.page, DEFAULT_PAGE_SIZE);

    let total = page.meta.total_items;
    let dto = OfferListDto {
        items: page.items.into_iter().map(Into::into).collect(),
        pagination: page.meta,
    };

    Ok(Json(ApiResponse::success(
        Some(dto),
        None,
        Some(Meta { total }),
    )))
}

/// Change one offer's status (admin)
#[utoipa::path(
    patch,
    path = "/api/offers/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Offer ID")
    ),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<OfferResponseDto>),
        (status = 404, description = "Offer not found")
    ),
    security(("bearer_auth" = [])),
    tag = "offers"
)]
pub async fn update_offer_status(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<OfferService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateStatusDto>,
) -> Result<Json<ApiResponse<OfferResponseDto>>> {
    let offer = service.update_status(id, dto.status).await?;
    Ok(Json(ApiResponse::success(Some(offer.into()), None, None)))
}

/// Permanently delete one offer (admin)
#[utoipa::path(
    delete,
    path = "/api/offers/{id}",
    params(
        ("id" = Uuid, Path, description = "Offer ID")
    ),
    responses(
        (status = 200, description = "Offer deleted"),
        (status = 404, description = "Offer not found")
    ),
    security(("bearer_auth" = [])),
    tag = "offers"
)]
pub async fn delete_offer(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<OfferService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Sponsorship offer deleted.".to_string()),
        None,
    )))
}
