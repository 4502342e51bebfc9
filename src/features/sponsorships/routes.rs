use std::sync::Arc;

use axum::{
    routing::{delete, get, patch},
    Router,
};

use crate::features::sponsorships::handlers;
use crate::features::sponsorships::services::{OfferService, RequestService};

/// Create routes for the sponsorships feature
///
/// Note: All routes require authentication; listing, status changes and
/// deletion additionally require the admin role.
pub fn routes(requests: Arc<RequestService>, offers: Arc<OfferService>) -> Router {
    let request_routes = Router::new()
        .route(
            "/api/requests",
            get(handlers::list_requests).post(handlers::create_request),
        )
        .route(
            "/api/requests/{id}/status",
            patch(handlers::update_request_status),
        )
        .route("/api/requests/{id}", delete(handlers::delete_request))
        .with_state(requests);

    let offer_routes = Router::new()
        .route(
            "/api/offers",
            get(handlers::list_offers).post(handlers::create_offer),
        )
        .route(
            "/api/offers/{id}/status",
            patch(handlers::update_offer_status),
        )
        .route("/api/offers/{id}", delete(handlers::delete_offer))
        .with_state(offers);

    request_routes.merge(offer_routes)
}
