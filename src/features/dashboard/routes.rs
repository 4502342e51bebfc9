use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::dashboard::handlers;
use crate::features::dashboard::services::DashboardService;

/// Create routes for the dashboard feature
///
/// Note: All routes require the admin role
pub fn routes(service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/api/dashboard/summary", get(handlers::get_summary))
        .route("/api/dashboard/monthly", get(handlers::get_monthly))
        .route("/api/dashboard/segments", get(handlers::get_segments))
        .with_state(service)
}
