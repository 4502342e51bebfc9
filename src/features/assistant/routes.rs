use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::assistant::handlers;
use crate::features::assistant::services::AssistantService;

/// Create routes for the assistant feature
///
/// Note: This feature requires authentication
pub fn routes(service: Arc<AssistantService>) -> Router {
    Router::new()
        .route("/api/assistant/chat", post(handlers::chat))
        .with_state(service)
}
