use axum::{routing::get, Router};

use crate::features::auth::handlers;

/// Create routes for the auth feature
///
/// Note: These routes sit behind the bearer-token middleware
pub fn routes() -> Router {
    Router::new().route("/api/auth/me", get(handlers::get_me))
}
