//! Role-based authorization guards.
//!
//! The reporting dashboard and all destructive operations require the
//! "admin" role carried in the verified bearer token. There is no ambient
//! admin flag anywhere; a request either presents a token with the role or
//! is rejected.

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Guard for checking if user is an admin.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireAdmin(user): RequireAdmin) { ... }
/// ```
pub struct RequireAdmin(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))?;

        if !user.is_admin() {
            return Err(AppError::Forbidden("Admin access required".to_string()));
        }

        Ok(RequireAdmin(user.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{create_admin_user, create_member_user, with_user};
    use axum::http::StatusCode;
    use axum::{routing::get, Router};
    use axum_test::TestServer;

    async fn admin_only(RequireAdmin(user): RequireAdmin) -> String {
        user.sub
    }

    fn app() -> Router {
        Router::new().route("/admin-only", get(admin_only))
    }

    #[tokio::test]
    async fn test_admin_passes_guard() {
        let server = TestServer::new(with_user(app(), create_admin_user())).expect("test server");

        let response = server.get("/admin-only").await;
        response.assert_status_ok();
        assert_eq!(response.text(), "test-admin-sub");
    }

    #[tokio::test]
    async fn test_member_is_forbidden() {
        let server = TestServer::new(with_user(app(), create_member_user())).expect("test server");

        let response = server.get("/admin-only").await;
        response.assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_anonymous_is_unauthorized() {
        let server = TestServer::new(app()).expect("test server");

        let response = server.get("/admin-only").await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }
}
