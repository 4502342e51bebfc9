use axum::Json;

use crate::core::error::Result;
use crate::features::auth::dtos::ProfileDto;
use crate::features::auth::model::AuthenticatedUser;
use crate::shared::types::ApiResponse;

/// Get the profile of the authenticated user
///
/// The profile is read entirely from the verified token; the service holds
/// no user records of its own.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Authenticated user profile", body = ApiResponse<ProfileDto>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
pub async fn get_me(user: AuthenticatedUser) -> Result<Json<ApiResponse<ProfileDto>>> {
    Ok(Json(ApiResponse::success(Some(user.into()), None, None)))
}

#[cfg(test)]
mod tests {
    use crate::features::auth::routes;
    use crate::shared::test_helpers::{create_member_user, with_user};
    use axum::http::StatusCode;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_get_me_returns_token_profile() {
        let server =
            TestServer::new(with_user(routes::routes(), create_member_user())).expect("test server");

        let response = server.get("/api/auth/me").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["username"], "test_member");
        assert_eq!(body["data"]["roles"][0], "member");
    }

    #[tokio::test]
    async fn test_get_me_requires_auth() {
        let server = TestServer::new(routes::routes()).expect("test server");

        let response = server.get("/api/auth/me").await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }
}
