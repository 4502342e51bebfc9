#[cfg(test)]
use crate::features::auth::model::AuthenticatedUser;

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};

#[cfg(test)]
pub fn create_admin_user() -> AuthenticatedUser {
    AuthenticatedUser {
        sub: "test-admin-sub".to_string(),
        email: Some("admin@example.com".to_string()),
        name: Some("Test Admin".to_string()),
        username: Some("test_admin".to_string()),
        roles: vec!["admin".to_string()],
    }
}

#[cfg(test)]
pub fn create_member_user() -> AuthenticatedUser {
    AuthenticatedUser {
        sub: "test-member-sub".to_string(),
        email: Some("member@example.com".to_string()),
        name: Some("Test Member".to_string()),
        username: Some("test_member".to_string()),
        roles: vec!["member".to_string()],
    }
}

#[cfg(test)]
pub fn with_user(router: Router, user: AuthenticatedUser) -> Router {
    let inject = move |mut request: Request, next: Next| {
        let user = user.clone();
        async move {
            request.extensions_mut().insert(user);
            let response: Response = next.run(request).await;
            response
        }
    };
    router.layer(axum::middleware::from_fn(inject))
}
