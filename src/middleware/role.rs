use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use mongodb::bson::doc;

use crate::database::models::{Role, User};
use crate::database::Store;
use crate::error::ApiError;
use crate::middleware::session::AuthUser;

/// Role guard for admin-only routes. Always layered after the session guard.
pub async fn require_admin(
    State(store): State<Store>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    require_role(Role::Admin, &store, request, next).await
}

/// Role guard for host-only routes. Always layered after the session guard.
pub async fn require_host(
    State(store): State<Store>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    require_role(Role::Host, &store, request, next).await
}

/// Point lookup of the bound identity's stored role on every request; no
/// caching. Missing record or role mismatch ends the pipeline with 401.
async fn require_role(
    required: Role,
    store: &Store,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth = request.extensions().get::<AuthUser>().ok_or_else(|| {
        // Pipeline ordering bug: the session guard must run first
        tracing::error!("role guard reached without an authenticated identity");
        ApiError::unauthorized("Unauthorized Access")
    })?;

    let user = store.users().find_one(doc! { "email": &auth.email }).await?;
    if !role_matches(user.as_ref(), required) {
        tracing::warn!("role check failed: {} is not {}", auth.email, required);
        return Err(ApiError::unauthorized("Unauthorized Access"));
    }

    Ok(next.run(request).await)
}

/// A user satisfies a role check only with an exact stored-role match; an
/// absent record or absent role never does.
pub fn role_matches(user: Option<&User>, required: Role) -> bool {
    user.map_or(false, |u| u.role == Some(required))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request as HttpRequest, http::StatusCode, routing::get, Router};
    use mongodb::bson::Document;
    use tower::ServiceExt;

    use crate::config::DatabaseConfig;

    fn user(role: Option<Role>) -> User {
        User {
            id: None,
            email: "someone@example.com".to_string(),
            role,
            status: None,
            timestamp: None,
            extra: Document::new(),
        }
    }

    #[test]
    fn exact_role_match_passes() {
        assert!(role_matches(Some(&user(Some(Role::Admin))), Role::Admin));
        assert!(role_matches(Some(&user(Some(Role::Host))), Role::Host));
    }

    #[test]
    fn wrong_role_fails_even_with_valid_identity() {
        assert!(!role_matches(Some(&user(Some(Role::Guest))), Role::Admin));
        assert!(!role_matches(Some(&user(Some(Role::Host))), Role::Admin));
        assert!(!role_matches(Some(&user(Some(Role::Admin))), Role::Host));
    }

    #[test]
    fn missing_record_or_role_fails() {
        assert!(!role_matches(None, Role::Admin));
        assert!(!role_matches(Some(&user(None)), Role::Host));
        assert!(!role_matches(Some(&user(Some(Role::Unknown))), Role::Admin));
    }

    #[tokio::test]
    async fn request_without_bound_identity_is_rejected_before_any_lookup() {
        // The driver connects lazily, so a guard that rejects before its
        // store lookup never needs a reachable server
        let store = Store::connect(&DatabaseConfig {
            uri: "mongodb://127.0.0.1:1".to_string(),
            db_name: "travelNest".to_string(),
            connect_timeout_secs: 1,
        })
        .await
        .unwrap();

        let app = Router::new()
            .route("/probe", get(|| async { "ok" }))
            .route_layer(axum::middleware::from_fn_with_state(store, require_admin));

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/probe")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
