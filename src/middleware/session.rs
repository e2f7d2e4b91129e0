use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::auth::cookie::TOKEN_COOKIE;
use crate::auth::TokenCodec;
use crate::error::ApiError;

/// Authenticated identity bound to the request after credential verification.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub email: String,
}

/// Session guard: extracts the credential from the `token` cookie, verifies
/// it and binds the decoded identity to the request. Missing or invalid
/// credentials short-circuit with 401; no database access happens here.
pub async fn session_guard(
    State(codec): State<TokenCodec>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let cookie = jar
        .get(TOKEN_COOKIE)
        .ok_or_else(|| ApiError::unauthorized("unauthorized access"))?;

    let claims = codec.verify(cookie.value()).map_err(|e| {
        tracing::warn!("session credential rejected: {}", e);
        ApiError::unauthorized("unauthorized access")
    })?;

    request.extensions_mut().insert(AuthUser {
        email: claims.email,
    });
    Ok(next.run(request).await)
}
