use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::cookie::{clear_session_cookie, session_cookie};
use crate::auth::TokenCodec;
use crate::config;
use crate::error::ApiError;

/// Identity payload for credential issuance. Frontends send the whole user
/// profile here; only the email claim matters.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub email: String,
}

/// POST /jwt - issue a session credential and set the `token` cookie.
pub async fn token_post(
    State(codec): State<TokenCodec>,
    jar: CookieJar,
    Json(body): Json<TokenRequest>,
) -> Result<(CookieJar, Json<Value>), ApiError> {
    let token = codec.issue(&body.email)?;
    tracing::debug!("issued session credential for {}", body.email);

    let jar = jar.add(session_cookie(token, config::config().is_production()));
    Ok((jar, Json(json!({ "success": true }))))
}

/// GET /logout - clear the session cookie with a zero-max-age overwrite.
pub async fn logout_get(jar: CookieJar) -> (CookieJar, Json<Value>) {
    let jar = jar.add(clear_session_cookie(config::config().is_production()));
    (jar, Json(json!({ "success": true })))
}
