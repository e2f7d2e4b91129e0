//! Session cookie helpers.
//!
//! The credential travels in an HttpOnly cookie named `token`. Production
//! deployments sit behind HTTPS on a different origin than the frontend, so
//! they need `Secure` + `SameSite=None`; everything else uses `Strict`.

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

/// Session cookie name.
pub const TOKEN_COOKIE: &str = "token";

pub fn session_cookie(token: String, production: bool) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(production)
        .same_site(if production { SameSite::None } else { SameSite::Strict })
        .build()
}

/// Zero-max-age overwrite used by logout.
pub fn clear_session_cookie(production: bool) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, ""))
        .path("/")
        .http_only(true)
        .secure(production)
        .same_site(if production { SameSite::None } else { SameSite::Strict })
        .max_age(Duration::ZERO)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_cookie_is_strict_and_not_secure() {
        let cookie = session_cookie("abc".to_string(), false);
        assert_eq!(cookie.name(), TOKEN_COOKIE);
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
    }

    #[test]
    fn production_cookie_is_secure_same_site_none() {
        let cookie = session_cookie("abc".to_string(), true);
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
    }

    #[test]
    fn logout_cookie_expires_immediately() {
        let cookie = clear_session_cookie(false);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }
}
