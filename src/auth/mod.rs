use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SecurityConfig;

pub mod cookie;

/// Identity claim carried by a session credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    fn new(email: String, expiry_days: i64) -> Self {
        let now = Utc::now();
        Self {
            email,
            exp: (now + Duration::days(expiry_days)).timestamp(),
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid credential: {0}")]
    Invalid(String),
    #[error("token secret not configured")]
    MissingSecret,
    #[error("token signing failed: {0}")]
    Signing(String),
}

/// Signs and verifies session credentials. A verified credential proves the
/// signature matches the server secret and the expiry has not elapsed; there
/// is no refresh mechanism and no revocation list.
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expiry_days: i64,
}

impl TokenCodec {
    pub fn new(secret: &str, expiry_days: i64) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }
        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            expiry_days,
        })
    }

    pub fn from_config(security: &SecurityConfig) -> Result<Self, TokenError> {
        Self::new(&security.jwt_secret, security.token_expiry_days)
    }

    pub fn issue(&self, email: impl Into<String>) -> Result<String, TokenError> {
        let claims = Claims::new(email.into(), self.expiry_days);
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Fails on signature mismatch, malformed payload, or elapsed expiry.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| TokenError::Invalid(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> TokenCodec {
        TokenCodec::new("unit-test-secret", 365).unwrap()
    }

    #[test]
    fn issue_then_verify_round_trips_the_claim() {
        let codec = codec();
        let token = codec.issue("guest@example.com").unwrap();
        let claims = codec.verify(&token).unwrap();
        assert_eq!(claims.email, "guest@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn tampered_credential_fails_verification() {
        let codec = codec();
        let token = codec.issue("guest@example.com").unwrap();

        // Flip a byte in the signed payload segment
        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        let mut payload = parts[1].clone().into_bytes();
        payload[0] = if payload[0] == b'A' { b'B' } else { b'A' };
        parts[1] = String::from_utf8(payload).unwrap();
        let tampered = parts.join(".");

        assert!(matches!(codec.verify(&tampered), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn credential_from_another_secret_is_rejected() {
        let other = TokenCodec::new("some-other-secret", 365).unwrap();
        let token = other.issue("guest@example.com").unwrap();
        assert!(codec().verify(&token).is_err());
    }

    #[test]
    fn elapsed_expiry_is_rejected() {
        // Negative expiry puts exp in the past, beyond the default leeway
        let codec = TokenCodec::new("unit-test-secret", -2).unwrap();
        let token = codec.issue("guest@example.com").unwrap();
        assert!(codec.verify(&token).is_err());
    }

    #[test]
    fn empty_secret_is_refused() {
        assert!(matches!(
            TokenCodec::new("", 365),
            Err(TokenError::MissingSecret)
        ));
    }
}
