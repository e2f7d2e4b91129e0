//! Payment intent bridge.
//!
//! Forwards a price to the payment provider's REST API and relays only the
//! opaque client secret, never the full intent object.

use serde_json::Value;
use thiserror::Error;

use crate::config::PaymentConfig;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("invalid payment amount: {0}")]
    InvalidAmount(f64),
    #[error("payment provider refused ({status}): {message}")]
    Provider { status: u16, message: String },
    #[error("payment provider unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

/// Price-to-cents conversion. `None` for anything that would not charge at
/// least one cent: non-finite, non-positive, or sub-cent prices.
pub fn amount_in_cents(price: f64) -> Option<i64> {
    if !price.is_finite() || price <= 0.0 {
        return None;
    }
    let amount = (price * 100.0).trunc() as i64;
    (amount >= 1).then_some(amount)
}

#[derive(Clone)]
pub struct PaymentClient {
    http: reqwest::Client,
    secret_key: String,
    api_base: String,
}

impl PaymentClient {
    pub fn new(cfg: &PaymentConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key: cfg.secret_key.clone(),
            api_base: cfg.api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Creates a card payment intent in USD and returns its client secret.
    /// An amount below one cent is an explicit client error, never a silent
    /// non-response.
    pub async fn create_intent(&self, price: f64) -> Result<String, PaymentError> {
        let amount = amount_in_cents(price).ok_or(PaymentError::InvalidAmount(price))?;

        let params = [
            ("amount", amount.to_string()),
            ("currency", "usd".to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];
        let response = self
            .http
            .post(format!("{}/v1/payment_intents", self.api_base))
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PaymentError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = response.json().await?;
        body.get("client_secret")
            .and_then(Value::as_str)
            .map(String::from)
            .ok_or_else(|| PaymentError::MalformedResponse("missing client_secret".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PaymentConfig;

    fn client() -> PaymentClient {
        PaymentClient::new(&PaymentConfig {
            secret_key: "sk_test_unit".to_string(),
            api_base: "https://api.stripe.com".to_string(),
        })
    }

    #[test]
    fn amounts_truncate_to_cents() {
        // 19.99 * 100 sits just below 1999 in f64, and truncation keeps it there
        assert_eq!(amount_in_cents(19.99), Some(1998));
        assert_eq!(amount_in_cents(100.0), Some(10000));
        assert_eq!(amount_in_cents(0.019), Some(1));
    }

    #[test]
    fn degenerate_prices_are_rejected() {
        assert_eq!(amount_in_cents(0.0), None);
        assert_eq!(amount_in_cents(-5.0), None);
        assert_eq!(amount_in_cents(0.005), None);
        assert_eq!(amount_in_cents(f64::NAN), None);
        assert_eq!(amount_in_cents(f64::INFINITY), None);
    }

    #[tokio::test]
    async fn zero_and_negative_prices_fail_before_any_provider_call() {
        let client = client();
        assert!(matches!(
            client.create_intent(0.0).await,
            Err(PaymentError::InvalidAmount(_))
        ));
        assert!(matches!(
            client.create_intent(-5.0).await,
            Err(PaymentError::InvalidAmount(_))
        ));
    }
}
