use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::services::payments::PaymentClient;

#[derive(Debug, Deserialize)]
pub struct IntentRequest {
    #[serde(default)]
    pub price: f64,
}

/// POST /create-payment-intent - relay the provider's client secret for a
/// card charge. Degenerate prices answer 400 instead of hanging the client.
pub async fn payment_intent_post(
    State(payments): State<PaymentClient>,
    Json(body): Json<IntentRequest>,
) -> Result<Json<Value>, ApiError> {
    let client_secret = payments.create_intent(body.price).await?;
    Ok(Json(json!({ "clientSecret": client_secret })))
}
