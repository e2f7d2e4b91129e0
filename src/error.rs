// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),

    // 401 Unauthorized
    Unauthorized(String),

    // 500 Internal Server Error
    InternalServerError(String),

    // 502 Bad Gateway (external service issues)
    BadGateway(String),

    // 503 Service Unavailable
    ServiceUnavailable(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::Unauthorized(_) => 401,
            ApiError::InternalServerError(_) => 500,
            ApiError::BadGateway(_) => 502,
            ApiError::ServiceUnavailable(_) => 503,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::Unauthorized(msg) => msg,
            ApiError::InternalServerError(msg) => msg,
            ApiError::BadGateway(msg) => msg,
            ApiError::ServiceUnavailable(msg) => msg,
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        json!({ "message": self.message() })
    }
}

// Static constructor methods
impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        ApiError::BadGateway(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(message.into())
    }
}

// Convert other error types to ApiError
impl From<crate::database::StoreError> for ApiError {
    fn from(err: crate::database::StoreError) -> Self {
        match err {
            crate::database::StoreError::MalformedId(id) => {
                ApiError::bad_request(format!("malformed object id: {}", id))
            }
            crate::database::StoreError::Unavailable(e) => {
                tracing::error!("document store unavailable: {}", e);
                ApiError::service_unavailable("Database temporarily unavailable")
            }
            crate::database::StoreError::Query(e) => {
                // Don't expose driver internals to clients
                tracing::error!("document store query error: {}", e);
                ApiError::internal_server_error("An error occurred while processing your request")
            }
        }
    }
}

impl From<crate::auth::TokenError> for ApiError {
    fn from(err: crate::auth::TokenError) -> Self {
        match err {
            crate::auth::TokenError::Invalid(msg) => {
                tracing::warn!("token rejected: {}", msg);
                ApiError::unauthorized("unauthorized access")
            }
            crate::auth::TokenError::MissingSecret => {
                tracing::error!("token secret not configured");
                ApiError::internal_server_error("Authentication is not configured")
            }
            crate::auth::TokenError::Signing(msg) => {
                tracing::error!("token signing failed: {}", msg);
                ApiError::internal_server_error("Failed to issue credential")
            }
        }
    }
}

impl From<crate::services::payments::PaymentError> for ApiError {
    fn from(err: crate::services::payments::PaymentError) -> Self {
        match err {
            crate::services::payments::PaymentError::InvalidAmount(price) => {
                ApiError::bad_request(format!("invalid payment amount: {}", price))
            }
            crate::services::payments::PaymentError::Provider { status, message } => {
                tracing::error!("payment provider refused intent ({}): {}", status, message);
                ApiError::bad_gateway("Payment provider rejected the request")
            }
            crate::services::payments::PaymentError::Transport(e) => {
                tracing::error!("payment provider unreachable: {}", e);
                ApiError::bad_gateway("Payment provider unreachable")
            }
            crate::services::payments::PaymentError::MalformedResponse(msg) => {
                tracing::error!("payment provider response malformed: {}", msg);
                ApiError::bad_gateway("Payment provider returned an unexpected response")
            }
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}
