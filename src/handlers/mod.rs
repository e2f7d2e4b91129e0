// Handlers by security tier, mirroring the guard stack applied in main.rs:
// public (no guard), protected (session guard), elevated (session + role).

pub mod elevated;
pub mod protected;
pub mod public;

use mongodb::bson::Document;
use serde_json::Value;

use crate::error::ApiError;

/// Converts a JSON request body into a document patch. Non-object bodies are
/// a client error.
pub(crate) fn body_to_document(value: &Value) -> Result<Document, ApiError> {
    mongodb::bson::to_document(value)
        .map_err(|_| ApiError::bad_request("request body must be a JSON object"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_bodies_convert() {
        let doc = body_to_document(&json!({ "email": "a@b.c", "price": 12.5 })).unwrap();
        assert_eq!(doc.get_str("email").unwrap(), "a@b.c");
        assert_eq!(doc.get_f64("price").unwrap(), 12.5);
    }

    #[test]
    fn scalar_bodies_are_rejected() {
        assert!(body_to_document(&json!("just a string")).is_err());
        assert!(body_to_document(&json!(42)).is_err());
    }
}
