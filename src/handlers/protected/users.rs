use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use mongodb::bson::doc;
use serde_json::Value;

use crate::database::models::User;
use crate::database::{Store, WriteOutcome};
use crate::error::ApiError;
use crate::handlers::body_to_document;

/// GET /user/:email - stored user record, or JSON null when absent.
pub async fn user_get(
    State(store): State<Store>,
    Path(email): Path<String>,
) -> Result<Json<Option<User>>, ApiError> {
    let user = store.users().find_one(doc! { "email": email }).await?;
    Ok(Json(user))
}

/// PUT /users/update/:email - role update: `$set` upsert of the body plus a
/// fresh timestamp.
pub async fn user_update_put(
    State(store): State<Store>,
    Path(email): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<WriteOutcome>, ApiError> {
    let mut patch = body_to_document(&body)?;
    patch.insert("timestamp", Utc::now().timestamp_millis());

    let outcome = store.users().upsert(doc! { "email": email }, patch).await?;
    Ok(Json(outcome))
}
