use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use mongodb::bson::doc;
use serde_json::Value;

use crate::database::models::{plan_save, SavePlan};
use crate::database::Store;
use crate::error::ApiError;
use crate::handlers::body_to_document;

/// PUT /users/:email - conditional first-login save.
///
/// A fresh email is inserted with a creation timestamp. An existing record
/// is only patched while its status is "Requested"; anything else comes back
/// unmodified with no write, so an already-processed role request cannot be
/// overwritten.
pub async fn user_save_put(
    State(store): State<Store>,
    Path(email): Path<String>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    let mut patch = body_to_document(&body)?;
    let users = store.users();
    let filter = doc! { "email": &email };

    let existing = users.find_one(filter.clone()).await?;
    match plan_save(existing.as_ref()) {
        SavePlan::InsertNew => {
            patch.insert("timestamp", Utc::now().timestamp_millis());
            let outcome = users.upsert(filter, patch).await?;
            Ok(Json(outcome).into_response())
        }
        SavePlan::MergePatch => {
            let outcome = users.upsert(filter, patch).await?;
            Ok(Json(outcome).into_response())
        }
        SavePlan::KeepExisting => Ok(Json(existing).into_response()),
    }
}
