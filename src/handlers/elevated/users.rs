use axum::{extract::State, Json};
use mongodb::bson::doc;

use crate::database::models::User;
use crate::database::Store;
use crate::error::ApiError;

/// GET /users - every account record. Admin only.
pub async fn users_list(State(store): State<Store>) -> Result<Json<Vec<User>>, ApiError> {
    let users = store.users().find_many(doc! {}).await?;
    Ok(Json(users))
}
