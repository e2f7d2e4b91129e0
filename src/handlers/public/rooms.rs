use axum::{extract::State, Json};
use mongodb::bson::doc;

use crate::database::models::Room;
use crate::database::Store;
use crate::error::ApiError;

/// GET /rooms - full room catalog, publicly browsable.
pub async fn rooms_list(State(store): State<Store>) -> Result<Json<Vec<Room>>, ApiError> {
    let rooms = store.rooms().find_many(doc! {}).await?;
    Ok(Json(rooms))
}
