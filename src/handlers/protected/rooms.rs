use axum::{
    extract::{Path, State},
    Json,
};
use mongodb::bson::doc;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::Room;
use crate::database::{parse_object_id, Store, WriteOutcome};
use crate::error::ApiError;
use crate::handlers::body_to_document;

/// GET /room/:id - single room by id, or JSON null when absent.
pub async fn room_get(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<Option<Room>>, ApiError> {
    let oid = parse_object_id(&id)?;
    let room = store.rooms().find_one(doc! { "_id": oid }).await?;
    Ok(Json(room))
}

/// GET /rooms/:email - listings owned by one host.
pub async fn rooms_by_host(
    State(store): State<Store>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Room>>, ApiError> {
    let rooms = store.rooms().find_many(doc! { "host.email": email }).await?;
    Ok(Json(rooms))
}

/// POST /add-room - insert a new listing.
pub async fn room_post(
    State(store): State<Store>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let room = body_to_document(&body)?;
    let id = store.rooms().insert(room).await?;
    Ok(Json(json!({ "insertedId": id })))
}

#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub status: bool,
}

/// PATCH /rooms/status/:id - flip the booked flag.
pub async fn room_status_patch(
    State(store): State<Store>,
    Path(id): Path<String>,
    Json(body): Json<StatusBody>,
) -> Result<Json<WriteOutcome>, ApiError> {
    let oid = parse_object_id(&id)?;
    let outcome = store
        .rooms()
        .update_patch(doc! { "_id": oid }, doc! { "booked": body.status })
        .await?;
    Ok(Json(outcome))
}
