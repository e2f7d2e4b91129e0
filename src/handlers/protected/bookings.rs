use axum::{
    extract::{Query, State},
    Json,
};
use mongodb::bson::doc;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::Booking;
use crate::database::Store;
use crate::error::ApiError;
use crate::handlers::body_to_document;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

/// GET /bookings?email= - bookings made by one guest; empty array when the
/// email param is absent.
pub async fn bookings_get(
    State(store): State<Store>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Vec<Booking>>, ApiError> {
    let Some(email) = query.email else {
        return Ok(Json(vec![]));
    };
    let bookings = store
        .bookings()
        .find_many(doc! { "guest.email": email })
        .await?;
    Ok(Json(bookings))
}

/// POST /bookings - record a reservation. Note this insert and the room's
/// booked-status flip are two independent writes with no atomicity between
/// them.
pub async fn booking_post(
    State(store): State<Store>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let booking = body_to_document(&body)?;
    let id = store.bookings().insert(booking).await?;
    Ok(Json(json!({ "insertedId": id })))
}
