use axum::{
    extract::{Query, State},
    Json,
};
use mongodb::bson::doc;

use crate::database::models::Booking;
use crate::database::Store;
use crate::error::ApiError;
use crate::handlers::protected::bookings::EmailQuery;

/// GET /bookings/host?email= - reservations against one host's listings;
/// empty array when the email param is absent. Host role required.
pub async fn host_bookings_get(
    State(store): State<Store>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Vec<Booking>>, ApiError> {
    let Some(email) = query.email else {
        return Ok(Json(vec![]));
    };
    let bookings = store.bookings().find_many(doc! { "host": email }).await?;
    Ok(Json(bookings))
}
