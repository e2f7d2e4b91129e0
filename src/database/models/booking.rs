use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use super::serialize_oid_hex;

/// Guest reference embedded in a booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestRef {
    pub email: String,
    #[serde(flatten)]
    pub extra: Document,
}

/// Booking record. Immutable after insert; aggregated read-only for the
/// admin statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_oid_hex",
        default
    )]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub guest: Option<GuestRef>,
    /// Owner email of the booked room.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub price: Option<f64>,
    #[serde(flatten)]
    pub extra: Document,
}
