use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use super::serialize_oid_hex;

/// Owner back-reference embedded in a room listing. Carries whatever profile
/// fields the frontend stored alongside the email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostRef {
    pub email: String,
    #[serde(flatten)]
    pub extra: Document,
}

/// Room listing. Title, location, images and date ranges are free-form
/// listing attributes and ride along in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_oid_hex",
        default
    )]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub host: Option<HostRef>,
    /// Transient flag flipped at booking time; not an exclusive lock.
    #[serde(default)]
    pub booked: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub price: Option<f64>,
    #[serde(flatten)]
    pub extra: Document,
}
