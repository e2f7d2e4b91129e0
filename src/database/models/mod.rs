pub mod booking;
pub mod room;
pub mod user;

pub use booking::Booking;
pub use room::Room;
pub use user::{plan_save, Role, SavePlan, User};

use mongodb::bson::oid::ObjectId;
use serde::Serializer;

/// Serializes an optional `_id` as a 24-hex string for API responses.
pub(crate) fn serialize_oid_hex<S>(id: &Option<ObjectId>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id {
        Some(oid) => serializer.serialize_str(&oid.to_hex()),
        None => serializer.serialize_none(),
    }
}
