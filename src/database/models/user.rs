use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use super::serialize_oid_hex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Guest,
    Host,
    Admin,
    // Tolerate unrecognized role strings in stored documents; they never
    // satisfy a role check.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Role::Guest => "guest",
            Role::Host => "host",
            Role::Admin => "admin",
            Role::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// Account record keyed by email. Created on first login, mutated on
/// role-request and role-update, never hard-deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_oid_hex",
        default
    )]
    pub id: Option<ObjectId>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status: Option<String>,
    /// Creation time in epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub timestamp: Option<i64>,
    #[serde(flatten)]
    pub extra: Document,
}

/// Outcome of the conditional first-login save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavePlan {
    /// No record yet: insert the patch plus a creation timestamp.
    InsertNew,
    /// Record is mid role-request: merge the patch in.
    MergePatch,
    /// Record already processed: return it unmodified, no write.
    KeepExisting,
}

/// Idempotence guard for the user-save operation: an already-processed
/// record (status other than "Requested") must not be overwritten.
pub fn plan_save(existing: Option<&User>) -> SavePlan {
    match existing {
        None => SavePlan::InsertNew,
        Some(user) if user.status.as_deref() == Some("Requested") => SavePlan::MergePatch,
        Some(_) => SavePlan::KeepExisting,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    fn user(status: Option<&str>) -> User {
        User {
            id: None,
            email: "guest@example.com".to_string(),
            role: Some(Role::Guest),
            status: status.map(String::from),
            timestamp: Some(1_700_000_000_000),
            extra: Document::new(),
        }
    }

    #[test]
    fn absent_record_is_inserted() {
        assert_eq!(plan_save(None), SavePlan::InsertNew);
    }

    #[test]
    fn requested_record_is_merged() {
        assert_eq!(plan_save(Some(&user(Some("Requested")))), SavePlan::MergePatch);
    }

    #[test]
    fn processed_record_is_left_alone() {
        assert_eq!(plan_save(Some(&user(Some("Verified")))), SavePlan::KeepExisting);
        assert_eq!(plan_save(Some(&user(None))), SavePlan::KeepExisting);
    }

    #[test]
    fn role_strings_round_trip() {
        let u: User = mongodb::bson::from_document(doc! {
            "email": "host@example.com",
            "role": "host",
        })
        .unwrap();
        assert_eq!(u.role, Some(Role::Host));

        let odd: User = mongodb::bson::from_document(doc! {
            "email": "x@example.com",
            "role": "superuser",
        })
        .unwrap();
        assert_eq!(odd.role, Some(Role::Unknown));
    }

    #[test]
    fn id_serializes_as_hex_string() {
        let mut u = user(None);
        u.id = Some(mongodb::bson::oid::ObjectId::parse_str("5f1d7f3c2b4a4e3d2c1b0a99").unwrap());
        let value = serde_json::to_value(&u).unwrap();
        assert_eq!(value["_id"], "5f1d7f3c2b4a4e3d2c1b0a99");
    }
}
