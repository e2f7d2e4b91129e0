use std::time::Duration;

use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::DatabaseConfig;
use crate::database::models::{Booking, Room, User};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document store unavailable: {0}")]
    Unavailable(mongodb::error::Error),
    #[error("document store query failed: {0}")]
    Query(mongodb::error::Error),
    #[error("malformed object id: {0}")]
    MalformedId(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::ErrorKind;
        match err.kind.as_ref() {
            ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) => StoreError::Unavailable(err),
            _ => StoreError::Query(err),
        }
    }
}

/// Parse a client-supplied 24-hex identifier, failing as a client error
/// rather than a crash.
pub fn parse_object_id(id: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id).map_err(|_| StoreError::MalformedId(id.to_string()))
}

/// Result of an upsert or field-level patch, relayed to clients in the shape
/// the document store reports.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<String>,
}

/// Connection to the document store plus typed collection handles.
#[derive(Clone)]
pub struct Store {
    db: Database,
}

impl Store {
    pub async fn connect(cfg: &DatabaseConfig) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(&cfg.uri).await?;
        options.server_selection_timeout = Some(Duration::from_secs(cfg.connect_timeout_secs));
        let client = Client::with_options(options).map_err(StoreError::from)?;
        Ok(Self {
            db: client.database(&cfg.db_name),
        })
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub fn users(&self) -> Repository<User> {
        Repository::new(self.db.collection("users"))
    }

    pub fn rooms(&self) -> Repository<Room> {
        Repository::new(self.db.collection("rooms"))
    }

    pub fn bookings(&self) -> Repository<Booking> {
        Repository::new(self.db.collection("booking"))
    }
}

/// CRUD facade over one logical collection. Absence is an explicit `None` /
/// empty vec, never an error; connectivity loss surfaces as
/// `StoreError::Unavailable`.
pub struct Repository<T: Send + Sync> {
    collection: Collection<T>,
}

impl<T> Repository<T>
where
    T: DeserializeOwned + Serialize + Send + Sync + Unpin,
{
    fn new(collection: Collection<T>) -> Self {
        Self { collection }
    }

    pub async fn find_one(&self, filter: Document) -> Result<Option<T>, StoreError> {
        Ok(self.collection.find_one(filter).await?)
    }

    pub async fn find_many(&self, filter: Document) -> Result<Vec<T>, StoreError> {
        let cursor = self.collection.find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Filtered scan deserializing only the projected fields.
    pub async fn find_many_projected<P>(
        &self,
        filter: Document,
        projection: Document,
    ) -> Result<Vec<P>, StoreError>
    where
        P: DeserializeOwned + Send + Sync + Unpin,
    {
        let cursor = self
            .collection
            .clone_with_type::<P>()
            .find(filter)
            .projection(projection)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn count(&self, filter: Document) -> Result<u64, StoreError> {
        Ok(self.collection.count_documents(filter).await?)
    }

    /// Inserts a raw document and returns the generated id as hex.
    pub async fn insert(&self, document: Document) -> Result<String, StoreError> {
        let result = self
            .collection
            .clone_with_type::<Document>()
            .insert_one(document)
            .await?;
        Ok(result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .unwrap_or_else(|| result.inserted_id.to_string()))
    }

    /// `$set` patch with insert-if-absent. Field-level merge, not replace.
    pub async fn upsert(&self, filter: Document, patch: Document) -> Result<WriteOutcome, StoreError> {
        let result = self
            .collection
            .update_one(filter, doc! { "$set": patch })
            .upsert(true)
            .await?;
        Ok(WriteOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result
                .upserted_id
                .and_then(|id| id.as_object_id())
                .map(|oid| oid.to_hex()),
        })
    }

    /// `$set` field merge on the matching document(s); no insert.
    pub async fn update_patch(
        &self,
        filter: Document,
        fields: Document,
    ) -> Result<WriteOutcome, StoreError> {
        let result = self
            .collection
            .update_one(filter, doc! { "$set": fields })
            .await?;
        Ok(WriteOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: None,
        })
    }
}

/// Projection of a booking used by the statistics scan.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingSale {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_object_id_parses() {
        let oid = parse_object_id("5f1d7f3c2b4a4e3d2c1b0a99").unwrap();
        assert_eq!(oid.to_hex(), "5f1d7f3c2b4a4e3d2c1b0a99");
    }

    #[test]
    fn malformed_object_id_is_a_client_error() {
        assert!(matches!(
            parse_object_id("not-an-id"),
            Err(StoreError::MalformedId(_))
        ));
        assert!(matches!(parse_object_id(""), Err(StoreError::MalformedId(_))));
    }

    #[test]
    fn write_outcome_serializes_in_driver_shape() {
        let outcome = WriteOutcome {
            matched_count: 1,
            modified_count: 1,
            upserted_id: None,
        };
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["matchedCount"], 1);
        assert_eq!(value["modifiedCount"], 1);
        assert!(value.get("upsertedId").is_none());
    }
}
