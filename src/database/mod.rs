pub mod models;
mod store;

pub use store::{parse_object_id, BookingSale, Repository, Store, StoreError, WriteOutcome};
