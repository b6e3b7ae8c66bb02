//! # Document Store
//!
//! Persistence for opaque JSON payloads in two collections (venues, posts).
//!
//! # Design Principles
//!
//! - Append, list-all, and delete-by-name are the only operations; there is
//!   no fetch, update, or delete of a single record by id
//! - Payloads are arbitrary JSON with no enforced schema
//! - Deletes match the payload's `business_name`, `local`, or `local_name`
//!   key against the requested name and may remove zero, one, or many records
//! - Schema bootstrap is idempotent and runs on every start; no migrations
//!
//! The HTTP layer is generic over the [`DocumentStore`] trait. Two backends
//! exist: [`PgDocumentStore`] for production and [`MemoryStore`] for tests
//! and local development.

mod collection;
mod errors;
mod memory;
mod postgres;

pub use collection::Collection;
pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use postgres::PgDocumentStore;

use async_trait::async_trait;
use serde_json::Value;

/// Payload keys a delete request is matched against. The match is an OR
/// across all three, exact and case-sensitive; the keys are conventional,
/// not required, and carry no uniqueness constraint.
pub const NAME_KEYS: [&str; 3] = ["business_name", "local", "local_name"];

/// Storage backend for JSON document records.
///
/// Records carry a server-assigned monotonic id and creation timestamp, both
/// invisible to callers: reads return payloads only.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Ensure both collections exist. Idempotent, safe on every start.
    async fn initialize(&self) -> StoreResult<()>;

    /// All payloads in the collection, newest first. Empty collection
    /// yields an empty vec.
    async fn list_all(&self, collection: Collection) -> StoreResult<Vec<Value>>;

    /// Append one record. No payload validation, no duplicate detection.
    async fn insert(&self, collection: Collection, data: Value) -> StoreResult<()>;

    /// Delete every record whose payload matches `name` on any of
    /// [`NAME_KEYS`]. Returns the number of records removed; zero matches
    /// is not an error.
    async fn delete_by_name(&self, collection: Collection, name: &str) -> StoreResult<u64>;
}
