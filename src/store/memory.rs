//! In-memory document store.
//!
//! Same observable semantics as the PostgreSQL backend, backed by
//! per-collection vectors behind a mutex. Used by the integration tests and
//! usable for local development without a database.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{Collection, DocumentStore, StoreResult, NAME_KEYS};

#[derive(Debug, Clone)]
struct StoredDocument {
    #[allow(dead_code)]
    id: i64,
    data: Value,
    #[allow(dead_code)]
    created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Table {
    next_id: i64,
    records: Vec<StoredDocument>,
}

/// In-memory backend. Ids are monotonic per collection; insertion order is
/// creation order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    venues: Mutex<Table>,
    posts: Mutex<Table>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self, collection: Collection) -> &Mutex<Table> {
        match collection {
            Collection::Venues => &self.venues,
            Collection::Posts => &self.posts,
        }
    }
}

/// Exact, case-sensitive match of `name` against any alias key. Non-string
/// values under an alias key never match.
fn matches_name(data: &Value, name: &str) -> bool {
    NAME_KEYS
        .iter()
        .any(|key| data.get(key).and_then(Value::as_str) == Some(name))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn initialize(&self) -> StoreResult<()> {
        // Tables exist by construction; nothing to create.
        Ok(())
    }

    async fn list_all(&self, collection: Collection) -> StoreResult<Vec<Value>> {
        let table = self.table(collection).lock().expect("store mutex poisoned");
        // Newest first: creation order is insertion order, so reverse scan.
        Ok(table.records.iter().rev().map(|r| r.data.clone()).collect())
    }

    async fn insert(&self, collection: Collection, data: Value) -> StoreResult<()> {
        let mut table = self.table(collection).lock().expect("store mutex poisoned");
        table.next_id += 1;
        let record = StoredDocument {
            id: table.next_id,
            data,
            created_at: Utc::now(),
        };
        table.records.push(record);
        Ok(())
    }

    async fn delete_by_name(&self, collection: Collection, name: &str) -> StoreResult<u64> {
        let mut table = self.table(collection).lock().expect("store mutex poisoned");
        let before = table.records.len();
        table.records.retain(|r| !matches_name(&r.data, name));
        Ok((before - table.records.len()) as u64)
    }
}
