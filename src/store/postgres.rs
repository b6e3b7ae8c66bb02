//! PostgreSQL-backed document store.
//!
//! One `PgPool` shared across handlers, constructed lazily: only a
//! malformed connection string fails construction, while connection
//! failures surface per query. SSL mode is `prefer`, which encrypts when
//! the server offers TLS but never verifies its certificate; managed
//! hosting commonly presents a self-signed chain.

use std::str::FromStr;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;

use super::{Collection, DocumentStore, StoreError, StoreResult};

/// Bootstrap DDL, one statement per collection. `IF NOT EXISTS` keeps the
/// bootstrap idempotent across restarts.
const CREATE_VENUES: &str = "CREATE TABLE IF NOT EXISTS venues (
    id SERIAL PRIMARY KEY,
    data JSONB NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)";

const CREATE_POSTS: &str = "CREATE TABLE IF NOT EXISTS posts (
    id SERIAL PRIMARY KEY,
    data JSONB NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)";

/// Document store backed by PostgreSQL JSONB tables.
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    /// Build a store handle without connecting.
    ///
    /// Fails only if `database_url` cannot be parsed. The first real
    /// connection is established by whichever query runs first.
    pub fn connect_lazy(database_url: &str) -> Result<Self, StoreError> {
        let options = PgConnectOptions::from_str(database_url)
            .map_err(StoreError::InvalidConnectionString)?
            .ssl_mode(PgSslMode::Prefer);

        let pool = PgPoolOptions::new().connect_lazy_with(options);
        Ok(Self { pool })
    }

    /// The underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn initialize(&self) -> StoreResult<()> {
        sqlx::query(CREATE_VENUES).execute(&self.pool).await?;
        sqlx::query(CREATE_POSTS).execute(&self.pool).await?;
        Ok(())
    }

    async fn list_all(&self, collection: Collection) -> StoreResult<Vec<Value>> {
        // Table names come from the enum, never from request input.
        let sql = format!(
            "SELECT data FROM {} ORDER BY created_at DESC",
            collection.table()
        );
        let payloads = sqlx::query_scalar::<_, Value>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(payloads)
    }

    async fn insert(&self, collection: Collection, data: Value) -> StoreResult<()> {
        let sql = format!("INSERT INTO {} (data) VALUES ($1)", collection.table());
        sqlx::query(&sql).bind(data).execute(&self.pool).await?;
        Ok(())
    }

    async fn delete_by_name(&self, collection: Collection, name: &str) -> StoreResult<u64> {
        // OR across the three alias keys, mirroring NAME_KEYS. A record
        // matching on any key is removed; several records may share a name.
        let sql = format!(
            "DELETE FROM {} WHERE data->>'business_name' = $1 \
             OR data->>'local' = $1 OR data->>'local_name' = $1",
            collection.table()
        );
        let result = sqlx::query(&sql).bind(name).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::NAME_KEYS;

    #[tokio::test]
    async fn test_connect_lazy_accepts_valid_url() {
        let store = PgDocumentStore::connect_lazy("postgres://user:pw@localhost:5432/venuepost");
        assert!(store.is_ok());
    }

    #[test]
    fn test_connect_lazy_rejects_garbage() {
        let result = PgDocumentStore::connect_lazy("not a connection string");
        assert!(matches!(
            result,
            Err(StoreError::InvalidConnectionString(_))
        ));
    }

    #[test]
    fn test_bootstrap_ddl_is_idempotent() {
        assert!(CREATE_VENUES.contains("IF NOT EXISTS"));
        assert!(CREATE_POSTS.contains("IF NOT EXISTS"));
    }

    #[test]
    fn test_bootstrap_ddl_covers_both_collections() {
        assert!(CREATE_VENUES.contains("venues"));
        assert!(CREATE_POSTS.contains("posts"));
    }

    #[test]
    fn test_delete_sql_covers_every_alias_key() {
        let sql = format!(
            "DELETE FROM {} WHERE data->>'business_name' = $1 \
             OR data->>'local' = $1 OR data->>'local_name' = $1",
            Collection::Venues.table()
        );
        for key in NAME_KEYS {
            assert!(sql.contains(key), "missing alias key: {}", key);
        }
    }
}
