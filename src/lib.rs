//! venuepost - a minimal JSON document API for venues and posts
//!
//! Two collections of opaque JSON payloads stored in PostgreSQL, exposed
//! over HTTP as create/list/delete endpoints plus a health check. Payloads
//! have no enforced schema; deletes match loosely against conventional
//! name keys inside the payload.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod http_server;
pub mod store;

use config::{Config, ConfigError};
use http_server::{HttpServer, HttpServerConfig};
use store::{PgDocumentStore, StoreError};

/// Fatal startup failures. Everything past startup degrades instead of
/// exiting: a failed schema bootstrap is logged and the listener still
/// starts, and per-query failures map to HTTP 500s.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to construct store handle: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Boot the service: logging, configuration, store handle, HTTP server.
///
/// The store handle is constructed lazily, so only a connection string that
/// cannot be parsed fails here; an unreachable database does not.
pub async fn run() -> Result<(), StartupError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("venuepost=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    let store = PgDocumentStore::connect_lazy(&config.database_url)?;

    let server = HttpServer::new(HttpServerConfig::from(&config), store);
    server.start().await?;

    Ok(())
}
