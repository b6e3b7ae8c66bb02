//! # HTTP Server
//!
//! Main HTTP server wiring the API routes, health check, static file
//! fallback, and request body cap into one Axum router.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::store::DocumentStore;

use super::api_routes::api_routes;
use super::config::HttpServerConfig;
use super::health_routes::health_routes;

/// Request body cap. Payloads may carry base64-encoded file content, so
/// this sits far above typical JSON sizes.
pub const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// HTTP server over a document store backend.
pub struct HttpServer<S: DocumentStore> {
    config: HttpServerConfig,
    store: Arc<S>,
}

impl<S: DocumentStore + 'static> HttpServer<S> {
    /// Create a new HTTP server over the given store.
    pub fn new(config: HttpServerConfig, store: S) -> Self {
        Self {
            config,
            store: Arc::new(store),
        }
    }

    /// Build the combined router.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            // Health check at root level
            .merge(health_routes())
            // Document API under /api
            .nest("/api", api_routes(self.store.clone()))
            // Any unmatched path serves a file from the static directory
            .fallback_service(ServeDir::new(&self.config.static_dir))
            .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Bootstrap the schema, then serve until shutdown.
    ///
    /// A failed bootstrap is logged and the listener still starts; queries
    /// then fail individually until the schema exists.
    pub async fn start(self) -> Result<(), std::io::Error> {
        if let Err(e) = self.store.initialize().await {
            error!(error = %e, "schema bootstrap failed, continuing without it");
        } else {
            info!("schema bootstrap complete");
        }

        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .expect("Invalid socket address");
        let router = self.router();

        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("server shut down");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
