//! # HTTP API Gateway
//!
//! Axum server exposing the document store as JSON endpoints.
//!
//! # Endpoints
//!
//! - `GET /api/{collection}` - list payloads, newest first
//! - `POST /api/{collection}` - append a payload
//! - `POST /api/delete` - delete records matching a name alias
//! - `GET /health` - health check
//!
//! Every other path falls through to static file serving from the
//! configured directory. Requests are stateless and independent; the only
//! shared resource is the store handle.

pub mod api_routes;
pub mod config;
pub mod errors;
pub mod health_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::ApiError;
pub use server::HttpServer;
