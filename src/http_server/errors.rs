//! # API Errors
//!
//! Error types for the HTTP layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Create request without a `data` field.
    #[error("No data provided")]
    MissingData,

    /// Route segment that is not a known collection.
    #[error("Unknown collection")]
    UnknownCollection,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store failure. Clients see a generic per-operation message; the
    /// underlying error is logged where it occurred.
    #[error("{message}")]
    Store {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    /// Wrap a store failure with the generic message clients see.
    pub fn store(message: &'static str, source: StoreError) -> Self {
        ApiError::Store { message, source }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingData => StatusCode::BAD_REQUEST,
            ApiError::UnknownCollection => StatusCode::NOT_FOUND,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
