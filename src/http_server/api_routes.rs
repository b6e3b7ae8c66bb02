//! Document API Routes
//!
//! Endpoints for listing, creating, and deleting venue and post records.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info};

use crate::store::{Collection, DocumentStore};

use super::errors::{ApiError, ApiResult};

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct CreateDocumentRequest {
    /// The payload to store, opaque to the service.
    #[serde(default)]
    pub data: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteByNameRequest {
    /// `venue` or `post`; anything else is a silent no-op.
    #[serde(rename = "type", default)]
    pub type_tag: Option<String>,
    /// Name matched against the payload alias keys.
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    fn ok() -> Self {
        Self { success: true }
    }
}

// ==================
// Routes
// ==================

/// Create the `/api` routes over any store backend. The static `/delete`
/// segment takes precedence over the `{collection}` capture.
pub fn api_routes<S: DocumentStore + 'static>(store: Arc<S>) -> Router {
    Router::new()
        .route("/delete", post(delete_handler::<S>))
        .route(
            "/{collection}",
            get(list_handler::<S>).post(create_handler::<S>),
        )
        .with_state(store)
}

fn fetch_failed(collection: Collection) -> &'static str {
    match collection {
        Collection::Venues => "Failed to fetch venues",
        Collection::Posts => "Failed to fetch posts",
    }
}

fn save_failed(collection: Collection) -> &'static str {
    match collection {
        Collection::Venues => "Failed to save venue",
        Collection::Posts => "Failed to save post",
    }
}

// ==================
// Handlers
// ==================

/// List every payload in a collection, newest first. Ids and timestamps
/// are never exposed; clients get back exactly what they stored.
async fn list_handler<S: DocumentStore + 'static>(
    State(store): State<Arc<S>>,
    Path(collection): Path<String>,
) -> ApiResult<Json<Vec<Value>>> {
    let collection = Collection::from_route(&collection).ok_or(ApiError::UnknownCollection)?;

    let payloads = store.list_all(collection).await.map_err(|e| {
        error!(%collection, error = %e, "list query failed");
        ApiError::store(fetch_failed(collection), e)
    })?;

    Ok(Json(payloads))
}

/// Append one payload. The only validation is presence of `data`.
async fn create_handler<S: DocumentStore + 'static>(
    State(store): State<Arc<S>>,
    Path(collection): Path<String>,
    Json(request): Json<CreateDocumentRequest>,
) -> ApiResult<Json<SuccessResponse>> {
    let collection = Collection::from_route(&collection).ok_or(ApiError::UnknownCollection)?;

    let data = match request.data {
        Some(data) if !data.is_null() => data,
        _ => return Err(ApiError::MissingData),
    };

    store.insert(collection, data).await.map_err(|e| {
        error!(%collection, error = %e, "insert failed");
        ApiError::store(save_failed(collection), e)
    })?;

    info!(%collection, "document stored");
    Ok(Json(SuccessResponse::ok()))
}

/// Delete every record matching a name alias. Succeeds on zero matches,
/// and an unrecognized or missing `type`/`name` is a no-op that still
/// reports success.
async fn delete_handler<S: DocumentStore + 'static>(
    State(store): State<Arc<S>>,
    Json(request): Json<DeleteByNameRequest>,
) -> ApiResult<Json<SuccessResponse>> {
    let collection = request.type_tag.as_deref().and_then(Collection::from_type_tag);

    if let (Some(collection), Some(name)) = (collection, request.name.as_deref()) {
        let removed = store.delete_by_name(collection, name).await.map_err(|e| {
            error!(%collection, error = %e, "delete query failed");
            ApiError::store("Failed to delete", e)
        })?;

        info!(%collection, name, removed, "delete by name");
    }

    Ok(Json(SuccessResponse::ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_data_is_optional() {
        let request: CreateDocumentRequest = serde_json::from_str("{}").unwrap();
        assert!(request.data.is_none());
    }

    #[test]
    fn test_delete_request_tolerates_missing_fields() {
        let request: DeleteByNameRequest = serde_json::from_str("{}").unwrap();
        assert!(request.type_tag.is_none());
        assert!(request.name.is_none());
    }

    #[test]
    fn test_success_response_shape() {
        let json = serde_json::to_string(&SuccessResponse::ok()).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }

    #[test]
    fn test_failure_messages_name_the_collection() {
        assert_eq!(fetch_failed(Collection::Venues), "Failed to fetch venues");
        assert_eq!(save_failed(Collection::Posts), "Failed to save post");
    }
}
