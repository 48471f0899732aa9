use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use cinedex_core::{CatalogError, CatalogOrigin, SanitizedConfig, StorageError};

use crate::metrics::encode_metrics;
use crate::state::AppState;

// ============================================================================
// Shared response types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error half of a handler result.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Map a catalog error to a response status.
pub fn catalog_error(e: CatalogError) -> ApiError {
    let status = match e {
        CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
        CatalogError::DataUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::BAD_GATEWAY,
    };
    error_response(status, e.to_string())
}

pub fn storage_error(e: StorageError) -> ApiError {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

// ============================================================================
// Handlers
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub catalog_origin: Option<CatalogOrigin>,
    pub entries: usize,
}

/// GET /api/v1/health
///
/// Always 200; `status` is "degraded" while no catalog is loaded.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    match state.catalog() {
        Ok(catalog) => Json(HealthResponse {
            status: "ok".to_string(),
            catalog_origin: Some(catalog.origin()),
            entries: catalog.len(),
        }),
        Err(_) => Json(HealthResponse {
            status: "degraded".to_string(),
            catalog_origin: None,
            entries: 0,
        }),
    }
}

pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<SanitizedConfig> {
    Json(state.sanitized_config())
}

/// GET /metrics
pub async fn metrics() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        encode_metrics(),
    )
}
