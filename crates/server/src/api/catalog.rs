//! Catalog snapshot handlers.

use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use cinedex_core::{CatalogOrigin, CatalogStore};

use super::handlers::{catalog_error, ApiError};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CatalogStatusResponse {
    pub origin: CatalogOrigin,
    pub entries: usize,
    pub loaded_at: DateTime<Utc>,
}

impl From<&CatalogStore> for CatalogStatusResponse {
    fn from(store: &CatalogStore) -> Self {
        Self {
            origin: store.origin(),
            entries: store.len(),
            loaded_at: store.loaded_at(),
        }
    }
}

/// GET /api/v1/catalog
pub async fn get_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CatalogStatusResponse>, ApiError> {
    let catalog = state.catalog().map_err(catalog_error)?;
    Ok(Json(CatalogStatusResponse::from(catalog.as_ref())))
}

/// POST /api/v1/catalog/reload
///
/// Fetch the sources again. On failure the current snapshot stays in place
/// and the error is returned.
pub async fn reload(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CatalogStatusResponse>, ApiError> {
    let catalog = state.reload_catalog().await.map_err(catalog_error)?;
    Ok(Json(CatalogStatusResponse::from(catalog.as_ref())))
}
