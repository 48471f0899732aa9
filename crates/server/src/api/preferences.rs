//! Presentation preference handlers.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use cinedex_core::{dark_mode, set_dark_mode};

use super::handlers::{storage_error, ApiError};
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeBody {
    pub dark_mode: bool,
}

/// GET /api/v1/preferences/theme
pub async fn get_theme(State(state): State<Arc<AppState>>) -> Json<ThemeBody> {
    Json(ThemeBody {
        dark_mode: dark_mode(state.store()),
    })
}

/// PUT /api/v1/preferences/theme
pub async fn set_theme(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ThemeBody>,
) -> Result<Json<ThemeBody>, ApiError> {
    set_dark_mode(state.store(), body.dark_mode).map_err(storage_error)?;
    Ok(Json(body))
}
