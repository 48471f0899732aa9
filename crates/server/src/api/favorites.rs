//! Favorite set handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::info;

use cinedex_core::{matching_entries, Category, EntryId, QueryState};

use super::handlers::{catalog_error, storage_error, ApiError};
use super::movies::MovieItem;
use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub ids: Vec<EntryId>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub id: EntryId,
    pub favorite: bool,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct FavoriteMoviesResponse<'a> {
    pub items: Vec<MovieItem<'a>>,
    pub count: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/favorites
pub async fn list_favorites(State(state): State<Arc<AppState>>) -> Json<FavoritesResponse> {
    let favorites = state.favorites();
    Json(FavoritesResponse {
        ids: favorites.ids().collect(),
        count: favorites.len(),
    })
}

/// GET /api/v1/favorites/movies
///
/// Favorite entries present in the catalog, in catalog order. Ids with no
/// matching entry are left out.
pub async fn list_favorite_movies(
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let catalog = state.catalog().map_err(catalog_error)?;
    let favorites = state.favorites();

    let query = QueryState::new().with_category(Category::Favorites);
    let items: Vec<MovieItem<'_>> = matching_entries(catalog.entries(), &favorites, &query)
        .into_iter()
        .map(|entry| MovieItem::new(entry, &favorites))
        .collect();

    let response = FavoriteMoviesResponse {
        count: items.len(),
        items,
    };
    Ok(Json(&response).into_response())
}

/// POST /api/v1/favorites/{id}/toggle
pub async fn toggle_favorite(
    State(state): State<Arc<AppState>>,
    Path(id): Path<EntryId>,
) -> Result<Json<ToggleResponse>, ApiError> {
    let mut favorites = state.favorites();
    let favorite = favorites.toggle(id).map_err(storage_error)?;

    Ok(Json(ToggleResponse {
        id,
        favorite,
        count: favorites.len(),
    }))
}

/// DELETE /api/v1/favorites
pub async fn clear_favorites(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FavoritesResponse>, ApiError> {
    let mut favorites = state.favorites();
    let cleared = favorites.len();
    favorites.clear().map_err(storage_error)?;
    info!("Cleared {} favorites", cleared);

    Ok(Json(FavoritesResponse {
        ids: Vec::new(),
        count: 0,
    }))
}
