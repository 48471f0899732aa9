//! Movie list, detail and facet handlers.

use std::borrow::Cow;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use cinedex_core::{
    catalog_view, Category, Entry, EntryId, Facets, FavoriteSet, PageLink, QueryError,
    QueryState, SortDirection, WatchLinks,
};

use super::handlers::{catalog_error, error_response, ApiError};
use crate::metrics::VIEWS_COMPUTED;
use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct MovieQueryParams {
    #[serde(default)]
    pub category: Option<String>,
    /// "asc" or "desc"; defaults to the category's direction.
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub actor: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub page: Option<usize>,
}

impl MovieQueryParams {
    /// Build the query state these parameters describe.
    pub fn to_query(&self) -> Result<QueryState, QueryError> {
        let category = match &self.category {
            Some(c) if !c.trim().is_empty() => c.parse::<Category>()?,
            _ => Category::default(),
        };

        let mut query = QueryState::new().with_category(category);
        if let Some(sort) = self.sort.as_deref().filter(|s| !s.trim().is_empty()) {
            query = query.with_direction(sort.parse::<SortDirection>()?);
        }

        Ok(query
            .with_year(self.year.clone())
            .with_actor(self.actor.clone())
            .with_genre(self.genre.clone())
            .with_search(self.search.clone())
            .with_page(self.page.unwrap_or(1)))
    }
}

/// Keys the movie responses set next to the flattened entry.
const RESPONSE_KEYS: [&str; 2] = ["favorite", "links"];

/// The entry as flattened into a response, without passthrough fields that
/// would collide with [`RESPONSE_KEYS`].
fn response_entry(entry: &Entry) -> Cow<'_, Entry> {
    if !RESPONSE_KEYS.iter().any(|key| entry.extra.contains_key(*key)) {
        return Cow::Borrowed(entry);
    }

    let mut stripped = entry.clone();
    for key in RESPONSE_KEYS {
        stripped.extra.remove(key);
    }
    Cow::Owned(stripped)
}

/// An entry with the caller's favorite flag.
#[derive(Debug, Serialize)]
pub struct MovieItem<'a> {
    #[serde(flatten)]
    pub entry: Cow<'a, Entry>,
    pub favorite: bool,
}

impl<'a> MovieItem<'a> {
    pub fn new(entry: &'a Entry, favorites: &FavoriteSet) -> Self {
        Self {
            entry: response_entry(entry),
            favorite: favorites.contains(entry.id),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MovieListResponse<'a> {
    pub category: Category,
    pub category_title: &'static str,
    pub sort: SortDirection,
    pub search: Option<String>,
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub items: Vec<MovieItem<'a>>,
    pub page_links: Vec<PageLink>,
    pub loaded_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct MovieDetailResponse<'a> {
    #[serde(flatten)]
    pub entry: Cow<'a, Entry>,
    pub favorite: bool,
    pub links: WatchLinks,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/movies
///
/// One page of the catalog for the given category, facets and search. Pages
/// past the end are clamped to the last page.
pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MovieQueryParams>,
) -> Result<Response, ApiError> {
    let query = params
        .to_query()
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, e.to_string()))?;
    let catalog = state.catalog().map_err(catalog_error)?;
    let page_size = state.page_size();
    let favorites = state.favorites();

    let mut view = catalog_view(catalog.entries(), &favorites, &query, page_size);
    let query = if query.page < 1 || query.page > view.total_pages {
        let clamped = query.clamp_page(view.total_pages);
        view = catalog_view(catalog.entries(), &favorites, &clamped, page_size);
        clamped
    } else {
        query
    };

    let search = query.search_term().map(str::to_string);
    VIEWS_COMPUTED
        .with_label_values(&[
            query.category.as_str(),
            if search.is_some() { "true" } else { "false" },
        ])
        .inc();
    debug!(
        "View {} page {}/{}: {} of {} entries",
        query.category,
        view.page,
        view.total_pages,
        view.items.len(),
        view.total_count
    );

    let response = MovieListResponse {
        category: query.category,
        category_title: query.category.title(),
        sort: query.direction,
        search,
        page: view.page,
        total_pages: view.total_pages,
        total_count: view.total_count,
        page_links: view.links(),
        items: view
            .items
            .iter()
            .map(|&entry| MovieItem::new(entry, &favorites))
            .collect(),
        loaded_at: catalog.loaded_at(),
    };

    Ok(Json(&response).into_response())
}

/// GET /api/v1/movies/{id}
pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<EntryId>,
) -> Result<Response, ApiError> {
    let catalog = state.catalog().map_err(catalog_error)?;
    let entry = catalog.get(id).map_err(catalog_error)?;

    let response = MovieDetailResponse {
        entry: response_entry(entry),
        favorite: state.favorites().contains(id),
        links: WatchLinks::for_entry(entry),
    };

    Ok(Json(&response).into_response())
}

/// GET /api/v1/facets
pub async fn get_facets(State(state): State<Arc<AppState>>) -> Result<Json<Facets>, ApiError> {
    let catalog = state.catalog().map_err(catalog_error)?;
    Ok(Json(catalog.facets().clone()))
}
