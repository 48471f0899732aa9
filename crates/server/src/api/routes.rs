use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::{catalog, favorites, handlers, middleware::metrics_middleware, movies, preferences};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let static_dir = state.static_dir().map(|dir| dir.to_path_buf());

    // API routes
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Movies
        .route("/movies", get(movies::list_movies))
        .route("/movies/{id}", get(movies::get_movie))
        .route("/facets", get(movies::get_facets))
        // Favorites
        .route(
            "/favorites",
            get(favorites::list_favorites).delete(favorites::clear_favorites),
        )
        .route("/favorites/movies", get(favorites::list_favorite_movies))
        .route("/favorites/{id}/toggle", post(favorites::toggle_favorite))
        // Preferences
        .route(
            "/preferences/theme",
            get(preferences::get_theme).put(preferences::set_theme),
        )
        // Catalog snapshot
        .route("/catalog", get(catalog::get_status))
        .route("/catalog/reload", post(catalog::reload))
        .with_state(state);

    let mut router = Router::new()
        .nest("/api/v1", api_routes)
        .route("/metrics", get(handlers::metrics));

    // Serve the front-end with SPA fallback
    if let Some(dir) = static_dir {
        let serve_dir = ServeDir::new(&dir).fallback(ServeFile::new(dir.join("index.html")));
        router = router.fallback_service(serve_dir);
    }

    router
        .layer(middleware::from_fn(metrics_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
