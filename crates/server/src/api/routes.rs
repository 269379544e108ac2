use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{handlers, middleware::metrics_middleware, movies, site};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Movies
        .route("/movies", get(movies::list_movies))
        .route("/movies/{id}", get(movies::get_movie))
        .route("/movies/{id}/live", get(movies::get_live_stats))
        .with_state(state.clone());

    // HTML pages
    let site_routes = Router::new()
        .route("/", get(site::movie_list))
        .route("/movies/{id}", get(site::movie_static))
        .route("/movies/ssr/{id}", get(site::movie_live))
        .route("/comparison", get(site::comparison))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .merge(site_routes)
        .route("/metrics", get(handlers::metrics))
        .fallback(site::fallback)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
}
