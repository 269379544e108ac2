//! Movie JSON API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use cinedeck_core::{CatalogError, LiveStats, MovieRecord};
use serde::Serialize;
use tracing::error;

use crate::state::AppState;

// ============================================================================
// Response types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct MovieListResponse {
    pub movies: Vec<MovieRecord>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: String) -> ApiError {
    (status, Json(ErrorResponse { error: message }))
}

fn catalog_failure(e: CatalogError) -> ApiError {
    error!(kind = e.kind(), error = %e, "Catalog query failed");
    api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| {
        api_error(
            StatusCode::BAD_REQUEST,
            format!("Invalid movie id: {}", raw),
        )
    })
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/movies
///
/// List every movie in source order.
pub async fn list_movies(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MovieListResponse>, ApiError> {
    let movies = state.catalog().list_all().await.map_err(catalog_failure)?;
    let total = movies.len();
    Ok(Json(MovieListResponse { movies, total }))
}

/// GET /api/v1/movies/{id}
pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<MovieRecord>, ApiError> {
    let id = parse_id(&raw_id)?;

    match state.catalog().find_by_id(id).await {
        Ok(Some(movie)) => Ok(Json(movie)),
        Ok(None) => Err(api_error(
            StatusCode::NOT_FOUND,
            format!("Movie not found: {}", id),
        )),
        Err(e) => Err(catalog_failure(e)),
    }
}

/// GET /api/v1/movies/{id}/live
///
/// Simulated live statistics. The id is not checked against the catalog.
pub async fn get_live_stats(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<LiveStats>, ApiError> {
    let id = parse_id(&raw_id)?;
    Ok(Json(state.live().fetch(id).await))
}
