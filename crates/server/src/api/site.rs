//! HTML page handlers.
//!
//! `/movies/{id}` serves the page rendered at startup, `/movies/ssr/{id}`
//! renders on every request with fresh live stats.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use cinedeck_core::CatalogError;
use tracing::{debug, error};

use crate::pages;
use crate::state::AppState;

const CACHE_PRERENDERED: &str = "public, max-age=60";
const CACHE_NONE: &str = "no-store";

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(pages::not_found())).into_response()
}

fn catalog_failure(e: CatalogError) -> Response {
    error!(kind = e.kind(), error = %e, "Catalog query failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(pages::catalog_error()),
    )
        .into_response()
}

/// GET /
pub async fn movie_list(State(state): State<Arc<AppState>>) -> Response {
    match state.catalog().list_all().await {
        Ok(movies) => Html(pages::movie_list(&movies)).into_response(),
        Err(e) => catalog_failure(e),
    }
}

/// Id of a pre-rendered page. Only the exact decimal form of an id names a
/// page, so `01` or `+1` do not alias page `1`.
fn prerendered_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| id.to_string() == raw)
}

/// GET /movies/{id}
///
/// Serves the pre-rendered page. No catalog read happens here.
pub async fn movie_static(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Response {
    let Some(id) = prerendered_id(&raw_id) else {
        return not_found();
    };

    match state.prerendered().get(id) {
        Some(page) => (
            [(header::CACHE_CONTROL, CACHE_PRERENDERED)],
            Html(page.to_string()),
        )
            .into_response(),
        None => {
            debug!(id, "No pre-rendered page");
            not_found()
        }
    }
}

/// GET /movies/ssr/{id}
pub async fn movie_live(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Response {
    let Ok(id) = raw_id.parse::<i64>() else {
        return not_found();
    };

    let movie = match state.catalog().find_by_id(id).await {
        Ok(Some(movie)) => movie,
        Ok(None) => return not_found(),
        Err(e) => return catalog_failure(e),
    };
    let stats = state.live().fetch(id).await;

    (
        [(header::CACHE_CONTROL, CACHE_NONE)],
        Html(pages::movie_live(&movie, &stats)),
    )
        .into_response()
}

/// GET /comparison
pub async fn comparison() -> Html<String> {
    Html(pages::comparison())
}

/// Fallback for unknown paths.
pub async fn fallback() -> Response {
    not_found()
}
