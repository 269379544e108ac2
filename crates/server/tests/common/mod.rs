//! Common test utilities for in-process router tests.
//!
//! Builds the full router over an in-memory catalog, with pre-rendered pages
//! and an instant live stats generator, so no files or sockets are needed.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use cinedeck_core::{
    Config, JsonFileCatalog, LiveStatsGenerator, MovieCatalog, StaticCatalog,
};
use cinedeck_server::api::create_router;
use cinedeck_server::prerender::PrerenderedPages;
use cinedeck_server::state::AppState;

/// Three movies covering the different input shapes: the `year` alias,
/// list-valued genre and cast, a missing poster and characters that need
/// escaping.
pub const MOVIES_JSON: &str = r#"[
  {
    "id": 1,
    "title": "Inception",
    "description": "A thief who steals corporate secrets through dreams.",
    "plot": "Dom Cobb is offered a chance at redemption.",
    "releaseYear": 2010,
    "duration": 148,
    "rating": 8.8,
    "director": "Christopher Nolan",
    "genre": "Sci-Fi",
    "cast": "Leonardo DiCaprio, Joseph Gordon-Levitt",
    "posterLink": "https://example.com/inception.jpg"
  },
  {
    "id": 2,
    "title": "Heat",
    "description": "A group of professional bank robbers.",
    "year": 1995,
    "duration": 170,
    "rating": 8.3,
    "director": "Michael Mann",
    "genre": ["Crime", "Drama"],
    "cast": ["Al Pacino", "Robert De Niro"]
  },
  {
    "id": 3,
    "title": "Tom & Jerry <Remastered>",
    "description": "Cat chases mouse."
  }
]"#;

/// Test fixture wrapping the application router.
pub struct TestFixture {
    pub router: Router,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub cache_control: Option<String>,
    pub text: String,
    pub body: Value,
}

impl TestFixture {
    /// Fixture over [`MOVIES_JSON`].
    pub async fn new() -> Self {
        Self::with_json(MOVIES_JSON).await
    }

    /// Fixture over a custom catalog document.
    pub async fn with_json(json: &str) -> Self {
        let catalog = StaticCatalog::from_json(json).expect("Fixture JSON must parse");
        Self::with_catalog(Arc::new(catalog)).await
    }

    /// Fixture over any catalog, pre-rendering pages from it.
    pub async fn with_catalog(catalog: Arc<dyn MovieCatalog>) -> Self {
        let prerendered = PrerenderedPages::build(catalog.as_ref())
            .await
            .expect("Failed to pre-render fixture pages");
        Self::build(catalog, prerendered)
    }

    /// Fixture whose catalog source does not exist, so every catalog read
    /// fails. No pages are pre-rendered.
    pub fn with_broken_catalog() -> Self {
        let catalog = JsonFileCatalog::new("/nonexistent/cinedeck/movies.json");
        Self::build(Arc::new(catalog), PrerenderedPages::default())
    }

    fn build(catalog: Arc<dyn MovieCatalog>, prerendered: PrerenderedPages) -> Self {
        let state = Arc::new(AppState::new(
            Config::default(),
            catalog,
            LiveStatsGenerator::instant(),
            prerendered,
        ));

        Self {
            router: create_router(state),
        }
    }

    /// Send a GET request to the test router.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let header_value = |name: header::HeaderName| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let content_type = header_value(header::CONTENT_TYPE);
        let cache_control = header_value(header::CACHE_CONTROL);

        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            content_type,
            cache_control,
            text,
            body,
        }
    }
}

impl TestResponse {
    pub fn is_html(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("text/html"))
    }
}
