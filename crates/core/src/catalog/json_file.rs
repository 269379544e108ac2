//! JSON file backed movie catalog.

use std::path::{Path, PathBuf};
use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::{CatalogError, MovieCatalog, MovieRecord};
use crate::metrics::{CATALOG_LOADS, CATALOG_LOAD_DURATION};

/// Catalog that reads and parses its JSON file on every query.
///
/// Holds no state besides the path, so concurrent queries never contend.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a full data file. Either every record is valid or the load fails.
    pub fn parse(path: &Path, data: &[u8]) -> Result<Vec<MovieRecord>, CatalogError> {
        serde_json::from_slice::<Vec<MovieRecord>>(data).map_err(|e| {
            CatalogError::MalformedData {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        })
    }

    pub(crate) async fn load(&self) -> Result<Vec<MovieRecord>, CatalogError> {
        let start = Instant::now();
        let result = self.read_and_parse().await;

        let label = match &result {
            Ok(_) => "ok",
            Err(e) => e.kind(),
        };
        CATALOG_LOADS.with_label_values(&[label]).inc();
        CATALOG_LOAD_DURATION
            .with_label_values(&[label])
            .observe(start.elapsed().as_secs_f64());

        match &result {
            Ok(movies) => debug!(path = %self.path.display(), count = movies.len(), "Loaded movie catalog"),
            Err(e) => warn!(path = %self.path.display(), "Failed to load movie catalog: {}", e),
        }

        result
    }

    async fn read_and_parse(&self) -> Result<Vec<MovieRecord>, CatalogError> {
        let data = tokio::fs::read(&self.path)
            .await
            .map_err(|e| CatalogError::SourceUnavailable {
                path: self.path.display().to_string(),
                source: e,
            })?;

        Self::parse(&self.path, &data)
    }
}

#[async_trait]
impl MovieCatalog for JsonFileCatalog {
    async fn list_all(&self) -> Result<Vec<MovieRecord>, CatalogError> {
        self.load().await
    }
}
