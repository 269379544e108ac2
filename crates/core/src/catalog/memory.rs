//! In-memory catalog over a fixed list of records.

use std::path::Path;

use async_trait::async_trait;

use super::{CatalogError, JsonFileCatalog, MovieCatalog, MovieRecord};

/// Catalog backed by records held in memory. Never fails.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    movies: Vec<MovieRecord>,
}

impl StaticCatalog {
    pub fn new(movies: Vec<MovieRecord>) -> Self {
        Self { movies }
    }

    /// Build from a JSON document in the data file format.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let movies = JsonFileCatalog::parse(Path::new("<memory>"), json.as_bytes())?;
        Ok(Self::new(movies))
    }
}

#[async_trait]
impl MovieCatalog for StaticCatalog {
    async fn list_all(&self) -> Result<Vec<MovieRecord>, CatalogError> {
        Ok(self.movies.clone())
    }
}
