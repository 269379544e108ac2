//! Detail pages rendered ahead of time (the "static generation" strategy).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use cinedeck_core::{CatalogError, MovieCatalog};
use tracing::info;

use crate::pages;

/// Every movie's detail page, rendered once from a single catalog read.
///
/// Later changes to the catalog source are not reflected until the set is
/// rebuilt.
#[derive(Debug, Clone)]
pub struct PrerenderedPages {
    pages: HashMap<i64, String>,
    generated_at: DateTime<Utc>,
}

impl Default for PrerenderedPages {
    fn default() -> Self {
        Self {
            pages: HashMap::new(),
            generated_at: Utc::now(),
        }
    }
}

impl PrerenderedPages {
    /// Read the catalog once and render a page per record.
    ///
    /// If ids repeat, the first record in source order gets the page, the
    /// same record a lookup by id would return.
    pub async fn build(catalog: &dyn MovieCatalog) -> Result<Self, CatalogError> {
        let movies = catalog.list_all().await?;
        let generated_at = Utc::now();

        let mut rendered = HashMap::with_capacity(movies.len());
        for movie in &movies {
            rendered
                .entry(movie.id)
                .or_insert_with(|| pages::movie_static(movie, generated_at));
        }

        info!(count = rendered.len(), "Pre-rendered movie detail pages");
        Ok(Self {
            pages: rendered,
            generated_at,
        })
    }

    pub fn get(&self, id: i64) -> Option<&str> {
        self.pages.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinedeck_core::{JsonFileCatalog, StaticCatalog};

    #[tokio::test]
    async fn test_build_renders_every_movie() {
        let catalog = StaticCatalog::from_json(
            r#"[{"id": 1, "title": "Inception"}, {"id": 2, "title": "Heat"}]"#,
        )
        .unwrap();

        let pages = PrerenderedPages::build(&catalog).await.unwrap();
        assert_eq!(pages.len(), 2);
        assert!(pages.get(1).unwrap().contains("Inception"));
        assert!(pages.get(2).unwrap().contains("Heat"));
        assert!(pages.get(3).is_none());
    }

    #[tokio::test]
    async fn test_duplicate_ids_keep_first_record() {
        let catalog = StaticCatalog::from_json(
            r#"[{"id": 1, "title": "First"}, {"id": 1, "title": "Second"}]"#,
        )
        .unwrap();

        let pages = PrerenderedPages::build(&catalog).await.unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages.get(1).unwrap().contains("First"));
    }

    #[tokio::test]
    async fn test_build_propagates_catalog_errors() {
        let catalog = JsonFileCatalog::new("/nonexistent/movies.json");
        let result = PrerenderedPages::build(&catalog).await;
        assert!(matches!(result, Err(CatalogError::SourceUnavailable { .. })));
    }

    #[test]
    fn test_default_is_empty() {
        assert!(PrerenderedPages::default().is_empty());
    }
}
