//! Movie catalog - read-only access to the movie dataset.
//!
//! The dataset is a JSON array of movie objects. Every query reads it in full
//! (or reuses a snapshot, see [`CachedCatalog`]) and hands callers owned
//! copies, so nothing outside this module can change the backing source.

mod cached;
mod json_file;
mod memory;
mod types;

pub use cached::CachedCatalog;
pub use json_file::JsonFileCatalog;
pub use memory::StaticCatalog;
pub use types::*;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::config::CatalogConfig;

/// Trait for movie catalog storage.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// All records, in source order.
    async fn list_all(&self) -> Result<Vec<MovieRecord>, CatalogError>;

    /// First record (in source order) with the given id.
    ///
    /// Returns `Ok(None)` when no record matches; source failures from
    /// [`MovieCatalog::list_all`] propagate unchanged.
    async fn find_by_id(&self, id: i64) -> Result<Option<MovieRecord>, CatalogError> {
        let movies = self.list_all().await?;
        Ok(movies.into_iter().find(|m| m.id == id))
    }
}

/// Factory function to create the catalog described by config.
pub fn create_catalog(config: &CatalogConfig) -> Arc<dyn MovieCatalog> {
    let file = JsonFileCatalog::new(&config.path);
    if config.cache {
        info!("Catalog cache enabled for {:?}", config.path);
        Arc::new(CachedCatalog::new(file))
    } else {
        info!("Catalog reads {:?} on every query", config.path);
        Arc::new(file)
    }
}
