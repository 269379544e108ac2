//! Load-once catalog keyed by the data file's modification time and length.

use std::path::Path;
use std::sync::Arc;
use std::time::SystemTime;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::{CatalogError, JsonFileCatalog, MovieCatalog, MovieRecord};
use crate::metrics::CATALOG_CACHE_LOOKUPS;

/// Identity of the data file as seen by `metadata`.
///
/// A rewrite inside one timestamp tick is only noticed if the length changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SourceStamp {
    modified: SystemTime,
    len: u64,
}

struct Snapshot {
    stamp: SourceStamp,
    movies: Arc<Vec<MovieRecord>>,
}

/// Wraps a [`JsonFileCatalog`] and reuses the parsed records until the
/// file's modification time or length changes.
///
/// Failed loads are never cached: the error is returned and the next query
/// tries again.
pub struct CachedCatalog {
    inner: JsonFileCatalog,
    snapshot: RwLock<Option<Snapshot>>,
}

impl CachedCatalog {
    pub fn new(inner: JsonFileCatalog) -> Self {
        Self {
            inner,
            snapshot: RwLock::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    /// Drop the cached snapshot so the next query reloads the file.
    pub async fn invalidate(&self) {
        let mut guard = self.snapshot.write().await;
        if guard.take().is_some() {
            debug!(path = %self.path().display(), "Catalog cache invalidated");
        }
    }

    async fn source_stamp(&self) -> Result<SourceStamp, CatalogError> {
        let unavailable = |e: std::io::Error| CatalogError::SourceUnavailable {
            path: self.path().display().to_string(),
            source: e,
        };
        let metadata = tokio::fs::metadata(self.path()).await.map_err(unavailable)?;
        Ok(SourceStamp {
            modified: metadata.modified().map_err(unavailable)?,
            len: metadata.len(),
        })
    }

    async fn records(&self) -> Result<Arc<Vec<MovieRecord>>, CatalogError> {
        let stamp = self.source_stamp().await?;

        {
            let guard = self.snapshot.read().await;
            if let Some(snapshot) = guard.as_ref().filter(|s| s.stamp == stamp) {
                CATALOG_CACHE_LOOKUPS.with_label_values(&["hit"]).inc();
                return Ok(Arc::clone(&snapshot.movies));
            }
        }

        let mut guard = self.snapshot.write().await;
        // Another query may have refreshed while we waited for the lock.
        if let Some(snapshot) = guard.as_ref().filter(|s| s.stamp == stamp) {
            CATALOG_CACHE_LOOKUPS.with_label_values(&["hit"]).inc();
            return Ok(Arc::clone(&snapshot.movies));
        }

        CATALOG_CACHE_LOOKUPS.with_label_values(&["miss"]).inc();
        let movies = Arc::new(self.inner.load().await?);
        info!(
            path = %self.path().display(),
            count = movies.len(),
            "Catalog cache refreshed"
        );
        *guard = Some(Snapshot {
            stamp,
            movies: Arc::clone(&movies),
        });

        Ok(movies)
    }
}

#[async_trait]
impl MovieCatalog for CachedCatalog {
    async fn list_all(&self) -> Result<Vec<MovieRecord>, CatalogError> {
        Ok(self.records().await?.as_ref().clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<MovieRecord>, CatalogError> {
        Ok(self.records().await?.iter().find(|m| m.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::time::Duration;
    use tempfile::TempDir;

    fn set_mtime(path: &Path, time: SystemTime) {
        File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(time)
            .unwrap();
    }

    fn setup(content: &str) -> (TempDir, std::path::PathBuf, CachedCatalog) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("movies.json");
        std::fs::write(&path, content).unwrap();
        let catalog = CachedCatalog::new(JsonFileCatalog::new(&path));
        (dir, path, catalog)
    }

    #[tokio::test]
    async fn test_serves_snapshot_while_source_unchanged() {
        let (_dir, path, catalog) = setup(r#"[{"id": 1, "title": "Inception"}]"#);
        let fixed = SystemTime::now() - Duration::from_secs(60);
        set_mtime(&path, fixed);

        assert_eq!(catalog.list_all().await.unwrap().len(), 1);

        // Same length and same modification time: indistinguishable.
        std::fs::write(&path, r#"[{"id": 1, "title": "Interstel"}]"#).unwrap();
        set_mtime(&path, fixed);

        let movies = catalog.list_all().await.unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Inception");
    }

    #[tokio::test]
    async fn test_reloads_when_length_changes_within_same_mtime() {
        let (_dir, path, catalog) = setup(r#"[{"id": 1, "title": "Inception"}]"#);
        let fixed = SystemTime::now() - Duration::from_secs(60);
        set_mtime(&path, fixed);
        assert_eq!(catalog.list_all().await.unwrap().len(), 1);

        std::fs::write(&path, r#"[{"id": 1, "title": "A"}, {"id": 2, "title": "B"}]"#).unwrap();
        set_mtime(&path, fixed);

        let movies = catalog.list_all().await.unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[1].title, "B");
    }

    #[tokio::test]
    async fn test_reloads_after_source_change() {
        let (_dir, path, catalog) = setup(r#"[{"id": 1, "title": "Inception"}]"#);
        set_mtime(&path, SystemTime::now() - Duration::from_secs(60));
        assert_eq!(catalog.list_all().await.unwrap().len(), 1);

        std::fs::write(&path, r#"[{"id": 1, "title": "A"}, {"id": 2, "title": "B"}]"#).unwrap();
        set_mtime(&path, SystemTime::now());

        assert_eq!(catalog.list_all().await.unwrap().len(), 2);
        assert_eq!(catalog.find_by_id(2).await.unwrap().unwrap().title, "B");
    }

    #[tokio::test]
    async fn test_invalidate_forces_reload() {
        let (_dir, path, catalog) = setup(r#"[{"id": 1, "title": "Inception"}]"#);
        let fixed = SystemTime::now() - Duration::from_secs(60);
        set_mtime(&path, fixed);
        assert_eq!(catalog.list_all().await.unwrap().len(), 1);

        // Empty array padded to the original length so only invalidate()
        // can trigger the reload.
        std::fs::write(&path, format!("[]{}", " ".repeat(31))).unwrap();
        set_mtime(&path, fixed);
        assert_eq!(catalog.list_all().await.unwrap().len(), 1);
        catalog.invalidate().await;

        assert!(catalog.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let (_dir, path, catalog) = setup("not json");

        let result = catalog.list_all().await;
        assert!(matches!(result, Err(CatalogError::MalformedData { .. })));

        std::fs::write(&path, r#"[{"id": 1, "title": "Inception"}]"#).unwrap();
        set_mtime(&path, SystemTime::now() + Duration::from_secs(5));

        assert_eq!(catalog.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_source() {
        let dir = TempDir::new().unwrap();
        let catalog = CachedCatalog::new(JsonFileCatalog::new(dir.path().join("missing.json")));

        let result = catalog.find_by_id(1).await;
        assert!(matches!(result, Err(CatalogError::SourceUnavailable { .. })));
    }

    #[tokio::test]
    async fn test_find_by_id_absent() {
        let (_dir, _path, catalog) = setup(r#"[{"id": 1, "title": "Inception"}]"#);
        assert!(catalog.find_by_id(2).await.unwrap().is_none());
        assert_eq!(catalog.find_by_id(1).await.unwrap().unwrap().title, "Inception");
    }
}
