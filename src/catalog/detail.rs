//! On-demand fetch of an icon's raw image content

use super::error::CatalogError;
use crate::IconRecord;
use moka::sync::Cache;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Fetch-once cache of raw icon content, keyed by record id
///
/// Entries never expire for the lifetime of the cache. A failed fetch
/// leaves nothing behind, so calling again retries.
pub struct DetailCache {
    image_dir: PathBuf,
    cache: Cache<String, Arc<[u8]>>,
}

impl DetailCache {
    /// Create a cache reading images from `image_dir`
    ///
    /// The cache is unbounded: nothing is evicted for the lifetime of the
    /// cache.
    #[must_use]
    pub fn new(image_dir: impl Into<PathBuf>) -> Self {
        Self {
            image_dir: image_dir.into(),
            cache: Cache::builder().build(),
        }
    }

    /// Directory images are read from
    #[must_use]
    pub fn image_dir(&self) -> &Path {
        &self.image_dir
    }

    /// Raw content of the record's image, fetched on first use
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::FetchError` if the image cannot be read. The
    /// cache is not populated in that case.
    pub fn fetch(&self, record: &IconRecord) -> Result<Arc<[u8]>, CatalogError> {
        if let Some(content) = self.cache.get(&record.id) {
            return Ok(content);
        }

        let path = self.image_dir.join(&record.image);
        let content: Arc<[u8]> = match fs::read(&path) {
            Ok(bytes) => bytes.into(),
            Err(e) => {
                warn!(id = %record.id, path = %path.display(), error = %e, "image fetch failed");
                return Err(CatalogError::FetchError {
                    id: record.id.clone(),
                    reason: e.to_string(),
                });
            }
        };

        debug!(id = %record.id, bytes = content.len(), "image cached");
        self.cache.insert(record.id.clone(), Arc::clone(&content));
        Ok(content)
    }

    /// True if the record's image is already cached
    #[must_use]
    pub fn is_cached(&self, id: &str) -> bool {
        self.cache.contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record() -> IconRecord {
        IconRecord::new("paris", "Paris", "France", "Europe", "Capital")
    }

    #[test]
    fn test_fetch_reads_image() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("paris.svg"), "<svg/>").unwrap();

        let cache = DetailCache::new(dir.path());
        let content = cache.fetch(&record()).unwrap();
        assert_eq!(&*content, b"<svg/>");
        assert!(cache.is_cached("paris"));
    }

    #[test]
    fn test_fetch_is_cached_for_session() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("paris.svg"), "<svg>one</svg>").unwrap();

        let cache = DetailCache::new(dir.path());
        let first = cache.fetch(&record()).unwrap();

        fs::write(dir.path().join("paris.svg"), "<svg>two</svg>").unwrap();
        let second = cache.fetch(&record()).unwrap();

        assert_eq!(first, second);
        assert_eq!(&*second, b"<svg>one</svg>");
    }

    #[test]
    fn test_large_catalog_never_evicted() {
        let dir = TempDir::new().unwrap();
        let records: Vec<IconRecord> = (0..1500)
            .map(|i| {
                IconRecord::new(
                    format!("icon-{i}"),
                    format!("City {i}"),
                    "France",
                    "Europe",
                    "Landmark",
                )
            })
            .collect();
        for record in &records {
            fs::write(dir.path().join(&record.image), &record.id).unwrap();
        }

        let cache = DetailCache::new(dir.path());
        for record in &records {
            cache.fetch(record).unwrap();
        }
        // served from the cache once the files are gone
        for record in &records {
            fs::remove_file(dir.path().join(&record.image)).unwrap();
        }
        for record in &records {
            assert!(cache.is_cached(&record.id), "{} evicted", record.id);
            assert_eq!(&*cache.fetch(record).unwrap(), record.id.as_bytes());
        }
    }

    #[test]
    fn test_failed_fetch_retries() {
        let dir = TempDir::new().unwrap();
        let cache = DetailCache::new(dir.path());

        let result = cache.fetch(&record());
        assert!(matches!(result, Err(CatalogError::FetchError { ref id, .. }) if id == "paris"));
        assert!(!cache.is_cached("paris"));

        fs::write(dir.path().join("paris.svg"), "<svg/>").unwrap();
        assert!(cache.fetch(&record()).is_ok());
    }
}
