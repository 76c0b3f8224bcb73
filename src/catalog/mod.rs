//! The icon collection and its loader
//!
//! A [`Catalog`] is built once from the bundled dataset (one JSON file per
//! region) and never mutated afterwards. Cloning is cheap; every component
//! reads the same shared records.

mod detail;
pub mod error;
mod stats;

pub use detail::DetailCache;
pub use error::CatalogError;
pub use stats::{CatalogStats, CountryCount};

use crate::IconRecord;
use crate::slug::slugify;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

type Result<T> = std::result::Result<T, CatalogError>;

/// Read-only, shareable collection of icon records
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Arc<[IconRecord]>,
}

impl Catalog {
    /// Build a catalog from in-memory records
    ///
    /// Record order is preserved.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` or `CatalogError::DuplicateCity`
    /// if the records violate the collection's uniqueness keys.
    pub fn from_records(records: Vec<IconRecord>) -> Result<Self> {
        let mut ids = HashSet::with_capacity(records.len());
        let mut places = HashSet::with_capacity(records.len());

        for record in &records {
            if !ids.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
            if !places.insert((record.city.as_str(), record.country.as_str())) {
                return Err(CatalogError::DuplicateCity {
                    city: record.city.clone(),
                    country: record.country.clone(),
                });
            }
        }

        Ok(Self {
            records: records.into(),
        })
    }

    /// Load every `*.json` file in `dir`, in filename order
    ///
    /// Each file holds an array of records for one region.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the directory is missing, a file cannot be
    /// read or parsed, or the combined records violate uniqueness.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(CatalogError::DataDirNotFound(dir.display().to_string()));
        }

        let entries = fs::read_dir(dir).map_err(|source| CatalogError::ReadError {
            path: dir.display().to_string(),
            source,
        })?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort();

        let mut records = Vec::new();
        for file in &files {
            let batch = read_region_file(file)?;
            debug!(file = %file.display(), count = batch.len(), "loaded region file");
            records.extend(batch);
        }

        let catalog = Self::from_records(records)?;
        info!(files = files.len(), icons = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// All records, in load order
    #[must_use]
    pub fn records(&self) -> &[IconRecord] {
        &self.records
    }

    /// Look up a record by identifier
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&IconRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the catalog holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct country names, sorted
    #[must_use]
    pub fn countries(&self) -> Vec<&str> {
        self.distinct(|r| &r.country)
    }

    /// Distinct region names, sorted
    #[must_use]
    pub fn regions(&self) -> Vec<&str> {
        self.distinct(|r| &r.region)
    }

    /// Distinct category names, sorted
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.distinct(|r| &r.category)
    }

    /// True if at least one record's country slugifies to `slug`
    #[must_use]
    pub fn has_country_slug(&self, slug: &str) -> bool {
        self.records.iter().any(|r| slugify(&r.country) == slug)
    }

    fn distinct<'a>(&'a self, field: impl Fn(&'a IconRecord) -> &'a String) -> Vec<&'a str> {
        let mut values: Vec<&str> = self.records.iter().map(|r| field(r).as_str()).collect();
        values.sort_unstable();
        values.dedup();
        values
    }
}

fn read_region_file(path: &Path) -> Result<Vec<IconRecord>> {
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::ReadError {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| CatalogError::ParseError {
        path: path.display().to_string(),
        source,
    })
}
