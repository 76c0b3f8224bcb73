//! Catalog-specific error types
//!
//! This module defines the errors that can occur while loading the bundled
//! dataset or fetching an icon's raw image content.
//!
//! # Error Types
//!
//! - **`DataDirNotFound`**: The configured data directory does not exist
//! - **`ReadError`** / **`ParseError`**: A dataset file could not be read or decoded
//! - **`DuplicateId`** / **`DuplicateCity`**: The collection violates its uniqueness keys
//! - **`FetchError`**: Fetching an icon's image failed; the cache is left untouched
//!
//! Slug resolution misses are not errors; they surface as `None`.

use thiserror::Error;

/// Catalog-specific errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Data directory does not exist
    #[error("Data directory not found: {0}")]
    DataDirNotFound(String),

    /// A dataset file could not be read
    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A dataset file is not valid JSON
    #[error("Failed to parse {path}: {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two records share an identifier
    #[error("Duplicate icon id: {0}")]
    DuplicateId(String),

    /// Two records share a city and country
    #[error("Duplicate city: {city}, {country}")]
    DuplicateCity { city: String, country: String },

    /// Raw image content could not be fetched
    #[error("Failed to fetch image for '{id}': {reason}")]
    FetchError { id: String, reason: String },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
