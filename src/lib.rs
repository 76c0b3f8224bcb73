//! cityicons - browse a catalog of city icons
//!
//! This library provides the logic behind the city icon catalog: loading the
//! bundled dataset, slug-based routing, search and filtering, keeping the
//! detail overlay in sync with the current path, and the random pick features.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod navigation;
pub mod output;
pub mod random;
pub mod search;
pub mod slug;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum CityIconsError {
    /// Catalog loading or resource fetch error
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Random pick error
    #[error("Random pick error: {0}")]
    RandomError(#[from] random::RandomError),
    /// Navigation event error
    #[error("Navigation error: {0}")]
    NavigationError(#[from] navigation::NavigationError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// JSON serialization error
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A single catalog entry: one city's icon and its metadata
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IconRecord {
    pub id: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub region: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl IconRecord {
    /// Create a record with no tags and no description
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        region: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        let id = id.into();
        let city = city.into();
        Self {
            image: format!("{id}.svg"),
            name: city.clone(),
            id,
            city,
            country: country.into(),
            region: region.into(),
            category: category.into(),
            tags: Vec::new(),
            description: None,
        }
    }

    /// Builder-style setter for tags
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Builder-style setter for the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
