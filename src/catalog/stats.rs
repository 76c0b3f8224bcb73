//! Usage statistics over the catalog

use super::Catalog;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Icon count for one country
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCount {
    pub country: String,
    pub icons: usize,
}

/// Summary figures shown on the statistics page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total_icons: usize,
    pub countries: usize,
    pub distinct_tags: usize,
    pub by_region: BTreeMap<String, usize>,
    pub by_category: BTreeMap<String, usize>,
    /// Countries ordered by icon count (descending), then by name
    pub top_countries: Vec<CountryCount>,
}

impl CatalogStats {
    /// Compute statistics, keeping at most `top` countries in the ranking
    #[must_use]
    pub fn compute(catalog: &Catalog, top: usize) -> Self {
        let mut by_region = BTreeMap::new();
        let mut by_category = BTreeMap::new();
        let mut by_country: BTreeMap<&str, usize> = BTreeMap::new();
        let mut tags = BTreeSet::new();

        for record in catalog.records() {
            *by_region.entry(record.region.clone()).or_insert(0) += 1;
            *by_category.entry(record.category.clone()).or_insert(0) += 1;
            *by_country.entry(record.country.as_str()).or_insert(0) += 1;
            tags.extend(record.tags.iter().map(String::as_str));
        }

        let countries = by_country.len();
        let mut ranking: Vec<CountryCount> = by_country
            .into_iter()
            .map(|(country, icons)| CountryCount {
                country: country.to_string(),
                icons,
            })
            .collect();
        // BTreeMap iteration already sorted by name; stable sort keeps that for ties
        ranking.sort_by(|a, b| b.icons.cmp(&a.icons));
        ranking.truncate(top);

        Self {
            total_icons: catalog.len(),
            countries,
            distinct_tags: tags.len(),
            by_region,
            by_category,
            top_countries: ranking,
        }
    }
}
