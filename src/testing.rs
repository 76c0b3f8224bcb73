//! Testing utilities for cityicons
//!
//! Provides a small fixed collection of records and helpers for writing
//! dataset directories to disk.
//!
//! Only available when compiled with `cfg(test)`.

use crate::IconRecord;
use crate::catalog::Catalog;
use std::fs;
use std::path::Path;

/// A small catalog spanning several regions
///
/// Cities are deliberately listed out of alphabetical order.
#[must_use]
pub fn sample_records() -> Vec<IconRecord> {
    vec![
        IconRecord::new("paris", "Paris", "France", "Europe", "Capital")
            .with_tags(vec!["eiffel".into(), "river".into()])
            .with_description("City of light"),
        IconRecord::new("lyon", "Lyon", "France", "Europe", "Landmark"),
        IconRecord::new("berlin", "Berlin", "Germany", "Europe", "Capital")
            .with_tags(vec!["wall".into()]),
        IconRecord::new("munich", "Munich", "Germany", "Europe", "Landmark"),
        IconRecord::new("zurich", "Zürich", "Switzerland", "Europe", "Landmark")
            .with_tags(vec!["lake".into(), "river".into()]),
        IconRecord::new("sao-paulo", "São Paulo", "Brazil", "South America", "Skyline"),
        IconRecord::new("new-york", "New York", "United States", "North America", "Skyline")
            .with_tags(vec!["skyline".into()]),
        IconRecord::new("chicago", "Chicago", "United States", "North America", "Skyline"),
        IconRecord::new("tokyo", "Tokyo", "Japan", "Asia", "Capital"),
        IconRecord::new("sydney", "Sydney", "Australia", "Oceania", "Landmark"),
    ]
}

/// The sample records wrapped in a catalog
///
/// # Panics
/// Panics if the sample records violate catalog invariants.
#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog::from_records(sample_records()).expect("sample records are valid")
}

/// Write records into `dir` as one JSON file per region
///
/// # Panics
/// Panics if the files cannot be written.
pub fn write_dataset(dir: &Path, records: &[IconRecord]) {
    let mut regions: Vec<&str> = records.iter().map(|r| r.region.as_str()).collect();
    regions.sort_unstable();
    regions.dedup();

    for region in regions {
        let subset: Vec<&IconRecord> = records.iter().filter(|r| r.region == region).collect();
        let name = format!("{}.json", crate::slug::slugify(region));
        let json = serde_json::to_string_pretty(&subset).expect("records serialize");
        fs::write(dir.join(name), json).expect("write dataset file");
    }
}
