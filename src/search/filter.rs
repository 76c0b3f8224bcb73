//! Scope and free-text filtering of icon records
//!
//! [`compute_visible`] narrows the collection in a fixed order: country
//! scope, region scope, free-text query, de-duplication, then a
//! locale-aware sort by city name. Each stage only sees what the previous
//! stage kept.
//!
//! # Iterator Adapters
//!
//! The individual stages are also exposed through [`IconFilterExt`] so
//! callers can chain them:
//!
//! ```
//! use cityicons::IconRecord;
//! use cityicons::search::filter::IconFilterExt;
//!
//! let records = vec![IconRecord::new("paris", "Paris", "France", "Europe", "Capital")];
//! let hits: Vec<&IconRecord> = records
//!     .iter()
//!     .in_region(Some("Europe"))
//!     .matching_query("par")
//!     .collect();
//! assert_eq!(hits.len(), 1);
//! ```

use crate::IconRecord;
use std::cmp::Ordering;
use std::collections::HashSet;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Well-known country abbreviations and the lowercased country they stand for
pub const COUNTRY_ABBREVIATIONS: &[(&str, &str)] = &[
    ("us", "united states"),
    ("usa", "united states"),
    ("uk", "united kingdom"),
    ("uae", "united arab emirates"),
];

/// Compute the visible subset of `all` for the given scopes and query
///
/// Empty or whitespace-only scopes and queries mean "no filter". The result
/// is sorted by city name and holds each identifier at most once.
#[must_use]
pub fn compute_visible<'a>(
    all: &'a [IconRecord],
    country_scope: Option<&str>,
    region_scope: Option<&str>,
    query: &str,
) -> Vec<&'a IconRecord> {
    let mut seen = HashSet::new();
    let mut visible: Vec<&IconRecord> = all
        .iter()
        .in_country(country_scope)
        .in_region(region_scope)
        .matching_query(query)
        .filter(|r| seen.insert(r.id.as_str()))
        .collect();

    visible.sort_by(|a, b| compare_cities(a, b));
    visible
}

/// True if `record` matches the free-text `query`
///
/// The query matches when it is a case-insensitive substring of the city or
/// region. Country names only count when the query passes the country gate
/// (see [`passes_country_gate`]) or is a known abbreviation of the country.
/// An empty query matches everything.
#[must_use]
pub fn matches_query(record: &IconRecord, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    matches_normalized(record, &query)
}

fn matches_normalized(record: &IconRecord, query: &str) -> bool {
    if record.city.to_lowercase().contains(query) || record.region.to_lowercase().contains(query) {
        return true;
    }

    let country = record.country.to_lowercase();
    if abbreviation_of(query) == Some(country.as_str()) {
        return true;
    }
    country.contains(query) && passes_country_gate(&country, query)
}

fn abbreviation_of(query: &str) -> Option<&'static str> {
    COUNTRY_ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| *abbr == query)
        .map(|(_, country)| *country)
}

/// Whether a lowercased query may match the lowercased `country` name
///
/// One- and two-letter queries produce noisy matches against country names,
/// so they only count as known abbreviations or true prefixes.
#[must_use]
pub fn passes_country_gate(country: &str, query: &str) -> bool {
    query.chars().count() >= 3 || abbreviation_of(query).is_some() || country.starts_with(query)
}

/// Sort key approximating locale-aware collation: accents stripped, lowercased
#[must_use]
pub fn collation_key(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Order two records by city name
///
/// Ties on the collation key fall back to the raw city name, then the id,
/// so the order is total.
#[must_use]
pub fn compare_cities(a: &IconRecord, b: &IconRecord) -> Ordering {
    collation_key(&a.city)
        .cmp(&collation_key(&b.city))
        .then_with(|| a.city.cmp(&b.city))
        .then_with(|| a.id.cmp(&b.id))
}

fn non_blank(scope: Option<&str>) -> Option<&str> {
    scope.filter(|s| !s.trim().is_empty())
}

/// Extension trait adding the filter stages to iterators of record references
pub trait IconFilterExt<'a>: Iterator<Item = &'a IconRecord> + Sized {
    /// Keep records whose country equals `country` exactly
    ///
    /// `None` or a blank string keeps everything.
    fn in_country(self, country: Option<&str>) -> impl Iterator<Item = &'a IconRecord> {
        let country = non_blank(country).map(str::to_owned);
        self.filter(move |r| country.as_deref().is_none_or(|c| r.country == c))
    }

    /// Keep records whose region equals `region` exactly
    ///
    /// `None` or a blank string keeps everything.
    fn in_region(self, region: Option<&str>) -> impl Iterator<Item = &'a IconRecord> {
        let region = non_blank(region).map(str::to_owned);
        self.filter(move |r| region.as_deref().is_none_or(|g| r.region == g))
    }

    /// Keep records matching the free-text query
    fn matching_query(self, query: &str) -> impl Iterator<Item = &'a IconRecord> {
        let query = query.trim().to_lowercase();
        self.filter(move |r| query.is_empty() || matches_normalized(r, &query))
    }
}

impl<'a, I> IconFilterExt<'a> for I where I: Iterator<Item = &'a IconRecord> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_records;

    fn cities(records: &[&IconRecord]) -> Vec<String> {
        records.iter().map(|r| r.city.clone()).collect()
    }

    fn is_sorted_unique(records: &[&IconRecord]) -> bool {
        let sorted = records.windows(2).all(|w| compare_cities(w[0], w[1]) != Ordering::Greater);
        let mut ids = HashSet::new();
        sorted && records.iter().all(|r| ids.insert(&r.id))
    }

    #[test]
    fn test_no_filters_returns_all_sorted() {
        let all = sample_records();
        let visible = compute_visible(&all, None, None, "");
        assert_eq!(visible.len(), all.len());
        assert_eq!(
            cities(&visible),
            vec![
                "Berlin", "Chicago", "Lyon", "Munich", "New York", "Paris", "São Paulo",
                "Sydney", "Tokyo", "Zürich"
            ]
        );
    }

    #[test]
    fn test_whitespace_query_is_no_query() {
        let all = sample_records();
        assert_eq!(compute_visible(&all, None, None, "   ").len(), all.len());
    }

    #[test]
    fn test_country_scope_exact() {
        let all = sample_records();
        let visible = compute_visible(&all, Some("France"), None, "");
        assert_eq!(cities(&visible), vec!["Lyon", "Paris"]);

        // case-sensitive: the scope is a canonical display string
        assert!(compute_visible(&all, Some("france"), None, "").is_empty());
    }

    #[test]
    fn test_empty_scopes_mean_no_filter() {
        let all = sample_records();
        assert_eq!(compute_visible(&all, Some(""), Some("  "), "").len(), all.len());
    }

    #[test]
    fn test_region_scope_then_query() {
        let all = sample_records();
        let visible = compute_visible(&all, None, Some("Europe"), "ber");
        assert_eq!(cities(&visible), vec!["Berlin"]);

        let visible = compute_visible(&all, Some("Germany"), Some("Asia"), "");
        assert!(visible.is_empty());
    }

    #[test]
    fn test_query_matches_city_case_insensitive() {
        let all = sample_records();
        let visible = compute_visible(&all, None, None, "  NEW  ");
        assert_eq!(cities(&visible), vec!["New York"]);
    }

    #[test]
    fn test_query_matches_region() {
        let all = sample_records();
        let visible = compute_visible(&all, None, None, "america");
        assert_eq!(cities(&visible), vec!["Chicago", "New York", "São Paulo"]);
    }

    #[test]
    fn test_short_query_country_prefix() {
        let all = sample_records();
        let visible = compute_visible(&all, None, None, "fr");
        let names = cities(&visible);
        assert!(names.contains(&"Paris".to_string()));
        assert!(names.contains(&"Lyon".to_string()));
        assert!(!names.contains(&"Berlin".to_string()));
        assert!(!names.contains(&"Munich".to_string()));
    }

    #[test]
    fn test_short_query_country_substring_gated() {
        let all = sample_records();
        // "united states" contains "st" but neither starts with it nor is "st" an abbreviation
        assert!(compute_visible(&all, None, None, "st").is_empty());
    }

    #[test]
    fn test_abbreviation_allowlist() {
        let all = sample_records();
        let names = cities(&compute_visible(&all, None, None, "us"));
        assert!(names.contains(&"New York".to_string()));
        assert!(names.contains(&"Chicago".to_string()));
    }

    #[test]
    fn test_abbreviation_expands_to_country() {
        let mut all = sample_records();
        all.push(IconRecord::new("london", "London", "United Kingdom", "Europe", "Capital"));
        // "uk" is not a substring of "united kingdom"
        let names = cities(&compute_visible(&all, None, None, "UK"));
        assert_eq!(names, vec!["London"]);
    }

    #[test]
    fn test_long_query_country_substring() {
        let all = sample_records();
        let visible = compute_visible(&all, None, None, "many");
        assert_eq!(cities(&visible), vec!["Berlin", "Munich"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let all = sample_records();
        assert!(compute_visible(&all, None, None, "xyz!?").is_empty());
    }

    #[test]
    fn test_deduplicates_by_id() {
        let mut all = sample_records();
        all.push(all[0].clone());
        let visible = compute_visible(&all, None, None, "");
        assert_eq!(visible.len(), all.len() - 1);
        assert!(is_sorted_unique(&visible));
    }

    #[test]
    fn test_results_always_sorted_unique() {
        let all = sample_records();
        for query in ["", "a", "o", "an", "ia", "ope", "us", "zz"] {
            for region in [None, Some("Europe"), Some("Asia")] {
                let visible = compute_visible(&all, None, region, query);
                assert!(is_sorted_unique(&visible), "query {query:?} region {region:?}");
            }
        }
    }

    #[test]
    fn test_pure_repeated_calls() {
        let all = sample_records();
        let first = compute_visible(&all, None, None, "o");
        let second = compute_visible(&all, None, None, "o");
        assert_eq!(first, second);
    }

    #[test]
    fn test_passes_country_gate() {
        assert!(passes_country_gate("germany", "ger"));
        assert!(passes_country_gate("united states", "us"));
        assert!(passes_country_gate("france", "fr"));
        assert!(!passes_country_gate("united states", "st"));
        assert!(!passes_country_gate("germany", "y"));
    }

    #[test]
    fn test_collation_ignores_accents() {
        assert_eq!(collation_key("Zürich"), "zurich");
        assert_eq!(collation_key("São Paulo"), "sao paulo");
        let a = IconRecord::new("a", "Évora", "Portugal", "Europe", "Landmark");
        let b = IconRecord::new("b", "Essen", "Germany", "Europe", "Landmark");
        let c = IconRecord::new("c", "Faro", "Portugal", "Europe", "Landmark");
        assert_eq!(compare_cities(&b, &a), Ordering::Less);
        assert_eq!(compare_cities(&a, &c), Ordering::Less);
    }

    #[test]
    fn test_filter_ext_chaining() {
        let all = sample_records();
        let hits: Vec<&IconRecord> = all
            .iter()
            .in_country(Some("United States"))
            .matching_query("chi")
            .collect();
        assert_eq!(cities(&hits), vec!["Chicago"]);
    }
}
