//! URL slugs for countries and cities
//!
//! Slugs are derived from display names and used for routing only. There is
//! no inverse: resolving a slug back to a record scans the collection and
//! compares the slugified fields.

use crate::IconRecord;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Convert a display name into a URL-safe slug
///
/// Lowercases, strips diacritics, drops anything that is not an ASCII letter
/// or digit, and joins the remaining words with single hyphens. Applying it
/// twice gives the same result as applying it once.
///
/// # Examples
/// ```
/// use cityicons::slug::slugify;
///
/// assert_eq!(slugify("São Paulo"), "sao-paulo");
/// assert_eq!(slugify("  Saint-Étienne  "), "saint-etienne");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for ch in text.nfd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase) {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch);
            pending_dash = false;
        } else if ch.is_whitespace() || ch == '-' {
            pending_dash = true;
        }
    }

    slug
}

/// Find the record addressed by a `/{country}/{city}` slug pair
///
/// First match wins if the collection holds duplicates.
#[must_use]
pub fn find_icon_by_slugs<'a>(
    records: &'a [IconRecord],
    country_slug: &str,
    city_slug: &str,
) -> Option<&'a IconRecord> {
    records
        .iter()
        .find(|r| slugify(&r.country) == country_slug && slugify(&r.city) == city_slug)
}

/// Resolve a country slug to the country's display name
#[must_use]
pub fn country_by_slug<'a>(records: &'a [IconRecord], country_slug: &str) -> Option<&'a str> {
    records
        .iter()
        .find(|r| slugify(&r.country) == country_slug)
        .map(|r| r.country.as_str())
}

/// Canonical detail path for a record
#[must_use]
pub fn icon_path(record: &IconRecord) -> String {
    format!("/{}/{}", slugify(&record.country), slugify(&record.city))
}

/// Canonical path of a country page
#[must_use]
pub fn country_path(country: &str) -> String {
    format!("/{}", slugify(country))
}
