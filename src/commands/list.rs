//! List command - the visible listing for a scope and query

use crate::{
    CityIconsError, catalog::Catalog, output, search::compute_visible, slug::country_by_slug,
};
use std::io::Write;

type Result<T> = std::result::Result<T, CityIconsError>;

/// Execute the list command
///
/// An unknown country slug is reported as not found rather than as an error.
///
/// # Errors
/// Returns an error if writing to `out` fails
pub fn execute(
    catalog: &Catalog,
    query: Option<&str>,
    country_slug: Option<&str>,
    region: Option<&str>,
    quiet: bool,
    out: &mut impl Write,
) -> Result<()> {
    let country = match country_slug {
        Some(slug) => match country_by_slug(catalog.records(), slug) {
            Some(country) => Some(country),
            None => {
                writeln!(out, "Not found: /{slug}")?;
                return Ok(());
            }
        },
        None => None,
    };

    let visible = compute_visible(catalog.records(), country, region, query.unwrap_or_default());

    if visible.is_empty() {
        if !quiet {
            writeln!(out, "No icons match.")?;
        }
        return Ok(());
    }

    if !quiet {
        writeln!(out, "{} of {} icons:", visible.len(), catalog.len())?;
    }
    for record in visible {
        writeln!(out, "{}", output::record_line(record, quiet))?;
    }
    Ok(())
}
