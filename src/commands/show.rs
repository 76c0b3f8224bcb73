//! Show command - resolve a deep link to its icon

use crate::{
    CityIconsError,
    catalog::{Catalog, DetailCache},
    output,
    slug::find_icon_by_slugs,
};
use std::io::Write;

type Result<T> = std::result::Result<T, CityIconsError>;

/// Execute the show command
///
/// With `raw`, the icon's image content is fetched through `cache` and
/// written as-is.
///
/// # Errors
/// Returns an error if the image fetch fails or writing to `out` fails
pub fn execute(
    catalog: &Catalog,
    cache: &DetailCache,
    country_slug: &str,
    city_slug: &str,
    raw: bool,
    out: &mut impl Write,
) -> Result<()> {
    let Some(record) = find_icon_by_slugs(catalog.records(), country_slug, city_slug) else {
        writeln!(out, "Not found: /{country_slug}/{city_slug}")?;
        return Ok(());
    };

    if raw {
        let content = cache.fetch(record)?;
        out.write_all(&content)?;
    } else {
        writeln!(out, "{}", output::record_detail(record))?;
    }
    Ok(())
}
