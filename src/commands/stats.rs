//! Stats command - catalog statistics

use crate::{
    CityIconsError,
    catalog::{Catalog, CatalogStats},
    output,
};
use std::io::Write;

type Result<T> = std::result::Result<T, CityIconsError>;

/// Execute the stats command
///
/// Quiet mode prints the statistics as JSON.
///
/// # Errors
/// Returns an error if writing to `out` fails
pub fn execute(catalog: &Catalog, top: usize, quiet: bool, out: &mut impl Write) -> Result<()> {
    let stats = CatalogStats::compute(catalog, top);
    if quiet {
        let json = serde_json::to_string_pretty(&stats)?;
        writeln!(out, "{json}")?;
    } else {
        writeln!(out, "{}", output::stats(&stats))?;
    }
    Ok(())
}
