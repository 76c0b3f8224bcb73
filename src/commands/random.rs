//! Random command - a decorative sample of icons

use crate::{CityIconsError, catalog::Catalog, output, random::decorative_sample};
use rand::Rng;
use std::io::Write;

type Result<T> = std::result::Result<T, CityIconsError>;

/// Execute the random command
///
/// # Errors
/// Returns an error if writing to `out` fails
pub fn execute<R: Rng + ?Sized>(
    catalog: &Catalog,
    rng: &mut R,
    quiet: bool,
    out: &mut impl Write,
) -> Result<()> {
    for record in decorative_sample(catalog.records(), rng) {
        writeln!(out, "{}", output::record_line(record, quiet))?;
    }
    Ok(())
}
