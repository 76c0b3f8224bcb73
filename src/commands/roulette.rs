//! Roulette command - weighted three-pick draw

use crate::{
    CityIconsError,
    catalog::Catalog,
    output,
    random::{RouletteConfig, RouletteOutcome, roulette_draw},
};
use rand::Rng;
use std::io::Write;

type Result<T> = std::result::Result<T, CityIconsError>;

/// Execute the roulette command
///
/// # Errors
/// Returns an error if the catalog is empty, the odds are invalid, or
/// writing to `out` fails
pub fn execute<R: Rng + ?Sized>(
    catalog: &Catalog,
    config: &RouletteConfig,
    rng: &mut R,
    quiet: bool,
    out: &mut impl Write,
) -> Result<()> {
    let picks = roulette_draw(catalog.records(), config, rng)?;
    let outcome = RouletteOutcome::classify(&picks);
    tracing::info!(?outcome, "roulette spun");

    for record in &picks {
        writeln!(out, "{}", output::record_line(record, quiet))?;
    }
    if !quiet {
        writeln!(out, "\n{outcome}")?;
    }
    Ok(())
}
