//! Search command - interactive search over stdin
//!
//! Every input line replaces the query. Settled queries are reported once
//! through a trailing debounce, however many keystrokes (lines) led to them.

use crate::{
    CityIconsError,
    catalog::Catalog,
    navigation::{NavEvent, Navigator},
    output,
    search::Debouncer,
};
use std::io::{BufRead, Write};
use std::time::{Duration, Instant};
use tracing::info;

type Result<T> = std::result::Result<T, CityIconsError>;

/// Execute the search command
///
/// `clock` supplies the arrival time of each line. Returns the settled
/// queries in the order they were reported.
///
/// # Errors
/// Returns an error if reading `input` or writing to `out` fails
pub fn execute(
    catalog: &Catalog,
    region: Option<String>,
    quiet_period: Duration,
    input: impl BufRead,
    mut clock: impl FnMut() -> Instant,
    quiet: bool,
    out: &mut impl Write,
) -> Result<Vec<String>> {
    let mut navigator = Navigator::new(catalog.clone());
    navigator.handle(NavEvent::Mount("/".to_string()));
    if let Some(region) = region {
        navigator.handle(NavEvent::RegionClick(region));
    }

    let mut debouncer = Debouncer::new(quiet_period);
    let mut settled = Vec::new();

    for line in input.lines() {
        let line = line?;
        let now = clock();

        // the previous query may have settled while waiting for this line
        if let Some(query) = debouncer.poll(now) {
            info!(%query, "search settled");
            settled.push(query);
        }

        let query = line.trim().to_string();
        navigator.handle(NavEvent::Query(query.clone()));
        debouncer.push(query, now);

        let visible = navigator.visible();
        if !quiet {
            writeln!(out, "> {} ({} matches)", line.trim(), visible.len())?;
        }
        for record in visible {
            writeln!(out, "{}", output::record_line(record, quiet))?;
        }
    }

    if let Some(query) = debouncer.flush() {
        info!(%query, "search settled");
        settled.push(query);
    }
    Ok(settled)
}
