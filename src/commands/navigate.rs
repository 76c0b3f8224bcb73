//! Navigate command - replay navigation events from a starting path

use crate::{
    CityIconsError,
    catalog::Catalog,
    navigation::{NavEvent, Navigator},
    output,
};
use std::io::Write;

type Result<T> = std::result::Result<T, CityIconsError>;

/// Execute the navigate command
///
/// Mounts at `path`, applies `events` in order, and prints each effect
/// followed by the final path and overlay state.
///
/// # Errors
/// Returns an error if writing to `out` fails
pub fn execute(
    catalog: &Catalog,
    path: &str,
    events: Vec<NavEvent>,
    quiet: bool,
    out: &mut impl Write,
) -> Result<()> {
    let mut navigator = Navigator::new(catalog.clone());

    let mut steps = vec![NavEvent::Mount(path.to_string())];
    steps.extend(events);

    for event in steps {
        if !quiet {
            writeln!(out, "{event:?}")?;
        }
        for effect in navigator.handle(event) {
            writeln!(out, "{}", output::effect(&effect))?;
        }
    }

    writeln!(out, "path: {}", navigator.current_path())?;
    match navigator.overlay_record() {
        Some(record) => writeln!(out, "overlay: {}", record.id)?,
        None => writeln!(out, "overlay: closed")?,
    }
    if !quiet {
        writeln!(out, "visible: {}", navigator.visible().len())?;
    }
    Ok(())
}
