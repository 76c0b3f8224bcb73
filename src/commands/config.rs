//! Config command - inspect or initialise the configuration file

use crate::{CityIconsError, cli::ConfigCommands, config::CityIconsConfig};
use std::io::Write;

type Result<T> = std::result::Result<T, CityIconsError>;

/// Execute a config subcommand against the effective configuration
///
/// # Errors
/// Returns an error if the configuration cannot be serialized or saved, or
/// writing to `out` fails
pub fn execute(
    config: &CityIconsConfig,
    command: &ConfigCommands,
    quiet: bool,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let toml_string = toml::to_string_pretty(config).map_err(|e| {
                CityIconsError::InvalidInput(format!("Failed to serialize config: {e}"))
            })?;
            write!(out, "{toml_string}")?;
        }
        ConfigCommands::Path => {
            writeln!(out, "{}", CityIconsConfig::config_path()?.display())?;
        }
        ConfigCommands::Init => {
            config.save()?;
            if !quiet {
                let path = CityIconsConfig::config_path()?;
                writeln!(out, "Configuration saved to {}", path.display())?;
            }
        }
    }
    Ok(())
}
