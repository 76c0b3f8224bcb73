//! cityicons CLI application entry point
//!
//! Command-line frontend for the city icon catalog: list and search icons,
//! resolve deep links, draw random picks and show statistics.
//!
//! # Usage
//!
//! ```bash
//! # List everything (default command)
//! cityicons
//!
//! # Scope to a country page and search
//! cityicons list --country united-states york
//!
//! # Resolve a deep link, or dump the icon itself
//! cityicons show brazil sao-paulo
//! cityicons show brazil sao-paulo --raw > sao-paulo.svg
//!
//! # Replay navigation: mount at a path, open and close the overlay
//! cityicons navigate /germany open:berlin close
//!
//! # Random picks
//! cityicons random
//! cityicons roulette
//! ```
//!
//! # Configuration
//!
//! Settings live in the user's config directory
//! (`~/.config/cityicons/config.toml` on Linux) and may be overridden with
//! `CITYICONS_*` environment variables. `CITYICONS_LOG` sets the log filter.

use cityicons::{
    CityIconsError,
    catalog::{Catalog, DetailCache},
    cli::{Cli, Commands},
    commands,
    config::CityIconsConfig,
    logging,
};
use std::io::{self, Write};
use std::time::Instant;
use tracing::debug;

type Result<T> = std::result::Result<T, CityIconsError>;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let mut config = CityIconsConfig::load()?;

    logging::init(&config.log_level, cli.verbose);

    if let Some(dir) = &cli.data_dir {
        config.data_dir.clone_from(dir);
    }
    if let Some(dir) = &cli.image_dir {
        config.image_dir.clone_from(dir);
    }
    let quiet = cli.quiet || config.quiet;
    let command = cli.get_command();
    debug!(?command, data_dir = %config.data_dir.display(), "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    // config commands must work without a dataset
    let load_catalog = || Catalog::load_dir(&config.data_dir);

    match command {
        Commands::Config { command } => {
            commands::config(&config, &command, quiet, &mut out)?;
        }
        Commands::List {
            query,
            country,
            region,
        } => {
            commands::list(
                &load_catalog()?,
                query.as_deref(),
                country.as_deref(),
                region.as_deref(),
                quiet,
                &mut out,
            )?;
        }
        Commands::Show { country, city, raw } => {
            let cache = DetailCache::new(&config.image_dir);
            commands::show(&load_catalog()?, &cache, &country, &city, raw, &mut out)?;
        }
        Commands::Random => {
            commands::random(&load_catalog()?, &mut rand::rng(), quiet, &mut out)?;
        }
        Commands::Roulette => {
            let catalog = load_catalog()?;
            commands::roulette(&catalog, &config.roulette, &mut rand::rng(), quiet, &mut out)?;
        }
        Commands::Stats { top } => {
            commands::stats(&load_catalog()?, top, quiet, &mut out)?;
        }
        Commands::Navigate { path, events } => {
            commands::navigate(&load_catalog()?, &path, events, quiet, &mut out)?;
        }
        Commands::Search { region } => {
            let stdin = io::stdin();
            commands::search(
                &load_catalog()?,
                region,
                config.debounce(),
                stdin.lock(),
                Instant::now,
                quiet,
                &mut out,
            )?;
        }
    }

    out.flush()?;
    Ok(())
}
