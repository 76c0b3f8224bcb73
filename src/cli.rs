//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for cityicons using the `clap` crate.
//!
//! # Commands
//!
//! - **list**: Show the visible listing for a country, region and query (default)
//! - **show**: Resolve a `/{country}/{city}` slug pair to its detail view
//! - **random**: A decorative sample of three icons
//! - **roulette**: The weighted three-pick draw
//! - **stats**: Catalog statistics
//! - **navigate**: Replay navigation events against a path
//! - **search**: Interactive search reading queries from stdin
//! - **config**: Inspect or initialise the configuration file
//!
//! # Examples
//!
//! ```
//! use cityicons::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["cityicons", "show", "france", "paris"]);
//! assert!(matches!(cli.get_command(), Commands::Show { .. }));
//! ```

use crate::navigation::NavEvent;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "cityicons")]
#[command(about = "Browse a catalog of city icons", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log debug output to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Dataset directory (overrides config)
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Icon image directory (overrides config)
    #[arg(long = "image-dir", value_name = "DIR", global = true)]
    pub image_dir: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List icons, optionally scoped and filtered (default)
    #[command(visible_alias = "l")]
    List {
        /// Free-text query matched against city, region and country
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        /// Country slug to scope the listing to (e.g. united-states)
        #[arg(short = 'c', long = "country", value_name = "SLUG")]
        country: Option<String>,

        /// Region to scope the listing to (exact name)
        #[arg(short = 'r', long = "region", value_name = "REGION")]
        region: Option<String>,
    },

    /// Show the icon at /{country}/{city}
    #[command(visible_alias = "s")]
    Show {
        /// Country slug
        country: String,

        /// City slug
        city: String,

        /// Print the raw image content instead of the details
        #[arg(long = "raw")]
        raw: bool,
    },

    /// Show three random icons
    Random,

    /// Spin the roulette
    Roulette,

    /// Show catalog statistics
    Stats {
        /// How many countries to rank
        #[arg(long = "top", value_name = "N", default_value_t = 10)]
        top: usize,
    },

    /// Mount at PATH and replay navigation events
    ///
    /// Events: open:<id>, close, goto:<path>, query:<text>, region:<name>, clear-region
    #[command(visible_alias = "nav")]
    Navigate {
        /// Path to mount at
        #[arg(value_name = "PATH")]
        path: String,

        /// Events to replay, in order
        #[arg(value_name = "EVENT")]
        events: Vec<NavEvent>,
    },

    /// Interactive search: each stdin line is a query
    #[command(visible_alias = "i")]
    Search {
        /// Region to scope the search to
        #[arg(short = 'r', long = "region", value_name = "REGION")]
        region: Option<String>,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Write the effective configuration to the config file
    Init,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to List if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::List {
            query: None,
            country: None,
            region: None,
        })
    }
}
