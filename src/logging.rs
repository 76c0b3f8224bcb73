//! Logging setup
//!
//! Library code logs through `tracing`. The binary installs a `fmt`
//! subscriber writing to stderr, filtered by `CITYICONS_LOG` when set and by
//! the configured level otherwise.

use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "CITYICONS_LOG";

/// Build the filter: `CITYICONS_LOG` if set and valid, else `default_level`
#[must_use]
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::try_new(default_level).unwrap_or_else(|_| EnvFilter::new("warn"))
    })
}

/// Install the global subscriber
///
/// Calling this more than once is harmless; later calls keep the first
/// subscriber and log the refusal at debug level.
pub fn init(default_level: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        env_filter(default_level)
    };

    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
    {
        debug!(error = %e, "global subscriber already installed; keeping it");
    }
}
