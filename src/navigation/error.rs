//! Navigation-specific error types
//!
//! Path and slug misses are never errors: they become redirects or
//! not-found effects. The only failure is an event that cannot be parsed
//! from its textual form.

use thiserror::Error;

/// Navigation-specific errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    /// The event keyword is not recognised
    #[error("Unknown navigation event: {0}")]
    UnknownEvent(String),

    /// The event is missing its argument
    #[error("Navigation event '{0}' requires an argument")]
    MissingArgument(String),
}
