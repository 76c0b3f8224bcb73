//! Random pick error types

use thiserror::Error;

/// Random pick errors
#[derive(Debug, Error, PartialEq)]
pub enum RandomError {
    /// Nothing to pick from
    #[error("Cannot pick from an empty catalog")]
    EmptyCatalog,

    /// A roulette probability is out of range
    #[error("Invalid roulette probability: {0}")]
    InvalidProbability(String),
}
