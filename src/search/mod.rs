//! Search and filtering over the icon catalog
//!
//! Provides the pure filter engine used to compute the visible listing and a
//! trailing debouncer for side effects keyed on query text.

pub mod debounce;
pub mod filter;

pub use debounce::Debouncer;
pub use filter::{IconFilterExt, compute_visible};
