//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and writes its result to the given output.

pub mod config;
pub mod list;
pub mod navigate;
pub mod random;
pub mod roulette;
pub mod search;
pub mod show;
pub mod stats;

// Re-export execute functions for convenience
pub use config::execute as config;
pub use list::execute as list;
pub use navigate::execute as navigate;
pub use random::execute as random;
pub use roulette::execute as roulette;
pub use search::execute as search;
pub use show::execute as show;
pub use stats::execute as stats;
