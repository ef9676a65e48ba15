//! Presentation layer for atomic-ballot
//!
//! CLI argument definitions, interactive stdin collection, progress
//! reporting, and console output formatting.

pub mod cli;
pub mod input;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
