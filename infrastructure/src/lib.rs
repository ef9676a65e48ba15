//! Infrastructure layer for atomic-ballot
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, configuration file loading, and the journal store the
//! summary workflow aggregates from.

pub mod config;
pub mod gemini;
pub mod journal;

// Re-export commonly used types
pub use config::{ConfigLoader, FileBackendConfig, FileConfig, FileJournalConfig, FileSolverConfig};
pub use gemini::{adapter::GeminiBackend, error::GeminiError};
pub use journal::{
    aggregate::{aggregate_month, previous_month, render_aggregate},
    daily::DailyInput,
    store::{JournalError, JournalLayout, JournalStore, month_name},
    summary::{summary_context, summary_goal},
    weekly::{WeekPlan, WeekReview},
};
