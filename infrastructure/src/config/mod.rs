//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{FileBackendConfig, FileConfig, FileJournalConfig, FileSolverConfig};
pub use loader::ConfigLoader;
