//! Application layer for atomic-ballot
//!
//! This crate contains the solver engine, port definitions, and solver
//! parameters. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SolverParams;
pub use ports::{
    completion::{BackendError, CompletionBackend, CompletionRequest},
    progress::{NoProgress, SolveProgressNotifier},
};
pub use use_cases::run_solver::{RunSolverError, RunSolverInput, RunSolverUseCase};
