//! Solver parameters — step-execution loop control.
//!
//! [`SolverParams`] groups the static parameters that control the execution
//! loop in [`RunSolverUseCase`](crate::use_cases::run_solver::RunSolverUseCase).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Step-execution loop control parameters.
///
/// Candidate count, temperature schedule, per-call timeout, final-step
/// escalation, and the optional shuffle seed for reproducible judging order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverParams {
    /// Number of candidates generated per step.
    pub vote_count: usize,
    /// Temperature of the first candidate.
    pub base_temperature: f64,
    /// Temperature increment per candidate index.
    pub temperature_step: f64,
    /// Per-completion-call timeout; a timeout degrades to sentinel text.
    pub request_timeout: Option<Duration>,
    /// Escalate the final report step to the finalizer model.
    pub escalate_final: bool,
    /// Fixed seed for the candidate shuffle. `None` seeds from the OS.
    pub shuffle_seed: Option<u64>,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            vote_count: 3,
            base_temperature: 1.0,
            temperature_step: 0.25,
            request_timeout: Some(Duration::from_secs(120)),
            escalate_final: true,
            shuffle_seed: None,
        }
    }
}

impl SolverParams {
    /// Temperature for the candidate at `index` (pre-shuffle order)
    pub fn temperature_for(&self, index: usize) -> f64 {
        self.base_temperature + index as f64 * self.temperature_step
    }

    // ==================== Builder Methods ====================

    /// Set the candidate count (clamped to at least one)
    pub fn with_vote_count(mut self, count: usize) -> Self {
        self.vote_count = count.max(1);
        self
    }

    pub fn with_base_temperature(mut self, temperature: f64) -> Self {
        self.base_temperature = temperature;
        self
    }

    pub fn with_temperature_step(mut self, step: f64) -> Self {
        self.temperature_step = step;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_escalate_final(mut self, escalate: bool) -> Self {
        self.escalate_final = escalate;
        self
    }

    pub fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = SolverParams::default();
        assert_eq!(params.vote_count, 3);
        assert_eq!(params.base_temperature, 1.0);
        assert_eq!(params.temperature_step, 0.25);
        assert!(params.request_timeout.is_some());
        assert!(params.escalate_final);
        assert!(params.shuffle_seed.is_none());
    }

    #[test]
    fn test_temperature_schedule() {
        let params = SolverParams::default();
        assert_eq!(params.temperature_for(0), 1.0);
        assert_eq!(params.temperature_for(1), 1.25);
        assert_eq!(params.temperature_for(2), 1.5);
    }

    #[test]
    fn test_builder() {
        let params = SolverParams::default()
            .with_vote_count(5)
            .with_base_temperature(0.7)
            .with_shuffle_seed(42)
            .with_escalate_final(false);

        assert_eq!(params.vote_count, 5);
        assert_eq!(params.base_temperature, 0.7);
        assert_eq!(params.shuffle_seed, Some(42));
        assert!(!params.escalate_final);
    }

    #[test]
    fn test_vote_count_clamped() {
        let params = SolverParams::default().with_vote_count(0);
        assert_eq!(params.vote_count, 1);
    }
}
