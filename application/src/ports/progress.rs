//! Progress notification port
//!
//! Defines the interface for reporting progress during a solver run.

use ballot_domain::{StepRecord, TaskClassification};

/// Callback for progress updates during a solver run
///
/// Implementations live in the presentation layer and can display progress
/// in various ways (console, progress bars, etc.)
pub trait SolveProgressNotifier: Send + Sync {
    /// Called when decomposition produced a plan
    fn on_plan_ready(&self, steps: &[String], degraded: bool);

    /// Called when routing produced a classification per step
    fn on_routing_ready(&self, classifications: &[TaskClassification]);

    /// Called when a step starts solving
    fn on_step_start(&self, index: usize, total: usize, instruction: &str);

    /// Called when one candidate for a step has been generated
    fn on_candidate_done(&self, _step_index: usize, _candidate_index: usize, _total: usize) {}

    /// Called when a step reaches a terminal state
    fn on_step_complete(&self, record: &StepRecord);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl SolveProgressNotifier for NoProgress {
    fn on_plan_ready(&self, _steps: &[String], _degraded: bool) {}
    fn on_routing_ready(&self, _classifications: &[TaskClassification]) {}
    fn on_step_start(&self, _index: usize, _total: usize, _instruction: &str) {}
    fn on_step_complete(&self, _record: &StepRecord) {}
}
