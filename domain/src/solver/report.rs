//! Run result value objects

use super::step::{StepRecord, StepState};
use serde::{Deserialize, Serialize};

/// Complete result of one solver run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveReport {
    /// The goal that was solved
    pub goal: String,
    /// The accumulated solution text
    pub solution: String,
    /// Per-step execution records, in plan order
    pub steps: Vec<StepRecord>,
    /// Whether the plan was the single-step decomposition fallback
    pub degraded_plan: bool,
}

impl SolveReport {
    pub fn new(
        goal: impl Into<String>,
        solution: impl Into<String>,
        steps: Vec<StepRecord>,
        degraded_plan: bool,
    ) -> Self {
        Self {
            goal: goal.into(),
            solution: solution.into(),
            steps,
            degraded_plan,
        }
    }

    /// Steps whose text made it into the solution
    pub fn contributed_steps(&self) -> impl Iterator<Item = &StepRecord> {
        self.steps.iter().filter(|s| s.state.contributed())
    }

    /// Steps dropped after a failed repair
    pub fn skipped_steps(&self) -> impl Iterator<Item = &StepRecord> {
        self.steps
            .iter()
            .filter(|s| s.state == StepState::Skipped)
    }

    /// Warnings surfaced during validation (refusal flags etc.)
    pub fn warnings(&self) -> impl Iterator<Item = (&StepRecord, &str)> {
        self.steps.iter().filter_map(|s| {
            s.diagnostic
                .as_deref()
                .filter(|d| d.starts_with("Warning"))
                .map(|d| (s, d))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::routing::Profile;

    fn record(index: usize, state: StepState, diagnostic: &str) -> StepRecord {
        let mut record = StepRecord::new(index, format!("step {index}"), Profile::Fast);
        record.resolve(state, diagnostic);
        record
    }

    #[test]
    fn test_step_filters() {
        let report = SolveReport::new(
            "goal",
            "solution",
            vec![
                record(0, StepState::Validated, "Logic Valid"),
                record(1, StepState::Skipped, "Error: Empty output generated."),
                record(2, StepState::Repaired, "Logic Valid"),
            ],
            false,
        );

        assert_eq!(report.contributed_steps().count(), 2);
        assert_eq!(report.skipped_steps().count(), 1);
        assert_eq!(report.warnings().count(), 0);
    }

    #[test]
    fn test_warnings_filter() {
        let report = SolveReport::new(
            "goal",
            "solution",
            vec![record(0, StepState::Validated, "Warning: Potential refusal detected.")],
            false,
        );

        let warnings: Vec<_> = report.warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].1, "Warning: Potential refusal detected.");
    }
}
