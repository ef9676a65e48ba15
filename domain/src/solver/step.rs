//! Per-step state machine
//!
//! Each step moves `Pending → Solved` when a judged winner exists, then to
//! `Validated` (gate passed), `Repaired` (gate failed, single repair passed)
//! or `Skipped` (repair failed too — the step contributes nothing and the
//! run continues). After the last step the run as a whole is done and the
//! accumulated solution is returned.

use super::routing::Profile;
use serde::{Deserialize, Serialize};

/// State of one step in the execution loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepState {
    /// Not yet solved
    Pending,
    /// A judged winner exists but has not been validated
    Solved,
    /// Winner passed validation and was accumulated
    Validated,
    /// Winner failed validation; the single repair attempt passed
    Repaired,
    /// Both the winner and its repair failed; nothing accumulated
    Skipped,
}

impl StepState {
    /// Whether this state contributed text to the solution
    pub fn contributed(&self) -> bool {
        matches!(self, StepState::Validated | StepState::Repaired)
    }

    /// Whether the step has reached a terminal state
    pub fn is_terminal(&self) -> bool {
        self.contributed() || matches!(self, StepState::Skipped)
    }
}

impl std::fmt::Display for StepState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            StepState::Pending => "Pending",
            StepState::Solved => "Solved",
            StepState::Validated => "Validated",
            StepState::Repaired => "Repaired",
            StepState::Skipped => "Skipped",
        };
        write!(f, "{label}")
    }
}

/// Record of one step's execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    /// Position in the plan (0-based)
    pub index: usize,
    /// The atomic instruction text
    pub instruction: String,
    /// Profile the router assigned
    pub profile: Profile,
    /// Where the step ended up
    pub state: StepState,
    /// Last validation diagnostic for this step, if any
    pub diagnostic: Option<String>,
}

impl StepRecord {
    pub fn new(index: usize, instruction: impl Into<String>, profile: Profile) -> Self {
        Self {
            index,
            instruction: instruction.into(),
            profile,
            state: StepState::Pending,
            diagnostic: None,
        }
    }

    /// Move to a new state, recording the diagnostic that drove it
    pub fn resolve(&mut self, state: StepState, diagnostic: impl Into<String>) {
        self.state = state;
        self.diagnostic = Some(diagnostic.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contributed_states() {
        assert!(StepState::Validated.contributed());
        assert!(StepState::Repaired.contributed());
        assert!(!StepState::Skipped.contributed());
        assert!(!StepState::Pending.contributed());
        assert!(!StepState::Solved.contributed());
    }

    #[test]
    fn test_terminal_states() {
        assert!(StepState::Validated.is_terminal());
        assert!(StepState::Repaired.is_terminal());
        assert!(StepState::Skipped.is_terminal());
        assert!(!StepState::Pending.is_terminal());
        assert!(!StepState::Solved.is_terminal());
    }

    #[test]
    fn test_record_resolve() {
        let mut record = StepRecord::new(0, "Research X", Profile::Reasoning);
        assert_eq!(record.state, StepState::Pending);

        record.resolve(StepState::Validated, "Logic Valid");
        assert_eq!(record.state, StepState::Validated);
        assert_eq!(record.diagnostic.as_deref(), Some("Logic Valid"));
    }

    #[test]
    fn test_state_display() {
        assert_eq!(StepState::Skipped.to_string(), "Skipped");
        assert_eq!(StepState::Repaired.to_string(), "Repaired");
    }
}
