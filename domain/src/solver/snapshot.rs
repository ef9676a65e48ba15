//! No-history state snapshot
//!
//! The snapshot is the *entire* memory passed to every model call in a run.
//! There is no conversation transcript; a prompt can always be rebuilt from
//! the three fields here at the moment of the call.

use serde::{Deserialize, Serialize};

/// Strict snapshot of solver state for one run
///
/// Created once per run with the caller's context, mutated only by the
/// solver engine between steps, discarded when the run's final solution has
/// been returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Accumulated output text; grows by appended sections, or is replaced
    /// outright by the final report step.
    solution_content: String,
    /// Caller-supplied background text, immutable for the run.
    context: String,
    /// Diagnostic from the most recent failed validation, if any.
    last_error: Option<String>,
}

impl StateSnapshot {
    /// Create a fresh snapshot seeded with caller context
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            solution_content: String::new(),
            context: context.into(),
            last_error: None,
        }
    }

    /// The accumulated solution so far
    pub fn solution(&self) -> &str {
        &self.solution_content
    }

    /// The caller-supplied context
    pub fn context(&self) -> &str {
        &self.context
    }

    /// The last validation diagnostic, if the previous step failed
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Append a step's text under a labeled section heading
    pub fn append_section(&mut self, step: &str, text: &str) {
        self.solution_content.push_str("\n\n--- ");
        self.solution_content.push_str(step);
        self.solution_content.push_str(" ---\n");
        self.solution_content.push_str(text);
    }

    /// Replace the whole solution (final report step)
    pub fn replace_solution(&mut self, text: impl Into<String>) {
        self.solution_content = text.into();
    }

    /// Record a validation failure so the next prompt sees it
    pub fn record_failure(&mut self, diagnostic: impl Into<String>) {
        self.last_error = Some(diagnostic.into());
    }

    /// Clear the failure marker after a successful validation
    pub fn clear_failure(&mut self) {
        self.last_error = None;
    }

    /// Serialize the state for a model prompt. No chat history included.
    pub fn prompt_context(&self) -> String {
        let solution = if self.solution_content.is_empty() {
            "(Empty)"
        } else {
            &self.solution_content
        };
        let error = self.last_error.as_deref().unwrap_or("None");

        format!(
            "--- CURRENT ATOMIC STATE ---\n\
             [EXISTING SOLUTION CONTENT]:\n{solution}\n\n\
             [CONTEXT / ENVIRONMENT]:\n{}\n\n\
             [LAST VALIDATION ERROR]:\n{error}\n\
             ----------------------------",
            self.context
        )
    }

    /// Consume the snapshot, yielding the run's result text
    pub fn into_solution(self) -> String {
        self.solution_content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snapshot_is_empty() {
        let snapshot = StateSnapshot::new("background");
        assert_eq!(snapshot.solution(), "");
        assert_eq!(snapshot.context(), "background");
        assert!(snapshot.last_error().is_none());
    }

    #[test]
    fn test_prompt_context_placeholders() {
        let snapshot = StateSnapshot::new("logs go here");
        let rendered = snapshot.prompt_context();
        assert!(rendered.contains("(Empty)"));
        assert!(rendered.contains("logs go here"));
        assert!(rendered.contains("[LAST VALIDATION ERROR]:\nNone"));
    }

    #[test]
    fn test_append_section() {
        let mut snapshot = StateSnapshot::new("");
        snapshot.append_section("Research X", "finding one");
        snapshot.append_section("Sort results", "finding two");
        assert!(snapshot.solution().contains("--- Research X ---\nfinding one"));
        assert!(snapshot.solution().contains("--- Sort results ---\nfinding two"));
    }

    #[test]
    fn test_replace_solution_drops_sections() {
        let mut snapshot = StateSnapshot::new("");
        snapshot.append_section("Research X", "finding one");
        snapshot.replace_solution("the whole report");
        assert_eq!(snapshot.solution(), "the whole report");
        assert!(!snapshot.solution().contains("Research X"));
    }

    #[test]
    fn test_failure_roundtrip() {
        let mut snapshot = StateSnapshot::new("");
        snapshot.record_failure("Error: Empty output generated.");
        assert!(
            snapshot
                .prompt_context()
                .contains("Error: Empty output generated.")
        );
        snapshot.clear_failure();
        assert!(snapshot.last_error().is_none());
    }

    #[test]
    fn test_into_solution() {
        let mut snapshot = StateSnapshot::new("ctx");
        snapshot.replace_solution("done");
        assert_eq!(snapshot.into_solution(), "done");
    }
}
