//! Step plan decoding
//!
//! Decomposition asks the model for a raw JSON list of step strings. The
//! decoder strips any code fencing, decodes the list, and guarantees the
//! plan ends with the canonical final-report instruction. A response that
//! cannot be decoded degrades to a trivial one-step plan containing the
//! original goal — decomposition failure never aborts a run.

use crate::util::strip_code_fences;
use serde::{Deserialize, Serialize};

/// Canonical instruction for the last step of every plan.
///
/// The decomposition prompt demands this exact string as the final step; the
/// decoder appends it when a parsed plan is missing it.
pub const FINAL_REPORT_STEP: &str = "Draft the final report following the required template \
     structure, populating each section with the derived data and formulating actionable \
     recommendations.";

/// An ordered plan of atomic steps
///
/// Ordering is significant: later steps read the content accumulated from
/// earlier ones through the state snapshot. The last step is contractually
/// the report-drafting step, except on the degraded single-step path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepPlan {
    steps: Vec<String>,
    degraded: bool,
}

impl StepPlan {
    /// Decode a plan from a raw decomposition response.
    ///
    /// A decodable, non-empty JSON list of strings becomes the plan, with
    /// [`FINAL_REPORT_STEP`] appended when absent. Anything else falls back
    /// to `[goal]`.
    pub fn from_response(raw: &str, goal: &str) -> Self {
        let cleaned = strip_code_fences(raw);

        match serde_json::from_str::<Vec<String>>(&cleaned) {
            Ok(steps) if !steps.is_empty() => {
                let mut steps = steps;
                if steps.last().map(String::as_str) != Some(FINAL_REPORT_STEP) {
                    steps.push(FINAL_REPORT_STEP.to_string());
                }
                Self {
                    steps,
                    degraded: false,
                }
            }
            _ => Self::single_step(goal),
        }
    }

    /// The degraded one-step plan: the goal itself is the only step
    pub fn single_step(goal: &str) -> Self {
        Self {
            steps: vec![goal.to_string()],
            degraded: true,
        }
    }

    /// The ordered step instructions
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Number of steps in the plan
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Whether this plan is the single-step decode fallback
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Whether `index` is the final (report-drafting) step
    pub fn is_final(&self, index: usize) -> bool {
        index + 1 == self.steps.len()
    }
}
