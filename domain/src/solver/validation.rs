//! Heuristic output validation
//!
//! The quality gatekeeper for judged winners: a pure function from candidate
//! text to an accept/reject verdict with a diagnostic message. Refusal
//! phrasing is a soft signal — flagged, not rejected — so an intentional
//! "cannot be determined" answer still flows through, visibly.

use serde::{Deserialize, Serialize};

/// Prefix of the sentinel text the completion boundary substitutes for any
/// backend failure. The validator rejects it so a transient backend error
/// degrades into the normal repair path instead of polluting the solution.
pub const BACKEND_FAILURE_PREFIX: &str = "# Backend failure:";

/// Minimum plausible answer length in characters
pub const MIN_CONTENT_LEN: usize = 5;

const REFUSAL_MARKERS: [&str; 2] = ["I cannot", "I am an AI"];

/// Outcome of validating one candidate text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether the text may be accumulated into the solution
    pub accepted: bool,
    /// Diagnostic surfaced to the operator and, on rejection, to the
    /// repair prompt
    pub message: String,
}

impl Verdict {
    fn accepted(message: &str) -> Self {
        Self {
            accepted: true,
            message: message.to_string(),
        }
    }

    fn rejected(message: &str) -> Self {
        Self {
            accepted: false,
            message: message.to_string(),
        }
    }

    /// Whether the verdict carries a warning despite acceptance
    pub fn is_warning(&self) -> bool {
        self.accepted && self.message.starts_with("Warning")
    }
}

/// Validate candidate text. Pure — same input, same verdict.
pub fn validate(content: &str) -> Verdict {
    if content.trim().is_empty() {
        return Verdict::rejected("Error: Empty output generated.");
    }

    if content.trim_start().starts_with(BACKEND_FAILURE_PREFIX) {
        return Verdict::rejected("Error: Completion backend failure in output.");
    }

    if content.chars().count() < MIN_CONTENT_LEN {
        return Verdict::rejected("Error: Response too short to be valid.");
    }

    if REFUSAL_MARKERS.iter().any(|marker| content.contains(marker)) {
        return Verdict::accepted("Warning: Potential refusal detected.");
    }

    Verdict::accepted("Logic Valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rejected() {
        let verdict = validate("");
        assert!(!verdict.accepted);
        assert_eq!(verdict.message, "Error: Empty output generated.");
    }

    #[test]
    fn test_whitespace_rejected() {
        assert!(!validate("   ").accepted);
        assert!(!validate("\n\t").accepted);
    }

    #[test]
    fn test_too_short_rejected() {
        let verdict = validate("ok");
        assert!(!verdict.accepted);
        assert_eq!(verdict.message, "Error: Response too short to be valid.");
    }

    #[test]
    fn test_plain_text_accepted() {
        let verdict = validate("ok ok");
        assert!(verdict.accepted);
        assert_eq!(verdict.message, "Logic Valid");
        assert!(!verdict.is_warning());
    }

    #[test]
    fn test_refusal_accepted_with_warning() {
        let verdict = validate("I cannot help with that request.");
        assert!(verdict.accepted);
        assert_eq!(verdict.message, "Warning: Potential refusal detected.");
        assert!(verdict.is_warning());

        assert!(validate("As a disclaimer, I am an AI model.").is_warning());
    }

    #[test]
    fn test_backend_sentinel_rejected() {
        let sentinel = format!("{BACKEND_FAILURE_PREFIX} connection reset by peer");
        let verdict = validate(&sentinel);
        assert!(!verdict.accepted);
        assert_eq!(verdict.message, "Error: Completion backend failure in output.");
    }

    #[test]
    fn test_validate_is_idempotent() {
        for input in ["", "   ", "ok", "a perfectly fine answer", "I cannot say"] {
            assert_eq!(validate(input), validate(input));
        }
    }
}
