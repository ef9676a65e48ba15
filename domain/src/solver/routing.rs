//! Task routing classifications
//!
//! Each step is routed to one of two model profiles based on estimated
//! cognitive load. The classification only selects generation parameters
//! (temperature baseline and reasoning effort); it has no other effect.
//!
//! Unlike decomposition, a routing response that cannot be decoded is fatal
//! to the run — there is no defined fallback.

use crate::util::strip_code_fences;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Model profile for solving one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Syntactic work: extraction, formatting, sorting, pattern matching
    Fast,
    /// Synthesis, multi-step causal inference, qualitative judgment
    Reasoning,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Fast => "fast",
            Profile::Reasoning => "reasoning",
        }
    }

    /// Whether candidate generation runs with reasoning effort enabled
    pub fn uses_reasoning(&self) -> bool {
        matches!(self, Profile::Reasoning)
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Routing decision for a single step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskClassification {
    /// Index of the step this classification applies to (0-based)
    pub step_index: usize,
    /// Selected profile
    pub profile: Profile,
    /// One-sentence justification from the router
    pub rationale: String,
}

/// Errors decoding a routing response. All of these are fatal to the run.
#[derive(Error, Debug)]
pub enum RoutingDecodeError {
    #[error("Routing response is not decodable: {0}")]
    Malformed(String),

    #[error("Routing returned {found} classifications for {expected} steps")]
    CountMismatch { expected: usize, found: usize },

    #[error("Classification at position {position} carries step_index {found}")]
    IndexMismatch { position: usize, found: usize },
}

#[derive(Deserialize)]
struct RouterResponse {
    classifications: Vec<TaskClassification>,
}

/// Decode routing classifications from a raw model response.
///
/// The response must carry exactly one classification per step, in step
/// order. Structural violations are rejected here rather than surfacing
/// later as misrouted steps.
pub fn decode_classifications(
    raw: &str,
    expected: usize,
) -> Result<Vec<TaskClassification>, RoutingDecodeError> {
    let cleaned = strip_code_fences(raw);

    let response: RouterResponse = serde_json::from_str(&cleaned)
        .map_err(|e| RoutingDecodeError::Malformed(e.to_string()))?;

    let classifications = response.classifications;
    if classifications.len() != expected {
        return Err(RoutingDecodeError::CountMismatch {
            expected,
            found: classifications.len(),
        });
    }

    for (position, classification) in classifications.iter().enumerate() {
        if classification.step_index != position {
            return Err(RoutingDecodeError::IndexMismatch {
                position,
                found: classification.step_index,
            });
        }
    }

    Ok(classifications)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(body: &str) -> String {
        format!(r#"{{"classifications": {body}}}"#)
    }

    #[test]
    fn test_decode_valid_classifications() {
        let raw = response(
            r#"[
                {"step_index": 0, "profile": "fast", "rationale": "formatting"},
                {"step_index": 1, "profile": "reasoning", "rationale": "synthesis"}
            ]"#,
        );

        let decoded = decode_classifications(&raw, 2).unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].profile, Profile::Fast);
        assert_eq!(decoded[1].profile, Profile::Reasoning);
        assert!(decoded[1].profile.uses_reasoning());
    }

    #[test]
    fn test_decode_fenced_response() {
        let raw = format!(
            "```json\n{}\n```",
            response(r#"[{"step_index": 0, "profile": "reasoning", "rationale": "inference"}]"#)
        );
        assert!(decode_classifications(&raw, 1).is_ok());
    }

    #[test]
    fn test_malformed_is_error() {
        let err = decode_classifications("not json at all", 2).unwrap_err();
        assert!(matches!(err, RoutingDecodeError::Malformed(_)));
    }

    #[test]
    fn test_unknown_profile_is_error() {
        let raw = response(r#"[{"step_index": 0, "profile": "turbo", "rationale": "x"}]"#);
        assert!(matches!(
            decode_classifications(&raw, 1).unwrap_err(),
            RoutingDecodeError::Malformed(_)
        ));
    }

    #[test]
    fn test_count_mismatch_is_error() {
        let raw = response(r#"[{"step_index": 0, "profile": "fast", "rationale": "x"}]"#);
        let err = decode_classifications(&raw, 3).unwrap_err();
        assert!(matches!(
            err,
            RoutingDecodeError::CountMismatch {
                expected: 3,
                found: 1
            }
        ));
    }

    #[test]
    fn test_index_mismatch_is_error() {
        let raw = response(
            r#"[
                {"step_index": 0, "profile": "fast", "rationale": "x"},
                {"step_index": 2, "profile": "fast", "rationale": "y"}
            ]"#,
        );
        let err = decode_classifications(&raw, 2).unwrap_err();
        assert!(matches!(
            err,
            RoutingDecodeError::IndexMismatch {
                position: 1,
                found: 2
            }
        ));
    }
}
