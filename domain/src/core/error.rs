//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid goal: {0}")]
    InvalidGoal(String),

    #[error("Candidate set cannot be empty")]
    EmptyCandidateSet,

    #[error("Candidate set of {0} exceeds the {1} opaque labels available")]
    TooManyCandidates(usize, usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_candidate_set_display() {
        let error = DomainError::EmptyCandidateSet;
        assert_eq!(error.to_string(), "Candidate set cannot be empty");
    }

    #[test]
    fn test_invalid_goal_display() {
        let error = DomainError::InvalidGoal("blank".to_string());
        assert_eq!(error.to_string(), "Invalid goal: blank");
    }
}
