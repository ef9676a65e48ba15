//! Candidate sets and judged selection
//!
//! One step produces `vote_count` candidate answers. The set is shuffled
//! with an injectable random source before judging so the judge cannot infer
//! which candidate was generated first or with which temperature. Candidates
//! are presented under opaque letter labels in shuffled order; the judge's
//! reply is mapped back to a candidate, defaulting deterministically to the
//! first candidate of the shuffled set when no usable label is found —
//! judging failure is never fatal to a step.

use crate::core::error::DomainError;
use rand::Rng;
use rand::seq::SliceRandom;

const LABELS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The candidate answers for one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    candidates: Vec<String>,
}

impl CandidateSet {
    /// Build a set from candidates in generation order
    pub fn new(candidates: Vec<String>) -> Result<Self, DomainError> {
        if candidates.is_empty() {
            return Err(DomainError::EmptyCandidateSet);
        }
        if candidates.len() > LABELS.len() {
            return Err(DomainError::TooManyCandidates(candidates.len(), LABELS.len()));
        }
        Ok(Self { candidates })
    }

    /// Randomize candidate order before judging
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.candidates.shuffle(rng);
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidates paired with their opaque labels, in current order
    pub fn labeled(&self) -> impl Iterator<Item = (char, &str)> {
        self.candidates
            .iter()
            .enumerate()
            .map(|(i, text)| (LABELS[i] as char, text.as_str()))
    }

    /// Map a judge reply back to the winning candidate.
    ///
    /// Scans the reply left to right for the first in-range label letter
    /// standing alone (not embedded in a word). An ambiguous or unusable
    /// reply falls back to the first candidate in the current order.
    pub fn pick_winner(&self, judge_reply: &str) -> &str {
        let bytes = judge_reply.as_bytes();
        for (i, &b) in bytes.iter().enumerate() {
            if !b.is_ascii_uppercase() {
                continue;
            }
            let index = (b - b'A') as usize;
            if index >= self.candidates.len() {
                continue;
            }
            let detached_before = i == 0 || !bytes[i - 1].is_ascii_alphanumeric();
            let detached_after = i + 1 == bytes.len() || !bytes[i + 1].is_ascii_alphanumeric();
            if detached_before && detached_after {
                return &self.candidates[index];
            }
        }
        &self.candidates[0]
    }

    /// Whether `text` is one of the candidates
    pub fn contains(&self, text: &str) -> bool {
        self.candidates.iter().any(|c| c == text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn set(texts: &[&str]) -> CandidateSet {
        CandidateSet::new(texts.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_empty_set_rejected() {
        assert!(matches!(
            CandidateSet::new(vec![]),
            Err(DomainError::EmptyCandidateSet)
        ));
    }

    #[test]
    fn test_labels_follow_current_order() {
        let candidates = set(&["one", "two", "three"]);
        let labeled: Vec<_> = candidates.labeled().collect();
        assert_eq!(labeled, vec![('A', "one"), ('B', "two"), ('C', "three")]);
    }

    #[test]
    fn test_pick_winner_by_letter() {
        let candidates = set(&["one", "two", "three"]);
        assert_eq!(candidates.pick_winner("B"), "two");
        assert_eq!(candidates.pick_winner("The winner is C."), "three");
        assert_eq!(candidates.pick_winner("Response A is best"), "one");
    }

    #[test]
    fn test_pick_winner_ignores_embedded_letters() {
        let candidates = set(&["one", "two"]);
        // "BAD" contains B and A but neither stands alone
        assert_eq!(candidates.pick_winner("BAD answer, pick B"), "two");
    }

    #[test]
    fn test_pick_winner_ignores_out_of_range_letters() {
        let candidates = set(&["one", "two"]);
        assert_eq!(candidates.pick_winner("Z? I mean B"), "two");
    }

    #[test]
    fn test_pick_winner_falls_back_to_first() {
        let candidates = set(&["one", "two", "three"]);
        assert_eq!(candidates.pick_winner("no letter here"), "one");
        assert_eq!(candidates.pick_winner(""), "one");
    }

    #[test]
    fn test_multiple_letters_first_match_wins() {
        let candidates = set(&["one", "two", "three"]);
        assert_eq!(candidates.pick_winner("C or B, hard to say"), "three");
    }

    #[test]
    fn test_shuffle_is_deterministic_with_seed() {
        let mut first = set(&["one", "two", "three", "four"]);
        let mut second = first.clone();

        first.shuffle(&mut StdRng::seed_from_u64(7));
        second.shuffle(&mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn test_shuffle_preserves_membership() {
        let original = set(&["one", "two", "three", "four"]);
        let mut shuffled = original.clone();
        shuffled.shuffle(&mut StdRng::seed_from_u64(42));

        for (_, text) in shuffled.labeled() {
            assert!(original.contains(text));
        }
        assert_eq!(shuffled.len(), original.len());
    }

    #[test]
    fn test_winner_is_member_of_original_set() {
        let original = set(&["one", "two", "three"]);
        let mut shuffled = original.clone();
        shuffled.shuffle(&mut StdRng::seed_from_u64(99));

        let winner = shuffled.pick_winner("B");
        assert!(original.contains(winner));
    }
}
