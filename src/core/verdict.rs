//! Per-guess verdict representation
//!
//! A verdict records which positions of a guess matched the target exactly
//! and which hold a letter that exists elsewhere in the target. Every other
//! position is implicitly absent.

use serde::{Deserialize, Serialize};

/// Classification of a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterMark {
    /// Right letter, right position
    Correct,
    /// Letter occurs in the target, but at a different position
    WrongLocation,
    /// Letter has no remaining occurrence in the target
    Absent,
}

/// Verdict for one accepted guess
///
/// Holds the two index sets produced by [`classify`](super::classify), both
/// in increasing position order. The sets are disjoint, and a repeated guess
/// letter is flagged at most as many times as it occurs in the target.
///
/// The serialized form uses the field names of the original stored document:
/// `{"correctIndexes": [...], "wrongLocationIndexes": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    #[serde(rename = "correctIndexes")]
    correct: Vec<usize>,
    #[serde(rename = "wrongLocationIndexes")]
    wrong_location: Vec<usize>,
}

impl Verdict {
    /// Create a verdict from raw index sets
    ///
    /// Both sets must be in increasing order and disjoint; this is checked
    /// in debug builds only. [`classify`](super::classify) upholds it by
    /// construction.
    #[must_use]
    pub fn new(correct: Vec<usize>, wrong_location: Vec<usize>) -> Self {
        debug_assert!(correct.is_sorted() && wrong_location.is_sorted());
        debug_assert!(
            correct.iter().all(|i| !wrong_location.contains(i)),
            "verdict index sets must be disjoint"
        );
        Self {
            correct,
            wrong_location,
        }
    }

    /// Positions where the guess letter equals the target letter
    #[inline]
    #[must_use]
    pub fn correct(&self) -> &[usize] {
        &self.correct
    }

    /// Positions whose letter exists in the target at a different position
    #[inline]
    #[must_use]
    pub fn wrong_location(&self) -> &[usize] {
        &self.wrong_location
    }

    /// Classify a single position
    #[must_use]
    pub fn mark_at(&self, index: usize) -> LetterMark {
        if self.correct.binary_search(&index).is_ok() {
            LetterMark::Correct
        } else if self.wrong_location.binary_search(&index).is_ok() {
            LetterMark::WrongLocation
        } else {
            LetterMark::Absent
        }
    }

    /// Marks for every position of a guess of the given length
    #[must_use]
    pub fn marks(&self, word_length: usize) -> Vec<LetterMark> {
        (0..word_length).map(|i| self.mark_at(i)).collect()
    }

    /// Whether every position of a guess of the given length matched
    #[must_use]
    pub fn is_all_correct(&self, word_length: usize) -> bool {
        self.correct.len() == word_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_lookup_covers_all_three_states() {
        let verdict = Verdict::new(vec![0, 4], vec![2]);

        assert_eq!(verdict.mark_at(0), LetterMark::Correct);
        assert_eq!(verdict.mark_at(1), LetterMark::Absent);
        assert_eq!(verdict.mark_at(2), LetterMark::WrongLocation);
        assert_eq!(verdict.mark_at(3), LetterMark::Absent);
        assert_eq!(verdict.mark_at(4), LetterMark::Correct);
    }

    #[test]
    fn marks_expands_in_position_order() {
        let verdict = Verdict::new(vec![1], vec![0, 3]);

        assert_eq!(
            verdict.marks(5),
            vec![
                LetterMark::WrongLocation,
                LetterMark::Correct,
                LetterMark::Absent,
                LetterMark::WrongLocation,
                LetterMark::Absent,
            ]
        );
    }

    #[test]
    fn all_correct_requires_full_cover() {
        assert!(Verdict::new(vec![0, 1, 2], vec![]).is_all_correct(3));
        assert!(!Verdict::new(vec![0, 1], vec![2]).is_all_correct(3));
        assert!(!Verdict::default().is_all_correct(3));
    }

    #[test]
    fn serde_uses_original_field_names() {
        let verdict = Verdict::new(vec![0, 2], vec![4]);
        let json = serde_json::to_string(&verdict).unwrap();

        assert_eq!(
            json,
            r#"{"correctIndexes":[0,2],"wrongLocationIndexes":[4]}"#
        );

        let back: Verdict = serde_json::from_str(&json).unwrap();
        assert_eq!(back, verdict);
    }
}
