//! Submission validation
//!
//! Gates every candidate guess before it reaches classification. The rules
//! run in a fixed order and the first failure wins; a rejected candidate
//! changes no state anywhere.

use thiserror::Error;

use crate::session::SessionHistory;

/// Why a candidate guess was turned away
///
/// Advisory only: the caller reports the message and play continues. The
/// display strings are the ones shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// Candidate length differs from the required word length
    #[error("Not enough letters")]
    NotEnoughLetters,

    /// Candidate is not in the dictionary of accepted guesses
    #[error("Not a word")]
    NotAWord,

    /// Candidate was already submitted today
    #[error("Already tried")]
    AlreadyTried,
}

/// Check a candidate guess against the acceptance rules
///
/// Rules, in order (short-circuiting):
/// 1. exact length match, else [`RejectReason::NotEnoughLetters`]
/// 2. dictionary membership, else [`RejectReason::NotAWord`]
/// 3. not already in today's history, else [`RejectReason::AlreadyTried`]
///
/// The candidate is expected to be normalized (trimmed, lowercase) by the
/// caller. Acceptance mutates nothing; the caller proceeds to
/// classification.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wordle_daily::session::SessionHistory;
/// use wordle_daily::{validate, RejectReason};
///
/// let history = SessionHistory::new(NaiveDate::from_ymd_opt(2022, 3, 14).unwrap());
/// let in_dictionary = |word: &str| word == "crane";
///
/// assert_eq!(validate("crane", &history, 5, in_dictionary), Ok(()));
/// assert_eq!(
///     validate("cra", &history, 5, in_dictionary),
///     Err(RejectReason::NotEnoughLetters)
/// );
/// assert_eq!(
///     validate("zzzzz", &history, 5, in_dictionary),
///     Err(RejectReason::NotAWord)
/// );
/// ```
pub fn validate<F>(
    candidate: &str,
    history: &SessionHistory,
    word_length: usize,
    dictionary_contains: F,
) -> Result<(), RejectReason>
where
    F: Fn(&str) -> bool,
{
    if candidate.len() != word_length {
        return Err(RejectReason::NotEnoughLetters);
    }

    if !dictionary_contains(candidate) {
        return Err(RejectReason::NotAWord);
    }

    if history.contains(candidate) {
        return Err(RejectReason::AlreadyTried);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify;
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 3, 14).unwrap()
    }

    fn contains(word: &str) -> bool {
        ["crane", "slate", "erase"].contains(&word)
    }

    #[test]
    fn accepts_a_fresh_dictionary_word() {
        let history = SessionHistory::new(day());
        assert_eq!(validate("crane", &history, 5, contains), Ok(()));
    }

    #[test]
    fn length_check_runs_first() {
        // "cra" is no dictionary word either; the length rule must win.
        let history = SessionHistory::new(day());
        assert_eq!(
            validate("cra", &history, 5, contains),
            Err(RejectReason::NotEnoughLetters)
        );
    }

    #[test]
    fn overlong_candidates_also_fail_the_length_rule() {
        let history = SessionHistory::new(day());
        assert_eq!(
            validate("cranes", &history, 5, contains),
            Err(RejectReason::NotEnoughLetters)
        );
    }

    #[test]
    fn unknown_word_rejected() {
        let history = SessionHistory::new(day());
        assert_eq!(
            validate("zzzzz", &history, 5, contains),
            Err(RejectReason::NotAWord)
        );
    }

    #[test]
    fn repeat_rejected_not_rescored() {
        let mut history = SessionHistory::new(day());
        history
            .record("slate".to_string(), classify("slate", "crane"))
            .unwrap();

        assert_eq!(
            validate("slate", &history, 5, contains),
            Err(RejectReason::AlreadyTried)
        );
    }

    #[test]
    fn dictionary_check_runs_before_repeat_check() {
        // A non-word can never be in the history, so NotAWord must win even
        // if the same junk was typed before (it was never recorded).
        let history = SessionHistory::new(day());
        assert_eq!(
            validate("qqqqq", &history, 5, contains),
            Err(RejectReason::NotAWord)
        );
    }

    #[test]
    fn reject_messages_match_the_alerts() {
        assert_eq!(RejectReason::NotEnoughLetters.to_string(), "Not enough letters");
        assert_eq!(RejectReason::NotAWord.to_string(), "Not a word");
        assert_eq!(RejectReason::AlreadyTried.to_string(), "Already tried");
    }
}
