//! Win/loss determination
//!
//! The outcome is derived from the history on demand, never stored. Win is
//! checked before loss, so the correct word on the final allowed attempt
//! still wins.

use serde::{Deserialize, Serialize};

use crate::session::SessionHistory;

/// Maximum guesses per day
pub const MAX_ATTEMPTS: usize = 6;

/// Terminal or in-flight status of a day's game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Attempts remain and the target has not been guessed
    InProgress,
    /// Some recorded guess equals the target
    Won,
    /// All attempts used without guessing the target
    Lost,
}

impl Outcome {
    /// Whether the game has ended
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Determine the outcome for a history against the day's target
///
/// Call after every recorded guess with the just-updated history.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wordle_daily::core::classify;
/// use wordle_daily::session::SessionHistory;
/// use wordle_daily::{MAX_ATTEMPTS, Outcome, evaluate};
///
/// let mut history = SessionHistory::new(NaiveDate::from_ymd_opt(2022, 3, 14).unwrap());
/// assert_eq!(evaluate(&history, "crane", MAX_ATTEMPTS), Outcome::InProgress);
///
/// history.record("crane".to_string(), classify("crane", "crane")).unwrap();
/// assert_eq!(evaluate(&history, "crane", MAX_ATTEMPTS), Outcome::Won);
/// ```
#[must_use]
pub fn evaluate(history: &SessionHistory, target: &str, max_attempts: usize) -> Outcome {
    if history.iter().any(|record| record.word == target) {
        Outcome::Won
    } else if history.len() >= max_attempts {
        Outcome::Lost
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify;
    use chrono::NaiveDate;

    const TARGET: &str = "crane";

    fn history_with(guesses: &[&str]) -> SessionHistory {
        let mut history =
            SessionHistory::new(NaiveDate::from_ymd_opt(2022, 3, 14).unwrap());
        for guess in guesses {
            history
                .record((*guess).to_string(), classify(guess, TARGET))
                .unwrap();
        }
        history
    }

    #[test]
    fn empty_history_is_in_progress() {
        assert_eq!(evaluate(&history_with(&[]), TARGET, MAX_ATTEMPTS), Outcome::InProgress);
    }

    #[test]
    fn win_on_any_attempt() {
        let histories = [
            history_with(&[TARGET]),
            history_with(&["slate", TARGET]),
            history_with(&["slate", "crony", "crate", TARGET]),
        ];

        for history in histories {
            assert_eq!(evaluate(&history, TARGET, MAX_ATTEMPTS), Outcome::Won);
        }
    }

    #[test]
    fn six_misses_is_a_loss() {
        let history = history_with(&["slate", "crony", "crate", "grate", "irate", "brace"]);
        assert_eq!(evaluate(&history, TARGET, MAX_ATTEMPTS), Outcome::Lost);
    }

    #[test]
    fn five_misses_is_still_in_progress() {
        let history = history_with(&["slate", "crony", "crate", "grate", "irate"]);
        assert_eq!(evaluate(&history, TARGET, MAX_ATTEMPTS), Outcome::InProgress);
    }

    #[test]
    fn win_on_the_final_attempt_beats_loss() {
        let history = history_with(&["slate", "crony", "crate", "grate", "irate", TARGET]);
        assert_eq!(evaluate(&history, TARGET, MAX_ATTEMPTS), Outcome::Won);
    }

    #[test]
    fn outcome_terminal_states() {
        assert!(!Outcome::InProgress.is_over());
        assert!(Outcome::Won.is_over());
        assert!(Outcome::Lost.is_over());
    }
}
