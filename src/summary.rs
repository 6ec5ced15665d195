//! Shareable result summary
//!
//! Renders the emoji grid a player copies after finishing: a header with the
//! day label and attempt count, then one tile row per guess in submission
//! order. The output is deterministic for a given history, which the share
//! flow and the golden tests below rely on.

use crate::core::LetterMark;
use crate::session::SessionHistory;
use crate::{Outcome, evaluate};

/// Tile for a single letter mark
const fn tile(mark: LetterMark) -> char {
    match mark {
        LetterMark::Correct => '🟩',
        LetterMark::WrongLocation => '🟨',
        LetterMark::Absent => '⬜',
    }
}

/// Render the share summary
///
/// Header: `"<day_label> <n>/<max_attempts>"`, with `n` replaced by `X` when
/// the day ended in a loss. A blank line separates the header from the grid.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wordle_daily::core::classify;
/// use wordle_daily::session::SessionHistory;
/// use wordle_daily::{MAX_ATTEMPTS, summary};
///
/// let mut history = SessionHistory::new(NaiveDate::from_ymd_opt(2022, 3, 14).unwrap());
/// history.record("crane".to_string(), classify("crane", "crane")).unwrap();
///
/// let text = summary::render(&history, "crane", "Wordle 268", MAX_ATTEMPTS);
/// assert_eq!(text, "Wordle 268 1/6\n\n🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn render(
    history: &SessionHistory,
    target: &str,
    day_label: &str,
    max_attempts: usize,
) -> String {
    let attempts = if evaluate(history, target, max_attempts) == Outcome::Lost {
        "X".to_string()
    } else {
        history.len().to_string()
    };

    let mut out = format!("{day_label} {attempts}/{max_attempts}\n");

    for record in history.iter() {
        out.push('\n');
        for mark in record.verdict.marks(record.word.len()) {
            out.push(tile(mark));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_ATTEMPTS;
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
    fn win_on_attempt_three_golden() {
        let history = history_with(&["slate", "crony", "crane"]);

        let text = render(&history, TARGET, "Wordle 268", MAX_ATTEMPTS);

        assert_eq!(
            text,
            "Wordle 268 3/6\n\n⬜⬜🟩⬜🟩\n🟩🟩⬜🟩⬜\n🟩🟩🟩🟩🟩"
        );
    }

    #[test]
    fn loss_renders_x_for_the_attempt_count() {
        let history = history_with(&["slate", "crony", "crate", "grate", "irate", "brace"]);

        let text = render(&history, TARGET, "Wordle 268", MAX_ATTEMPTS);

        assert!(text.starts_with("Wordle 268 X/6\n\n"));
        assert_eq!(text.lines().count(), 8);
    }

    #[test]
    fn in_progress_history_renders_its_count() {
        let history = history_with(&["slate"]);

        let text = render(&history, TARGET, "Wordle 268", MAX_ATTEMPTS);

        assert!(text.starts_with("Wordle 268 1/6\n\n"));
    }

    #[test]
    fn rows_follow_submission_order() {
        let history = history_with(&["crane", "slate"]);
        // (Impossible in a real game - a win ends it - but order must hold.)

        let text = render(&history, TARGET, "Wordle 268", MAX_ATTEMPTS);
        let rows: Vec<&str> = text.lines().skip(2).collect();

        assert_eq!(rows[0], "🟩🟩🟩🟩🟩");
        assert_eq!(rows[1], "⬜⬜🟩⬜🟩");
    }

    #[test]
    fn duplicate_letters_render_per_verdict() {
        let mut history =
            SessionHistory::new(NaiveDate::from_ymd_opt(2022, 3, 14).unwrap());
        history
            .record("erase".to_string(), classify("erase", "speed"))
            .unwrap();

        let text = render(&history, "speed", "Wordle 300", MAX_ATTEMPTS);

        assert_eq!(text, "Wordle 300 1/6\n\n🟨⬜⬜🟨🟨");
    }

    #[test]
    fn output_is_deterministic() {
        let history = history_with(&["slate", "crane"]);

        let first = render(&history, TARGET, "Wordle 268", MAX_ATTEMPTS);
        let second = render(&history, TARGET, "Wordle 268", MAX_ATTEMPTS);

        assert_eq!(first, second);
    }
}
