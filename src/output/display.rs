//! Display functions for the terminal front end

use colored::Colorize;

use crate::Outcome;
use crate::core::{LetterMark, Verdict};
use crate::session::SessionHistory;

/// Render one guess as a colored tile row
#[must_use]
pub fn guess_row(word: &str, verdict: &Verdict) -> String {
    word.chars()
        .enumerate()
        .map(|(i, letter)| {
            let tile = format!(" {} ", letter.to_ascii_uppercase());
            match verdict.mark_at(i) {
                LetterMark::Correct => tile.black().on_green().to_string(),
                LetterMark::WrongLocation => tile.black().on_yellow().to_string(),
                LetterMark::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Print the recorded guesses of a session
pub fn print_board(history: &SessionHistory) {
    for record in history.iter() {
        println!("  {}", guess_row(&record.word, &record.verdict));
    }
}

/// Print the end-of-game (or in-flight) status line
pub fn print_outcome(outcome: Outcome, target: &str, attempts_remaining: usize) {
    match outcome {
        Outcome::Won => println!("\n{}", "You win".green().bold()),
        Outcome::Lost => println!(
            "\n{} {}",
            "The word was".red(),
            target.to_uppercase().red().bold()
        ),
        Outcome::InProgress => {
            println!("\n{attempts_remaining} guesses remaining");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify;

    #[test]
    fn guess_row_covers_every_letter() {
        let verdict = classify("erase", "speed");
        let row = guess_row("erase", &verdict);

        for letter in ["E", "R", "A", "S"] {
            assert!(row.contains(letter), "row missing {letter}");
        }
    }

    #[test]
    fn guess_row_uppercases_letters() {
        let verdict = classify("crane", "crane");
        let row = guess_row("crane", &verdict);

        assert!(row.contains("C"));
        assert!(!row.contains("c"));
    }
}
