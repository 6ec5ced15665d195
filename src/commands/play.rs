//! Interactive play mode
//!
//! Line-oriented game loop: prompt for a guess, submit it to the engine,
//! render the verdict, repeat until the day's game ends. All timing and
//! presentation live here; the engine only ever computes.

use std::io::{self, Write};

use colored::Colorize;

use crate::dictionary::DictionaryProvider;
use crate::game::{Game, SubmitError};
use crate::output::{print_board, print_outcome};
use crate::session::KvStore;
use crate::{MAX_ATTEMPTS, output};

/// Run the interactive loop until the game ends or input closes
///
/// # Errors
///
/// Returns an error on I/O failures or an internal invariant violation;
/// rejected guesses are reported to the player and never end the loop.
pub fn run_play<P: DictionaryProvider, S: KvStore>(mut game: Game<P, S>) -> Result<(), String> {
    println!(
        "\n{} {}",
        "Wordle".bold(),
        format!("#{}", game.provider().day_count()).dimmed()
    );
    println!("Guess the {}-letter word. Type 'quit' to stop.\n", game.provider().word_length());

    if !game.history().is_empty() {
        println!("Picking up where you left off today:\n");
        print_board(game.history());
        println!();
    }

    while !game.outcome().is_over() {
        let attempt = game.history().len() + 1;
        let prompt = format!("Guess {attempt}/{MAX_ATTEMPTS}");

        let Some(line) = read_guess(&prompt)? else {
            // Input closed; the session stays resumable.
            println!();
            return Ok(());
        };

        if line == "quit" {
            println!("Come back later - today's progress is saved.");
            return Ok(());
        }

        match game.submit(&line) {
            Ok(submission) => {
                println!(
                    "  {}",
                    output::guess_row(&submission.word, &submission.verdict)
                );

                if !submission.saved() {
                    println!("{}", "(history not saved - storage unavailable)".yellow());
                }
            }
            Err(SubmitError::Rejected(reason)) => {
                println!("{}", reason.to_string().red());
            }
            Err(e @ (SubmitError::GameOver | SubmitError::Invariant(_))) => {
                return Err(e.to_string());
            }
        }
    }

    let target = game.provider().target_word().to_string();
    print_outcome(game.outcome(), &target, game.attempts_remaining());

    println!("\n{}", game.share_summary());
    Ok(())
}

/// Prompt and read one line; `None` on end of input
fn read_guess(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let bytes = io::stdin()
        .read_line(&mut line)
        .map_err(|e| e.to_string())?;

    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_ascii_lowercase()))
}
