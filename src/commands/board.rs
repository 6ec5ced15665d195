//! Board view
//!
//! Non-interactive render of today's progress.

use colored::Colorize;

use crate::dictionary::DictionaryProvider;
use crate::game::Game;
use crate::output::{print_board, print_outcome};
use crate::session::KvStore;

/// Print today's board and status
pub fn run_board<P: DictionaryProvider, S: KvStore>(game: &Game<P, S>) {
    println!(
        "\n{} {}",
        "Wordle".bold(),
        format!("#{}", game.provider().day_count()).dimmed()
    );

    if game.history().is_empty() {
        println!("\nNo guesses yet today.");
        return;
    }

    println!();
    print_board(game.history());
    print_outcome(
        game.outcome(),
        game.provider().target_word(),
        game.attempts_remaining(),
    );
}
