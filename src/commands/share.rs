//! Share command
//!
//! Prints the deterministic share text for a finished day.

use crate::dictionary::DictionaryProvider;
use crate::game::Game;
use crate::session::KvStore;

/// Print the share summary for today's finished game
///
/// # Errors
///
/// Returns an error while the game is still in progress; there is nothing
/// worth sharing yet.
pub fn run_share<P: DictionaryProvider, S: KvStore>(game: &Game<P, S>) -> Result<(), String> {
    if !game.outcome().is_over() {
        return Err("today's game is still in progress".to_string());
    }

    println!("{}", game.share_summary());
    Ok(())
}
