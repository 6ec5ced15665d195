//! Daily word game - CLI
//!
//! Terminal front end for the game engine: interactive play, board view,
//! and the share summary. State lives in a per-user data directory unless
//! overridden.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wordle_daily::{
    DailyDictionary, Game,
    commands::{run_board, run_play, run_share},
    session::FileStore,
    wordlists::loader::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Daily Wordle-style word game with duplicate-aware letter scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Custom word list file (one word per line); targets rotate through it
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Directory the game state is stored in
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    /// Play a specific day's puzzle (YYYY-MM-DD) instead of today's
    #[arg(short, long, global = true)]
    date: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play today's puzzle interactively (default)
    Play,

    /// Show today's board without playing
    Board,

    /// Print the share summary for today's finished game
    Share,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let date = resolve_date(cli.date.as_deref())?;
    let dictionary = build_dictionary(cli.wordlist.as_deref(), date)?;
    let store = FileStore::new(resolve_state_dir(cli.state_dir));
    let game = Game::load(dictionary, store);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(game).map_err(|e| anyhow::anyhow!(e)),
        Commands::Board => {
            run_board(&game);
            Ok(())
        }
        Commands::Share => run_share(&game).map_err(|e| anyhow::anyhow!(e)),
    }
}

/// Today's date, or the `--date` override
fn resolve_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("invalid date '{raw}', expected YYYY-MM-DD")),
        None => Ok(Local::now().date_naive()),
    }
}

/// Dictionary over the bundled lists, or a custom `--wordlist` file
fn build_dictionary(wordlist: Option<&Path>, date: NaiveDate) -> Result<DailyDictionary> {
    match wordlist {
        Some(path) => {
            let words = load_from_file(path, 5)
                .with_context(|| format!("could not read word list {}", path.display()))?;
            if words.is_empty() {
                bail!("word list {} holds no usable words", path.display());
            }
            Ok(DailyDictionary::from_lists(words.clone(), words, date))
        }
        None => Ok(DailyDictionary::for_date(date)),
    }
}

/// The `--state-dir` override, or a `wordle_daily` directory under the
/// platform data dir (falling back to the working directory)
fn resolve_state_dir(state_dir: Option<PathBuf>) -> PathBuf {
    state_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wordle_daily")
    })
}
