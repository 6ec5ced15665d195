//! Daily word-guessing game engine
//!
//! A Wordle-style game split into a pure core (classification, validation,
//! outcome, share summary), a day-scoped persisted session history behind an
//! injectable key-value store, and a thin terminal front end.
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use wordle_daily::core::classify;
//! use wordle_daily::{DailyDictionary, DictionaryProvider};
//!
//! // The provider picks the day's target deterministically.
//! let date = NaiveDate::from_ymd_opt(2022, 3, 14).unwrap();
//! let dict = DailyDictionary::for_date(date);
//!
//! // Classify a guess against it.
//! let verdict = classify("crane", dict.target_word());
//! println!("correct positions: {:?}", verdict.correct());
//! ```

// Core domain types
pub mod core;

// Guess acceptance rules
mod validate;

// Day-scoped history and persistence
pub mod session;

// Win/loss evaluation
mod outcome;

// Share summary rendering
pub mod summary;

// Daily target and dictionary membership
mod dictionary;

// Submission coordination
mod game;

// Bundled word lists
pub mod wordlists;

// CLI front end
pub mod commands;
pub mod output;

pub use dictionary::{DailyDictionary, DictionaryProvider, EPOCH};
pub use game::{Game, Submission, SubmitError};
pub use outcome::{MAX_ATTEMPTS, Outcome, evaluate};
pub use validate::{RejectReason, validate};
