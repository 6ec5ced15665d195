//! Core domain types for the daily word game
//!
//! Pure classification logic and its verdict value type. Everything here is
//! side-effect-free and independent of storage, dates, and presentation.

mod classify;
mod verdict;

pub use classify::classify;
pub use verdict::{LetterMark, Verdict};
