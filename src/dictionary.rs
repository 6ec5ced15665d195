//! Dictionary provider
//!
//! Supplies the engine with the day's target word, the word length, the day
//! ordinal for the share header, and the membership test for guesses. The
//! trait is the seam; [`DailyDictionary`] is the shipped implementation that
//! rotates through the bundled answer list by calendar day.

use chrono::NaiveDate;
use rustc_hash::FxHashSet;

use crate::wordlists::{ALLOWED, ANSWERS};

/// Day zero of the puzzle rotation (the original game's first day)
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2021, 6, 19) {
    Some(date) => date,
    None => unreachable!(),
};

/// Source of the day's puzzle
///
/// Implementations are read-only for the lifetime of a session day.
pub trait DictionaryProvider {
    /// Required guess length
    fn word_length(&self) -> usize;

    /// The hidden answer for the current day, lowercase
    fn target_word(&self) -> &str;

    /// The calendar day the target word is valid for
    fn word_date(&self) -> NaiveDate;

    /// Puzzle ordinal used in the share header
    fn day_count(&self) -> i64;

    /// Whether `word` is an accepted guess
    fn contains(&self, word: &str) -> bool;
}

/// Daily dictionary over an answer rotation and an allowed-guess superset
///
/// The target for a date is `answers[days_since_epoch % answers.len()]`,
/// so every installation shows the same puzzle on the same day.
#[derive(Debug, Clone)]
pub struct DailyDictionary {
    answers: Vec<String>,
    allowed: FxHashSet<String>,
    date: NaiveDate,
    day_count: i64,
}

impl DailyDictionary {
    /// Dictionary for `date` over the bundled word lists
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use wordle_daily::{DailyDictionary, DictionaryProvider};
    ///
    /// let date = NaiveDate::from_ymd_opt(2022, 3, 14).unwrap();
    /// let dict = DailyDictionary::for_date(date);
    ///
    /// assert_eq!(dict.word_length(), 5);
    /// assert_eq!(dict.word_date(), date);
    /// assert!(dict.contains(dict.target_word()));
    /// ```
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        Self::from_lists(
            ANSWERS.iter().map(ToString::to_string),
            ALLOWED.iter().map(ToString::to_string),
            date,
        )
    }

    /// Dictionary for `date` over caller-supplied lists
    ///
    /// `answers` is the rotation of daily targets; `allowed` the accepted
    /// guesses. Every answer is accepted as a guess regardless of whether
    /// `allowed` repeats it.
    ///
    /// # Panics
    /// Panics if `answers` is empty.
    pub fn from_lists<A, G>(answers: A, allowed: G, date: NaiveDate) -> Self
    where
        A: IntoIterator<Item = String>,
        G: IntoIterator<Item = String>,
    {
        let answers: Vec<String> = answers.into_iter().collect();
        assert!(!answers.is_empty(), "answer list must not be empty");

        let mut allowed: FxHashSet<String> = allowed.into_iter().collect();
        allowed.extend(answers.iter().cloned());

        let day_count = (date - EPOCH).num_days();

        Self {
            answers,
            allowed,
            date,
            day_count,
        }
    }
}

impl DictionaryProvider for DailyDictionary {
    fn word_length(&self) -> usize {
        self.answers[0].len()
    }

    fn target_word(&self) -> &str {
        // num_days can be negative for dates before the epoch; rem_euclid
        // keeps the index in range either way.
        let len = i64::try_from(self.answers.len()).expect("answer list fits in i64");
        let index = usize::try_from(self.day_count.rem_euclid(len)).expect("index is non-negative");
        &self.answers[index]
    }

    fn word_date(&self) -> NaiveDate {
        self.date
    }

    fn day_count(&self) -> i64 {
        self.day_count
    }

    fn contains(&self, word: &str) -> bool {
        self.allowed.contains(word)
    }
}
