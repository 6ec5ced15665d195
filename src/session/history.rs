//! Day-scoped guess history
//!
//! The only mutable entity in the engine. A history belongs to one calendar
//! day and records every accepted guess with its verdict, in submission
//! order. It is threaded through the game as an explicit value; the single
//! mutation is an append after successful classification.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Verdict;

/// One accepted guess and its verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    /// The guessed word, normalized lowercase
    pub word: String,
    /// Classification against that day's target
    pub verdict: Verdict,
}

/// Internal invariant violations of the history
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// A guess was recorded twice; the validator was bypassed. The prior
    /// verdict is never overwritten.
    #[error("guess '{0}' is already recorded for this day")]
    DuplicateGuess(String),
}

/// Ordered record of one day's guesses
///
/// Serializes to the stored document format: the date as an ISO day string
/// and the guesses as a JSON map in submission order,
/// `{"date": "2022-03-14", "guesses": {"crane": {...}, ...}}`.
/// Deserialization preserves encounter order and rejects duplicate keys, so
/// latest-guess semantics survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionHistory {
    date: NaiveDate,
    #[serde(with = "guess_map")]
    guesses: Vec<GuessRecord>,
}

impl SessionHistory {
    /// Empty history stamped with the given day
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            guesses: Vec::new(),
        }
    }

    /// The day this history belongs to
    #[inline]
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Number of recorded guesses
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    /// Whether no guess has been recorded yet
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }

    /// Whether `word` was already recorded today
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.guesses.iter().any(|record| record.word == word)
    }

    /// Recorded guesses in submission order
    pub fn iter(&self) -> impl Iterator<Item = &GuessRecord> {
        self.guesses.iter()
    }

    /// The most recently recorded guess
    #[must_use]
    pub fn latest(&self) -> Option<&GuessRecord> {
        self.guesses.last()
    }

    /// Append a guess and its verdict
    ///
    /// # Errors
    /// [`HistoryError::DuplicateGuess`] if `word` is already recorded. This
    /// cannot happen when the validator ran first; treat it as a programming
    /// error, not player input to report.
    pub fn record(&mut self, word: String, verdict: Verdict) -> Result<(), HistoryError> {
        if self.contains(&word) {
            return Err(HistoryError::DuplicateGuess(word));
        }
        self.guesses.push(GuessRecord { word, verdict });
        Ok(())
    }
}

/// Serde adapter storing the guess list as an order-preserving JSON map
mod guess_map {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer, de};

    use super::GuessRecord;
    use crate::core::Verdict;

    pub fn serialize<S>(records: &[GuessRecord], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(records.len()))?;
        for record in records {
            map.serialize_entry(&record.word, &record.verdict)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<GuessRecord>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct GuessMapVisitor;

        impl<'de> Visitor<'de> for GuessMapVisitor {
            type Value = Vec<GuessRecord>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of guess words to verdicts")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut records = Vec::with_capacity(access.size_hint().unwrap_or(0));

                while let Some((word, verdict)) = access.next_entry::<String, Verdict>()? {
                    if records.iter().any(|r: &GuessRecord| r.word == word) {
                        return Err(de::Error::custom(format!(
                            "duplicate guess '{word}' in stored history"
                        )));
                    }
                    records.push(GuessRecord { word, verdict });
                }

                Ok(records)
            }
        }

        deserializer.deserialize_map(GuessMapVisitor)
    }
}
