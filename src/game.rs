//! Game coordination
//!
//! Ties the provider, the history store, and the pure engine functions into
//! the submission flow: validate, classify, record, persist, evaluate. The
//! front end calls [`Game::submit`] for data and owns presentation; nothing
//! here blocks or waits on the UI.

use thiserror::Error;
use tracing::warn;

use crate::core::{Verdict, classify};
use crate::dictionary::DictionaryProvider;
use crate::outcome::{MAX_ATTEMPTS, Outcome, evaluate};
use crate::session::{HistoryError, HistoryStore, KvStore, SessionHistory, StoreError};
use crate::summary;
use crate::validate::{RejectReason, validate};

/// Why a submission did not produce a verdict
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The candidate failed a validation rule; report and carry on
    #[error(transparent)]
    Rejected(#[from] RejectReason),

    /// The day's game already ended; no further guesses are accepted
    #[error("the game is already over for today")]
    GameOver,

    /// History invariant violation; the submission was aborted
    #[error(transparent)]
    Invariant(#[from] HistoryError),
}

/// Result of one accepted submission
#[derive(Debug)]
pub struct Submission {
    /// The accepted guess after normalization
    pub word: String,
    /// Per-letter classification of the accepted guess
    pub verdict: Verdict,
    /// Game status after recording the guess
    pub outcome: Outcome,
    /// Set when persisting failed; the guess is still recorded in memory
    pub save_error: Option<StoreError>,
}

impl Submission {
    /// Whether the updated history reached durable storage
    #[must_use]
    pub const fn saved(&self) -> bool {
        self.save_error.is_none()
    }
}

/// One day's game session
///
/// Owns the current history and the single write path to it. Restoring a
/// session replays the stored guesses in order without re-persisting them.
pub struct Game<P: DictionaryProvider, S: KvStore> {
    provider: P,
    store: HistoryStore<S>,
    history: SessionHistory,
}

impl<P: DictionaryProvider, S: KvStore> Game<P, S> {
    /// Start or resume the session for the provider's day
    ///
    /// Loads the persisted history; a record from another day is discarded
    /// and the session starts fresh.
    #[must_use]
    pub fn load(provider: P, store: S) -> Self {
        let store = HistoryStore::new(store);
        let history = store.load(provider.word_date());

        Self {
            provider,
            store,
            history,
        }
    }

    /// The dictionary provider backing this session
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The current day's history, restored guesses included
    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    /// Current game status
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.history, self.provider.target_word(), MAX_ATTEMPTS)
    }

    /// Guesses left today
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.history.len())
    }

    /// Submit a candidate guess
    ///
    /// Normalizes the raw input (trim, lowercase), runs the validation
    /// rules, classifies against the target, records and persists the
    /// updated history, and evaluates the outcome.
    ///
    /// A persistence failure does not fail the submission: the verdict and
    /// outcome are returned with [`Submission::save_error`] set, and the
    /// session continues in memory.
    ///
    /// # Errors
    /// [`SubmitError::Rejected`] for rule violations (report to the player),
    /// [`SubmitError::GameOver`] once the day ended, and
    /// [`SubmitError::Invariant`] if a duplicate slipped past validation.
    pub fn submit(&mut self, raw: &str) -> Result<Submission, SubmitError> {
        if self.outcome().is_over() {
            return Err(SubmitError::GameOver);
        }

        let candidate = raw.trim().to_ascii_lowercase();

        validate(
            &candidate,
            &self.history,
            self.provider.word_length(),
            |word| self.provider.contains(word),
        )?;

        let verdict = classify(&candidate, self.provider.target_word());
        self.history.record(candidate.clone(), verdict.clone())?;

        let save_error = match self.store.persist(&self.history) {
            Ok(()) => None,
            Err(e) => {
                warn!(error = %e, "history not saved, continuing in memory");
                Some(e)
            }
        };

        Ok(Submission {
            word: candidate,
            verdict,
            outcome: self.outcome(),
            save_error,
        })
    }

    /// Share text for the current history
    ///
    /// Header label is `"Wordle <day_count>"`; rendering is deterministic.
    #[must_use]
    pub fn share_summary(&self) -> String {
        summary::render(
            &self.history,
            self.provider.target_word(),
            &format!("Wordle {}", self.provider.day_count()),
            MAX_ATTEMPTS,
        )
    }
}
