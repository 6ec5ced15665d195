//! History persistence
//!
//! The engine never talks to a concrete backend directly: a synchronous
//! key-value interface is injected, so the same logic runs against the
//! in-memory fake in tests and the file-backed store in the CLI. The whole
//! history document is written under one fixed key on every persist; there
//! are no partial writes to recover from.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, warn};

use super::SessionHistory;

/// Fixed key the serialized history lives under
pub const HISTORY_KEY: &str = "wordle_history";

/// Persistence backend failures
///
/// All of these are non-fatal to gameplay: the session keeps its in-memory
/// history and the caller may retry on the next submission.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failed
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The history could not be serialized
    #[error("could not serialize history: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backend is not usable at all
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Synchronous string-valued key-value backend
pub trait KvStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, overwriting any prior value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory backend for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: one file per key under a state directory
///
/// The directory is created lazily on the first write.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at `dir`
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// Load/persist of the session history through an injected backend
#[derive(Debug)]
pub struct HistoryStore<S: KvStore> {
    store: S,
}

impl<S: KvStore> HistoryStore<S> {
    /// Wrap a backend
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the history for `today`
    ///
    /// Absent, unreadable, unparseable, or stale-dated state all yield a
    /// fresh empty history stamped `today`. Recovery is silent to the
    /// player; the stale copy is simply overwritten on the next persist.
    #[must_use]
    pub fn load(&self, today: NaiveDate) -> SessionHistory {
        let stored = match self.store.get(HISTORY_KEY) {
            Ok(stored) => stored,
            Err(e) => {
                warn!(error = %e, "could not read stored history, starting fresh");
                None
            }
        };

        let Some(raw) = stored else {
            debug!(%today, "no stored history, starting fresh");
            return SessionHistory::new(today);
        };

        let history: SessionHistory = match serde_json::from_str(&raw) {
            Ok(history) => history,
            Err(e) => {
                warn!(error = %e, "stored history is corrupt, starting fresh");
                return SessionHistory::new(today);
            }
        };

        if history.date() != today {
            debug!(stored = %history.date(), %today, "stored history is stale, starting fresh");
            return SessionHistory::new(today);
        }

        history
    }

    /// Persist the full history, overwriting any prior record
    ///
    /// # Errors
    /// Propagates backend failures; the in-memory history is unaffected and
    /// gameplay may continue.
    pub fn persist(&mut self, history: &SessionHistory) -> Result<(), StoreError> {
        let json = serde_json::to_string(history)?;
        self.store.set(HISTORY_KEY, &json)?;
        debug!(guesses = history.len(), "history persisted");
        Ok(())
    }
}
