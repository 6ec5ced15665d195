//! Session state: the day-scoped guess history and its persistence

mod history;
mod store;

pub use history::{GuessRecord, HistoryError, SessionHistory};
pub use store::{FileStore, HISTORY_KEY, HistoryStore, KvStore, MemoryStore, StoreError};
