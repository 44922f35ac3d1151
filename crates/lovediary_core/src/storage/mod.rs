//! Key-addressed storage contracts and engines.
//!
//! # Responsibility
//! - Define the get/set/delete contract every persisted resource goes through.
//! - Provide the engines used on device (SQLite key-value table, files) and
//!   in tests (memory).
//!
//! # Invariants
//! - `delete` of an absent key succeeds.
//! - `set` replaces the whole value; there are no partial writes.
//! - Engines are `Send + Sync` and serialize access internally.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

mod file_store;
mod memory;
mod sqlite_kv;

pub use file_store::FileStore;
pub use memory::MemoryStore;
pub use sqlite_kv::SqliteKvStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure reported by a storage engine or by payload (de)serialization.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Db(DbError),
    Serialization(serde_json::Error),
    InvalidKey(String),
    Unavailable(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "storage i/o failed: {err}"),
            Self::Db(err) => write!(f, "storage database failed: {err}"),
            Self::Serialization(err) => write!(f, "stored payload is not valid: {err}"),
            Self::InvalidKey(key) => write!(f, "invalid storage key `{key}`"),
            Self::Unavailable(details) => write!(f, "storage unavailable: {details}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::InvalidKey(_) | Self::Unavailable(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

impl StoreError {
    /// Stable short code used in structured log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Db(_) => "db",
            Self::Serialization(_) => "serialization",
            Self::InvalidKey(_) => "invalid_key",
            Self::Unavailable(_) => "unavailable",
        }
    }
}

/// String-valued storage addressed by key.
///
/// Key-value engines treat the key as an opaque name; path-based engines
/// resolve it relative to their root.
pub trait Store {
    /// Returns the stored value, or `None` when nothing is stored.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    /// Stores `value`, replacing any prior value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    /// Removes the value. Absent keys are not an error.
    fn delete(&self, key: &str) -> StoreResult<()>;
}

impl<T: Store + ?Sized> Store for &T {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        (**self).delete(key)
    }
}

impl<T: Store + ?Sized> Store for Box<T> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        (**self).delete(key)
    }
}

impl<T: Store + ?Sized> Store for Arc<T> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        (**self).delete(key)
    }
}

fn lock_poisoned(engine: &str) -> StoreError {
    StoreError::Unavailable(format!("{engine} lock poisoned"))
}
