//! On-device storage layout.
//!
//! # Responsibility
//! - Derive every persisted location from one host-supplied data directory.
//! - Open the stores the sessions run on.
//!
//! # Invariants
//! - The data directory is absolute; nothing is read from the environment.
//! - Profile and notes live in separate engines (file vs. key-value).

use crate::repo::note_ledger::NoteLedger;
use crate::repo::profile_store::{ProfileStore, PROFILE_KEY};
use crate::storage::{FileStore, SqliteKvStore, StoreResult};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const NOTES_DB_FILE_NAME: &str = "lovediary.sqlite3";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyDataDir,
    RelativeDataDir(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDataDir => write!(f, "data_dir cannot be empty"),
            Self::RelativeDataDir(value) => {
                write!(f, "data_dir must be an absolute path, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// Locations derived from the app's document directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryPaths {
    data_dir: PathBuf,
}

impl DiaryPaths {
    /// # Errors
    /// - `ConfigError` when `data_dir` is empty or relative.
    pub fn new(data_dir: &str) -> Result<Self, ConfigError> {
        let trimmed = data_dir.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyDataDir);
        }
        let path = Path::new(trimmed);
        if !path.is_absolute() {
            return Err(ConfigError::RelativeDataDir(trimmed.to_string()));
        }
        Ok(Self {
            data_dir: path.to_path_buf(),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Profile record location (relative to the file store root).
    pub fn profile_key(&self) -> &'static str {
        PROFILE_KEY
    }

    pub fn profile_file(&self) -> PathBuf {
        self.data_dir.join(PROFILE_KEY)
    }

    pub fn notes_db_path(&self) -> PathBuf {
        self.data_dir.join(NOTES_DB_FILE_NAME)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }

    /// Profile store over files in the data directory.
    pub fn profile_store(&self) -> ProfileStore<FileStore> {
        ProfileStore::new(FileStore::new(self.data_dir.clone()))
    }

    /// Unloaded note ledger over the key-value database.
    ///
    /// # Errors
    /// - Database open or migration failures.
    pub fn note_ledger(&self) -> StoreResult<NoteLedger<SqliteKvStore>> {
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(NoteLedger::new(SqliteKvStore::open(self.notes_db_path())?))
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, DiaryPaths};

    #[test]
    fn rejects_empty_and_relative_dirs() {
        assert_eq!(DiaryPaths::new("  "), Err(ConfigError::EmptyDataDir));
        assert!(matches!(
            DiaryPaths::new("documents"),
            Err(ConfigError::RelativeDataDir(_))
        ));
    }

    #[test]
    fn derives_locations_from_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DiaryPaths::new(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(paths.profile_file(), dir.path().join("data.json"));
        assert_eq!(paths.notes_db_path(), dir.path().join("lovediary.sqlite3"));
        assert_eq!(paths.log_dir(), dir.path().join("logs"));
    }
}
