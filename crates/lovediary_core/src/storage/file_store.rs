//! Path-addressed file engine.
//!
//! # Responsibility
//! - Store one value per file under a fixed root directory.
//! - Replace files atomically so readers never see a half-written value.
//!
//! # Invariants
//! - Keys are relative paths that stay inside the root.
//! - Writes go to a sibling temp file, are fsynced, then renamed over the target.

use super::{lock_poisoned, Store, StoreError, StoreResult};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Component, Path, PathBuf};
use std::sync::Mutex;
use uuid::Uuid;

/// File-per-key store rooted at a directory.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Creates a store rooted at `root`. The directory is created lazily on
    /// first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `key` to a path under the root.
    ///
    /// # Errors
    /// - `StoreError::InvalidKey` for empty, absolute or escaping keys.
    pub fn resolve(&self, key: &str) -> StoreResult<PathBuf> {
        let relative = Path::new(key);
        if key.trim().is_empty() || relative.file_name().is_none() {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        let escapes = relative.components().any(|component| {
            !matches!(component, Component::Normal(_) | Component::CurDir)
        });
        if escapes {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.resolve(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.resolve(key)?;
        let _guard = self.write_lock.lock().map_err(|_| lock_poisoned("file"))?;

        let parent = path.parent().unwrap_or(self.root.as_path());
        fs::create_dir_all(parent)?;

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| StoreError::InvalidKey(key.to_string()))?;
        let tmp_path = parent.join(format!(".{file_name}.{}.tmp", Uuid::new_v4()));

        let written = write_synced(&tmp_path, value).and_then(|()| fs::rename(&tmp_path, &path));
        if let Err(err) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(err.into());
        }
        Ok(())
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        let path = self.resolve(key)?;
        let _guard = self.write_lock.lock().map_err(|_| lock_poisoned("file"))?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

fn write_synced(path: &Path, value: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(value.as_bytes())?;
    file.sync_all()
}
