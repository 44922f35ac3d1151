//! Profile persistence.
//!
//! # Responsibility
//! - Read, overwrite and delete the single partner-profile record.
//!
//! # Invariants
//! - Every operation touches exactly `PROFILE_KEY`.
//! - An absent record is the empty profile, not an error.

use crate::model::profile::Profile;
use crate::storage::{Store, StoreResult};
use log::{debug, info};

/// Fixed location of the profile record.
pub const PROFILE_KEY: &str = "data.json";

/// Owns the profile record on one store.
pub struct ProfileStore<S: Store> {
    store: S,
}

impl<S: Store> ProfileStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads the persisted profile.
    ///
    /// # Errors
    /// - Storage read failures and unparsable records are returned unchanged;
    ///   callers decide whether to degrade to `Profile::empty()`.
    pub fn load(&self) -> StoreResult<Profile> {
        let Some(raw) = self.store.get(PROFILE_KEY)? else {
            debug!("event=profile_load module=repo status=ok found=false");
            return Ok(Profile::empty());
        };
        let profile = serde_json::from_str::<Profile>(&raw)?;
        debug!("event=profile_load module=repo status=ok found=true");
        Ok(profile)
    }

    /// Serializes and overwrites the full record.
    pub fn save(&self, profile: &Profile) -> StoreResult<()> {
        let raw = serde_json::to_string(profile)?;
        self.store.set(PROFILE_KEY, &raw)?;
        info!("event=profile_save module=repo status=ok bytes={}", raw.len());
        Ok(())
    }

    /// Deletes the record; a later `load` returns the empty profile.
    pub fn reset(&self) -> StoreResult<()> {
        self.store.delete(PROFILE_KEY)?;
        info!("event=profile_reset module=repo status=ok");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ProfileStore, PROFILE_KEY};
    use crate::model::profile::Profile;
    use crate::storage::{MemoryStore, Store, StoreError};

    #[test]
    fn load_without_record_is_empty_profile() {
        let store = ProfileStore::new(MemoryStore::new());
        assert_eq!(store.load().unwrap(), Profile::empty());
    }

    #[test]
    fn corrupt_record_is_reported() {
        let memory = MemoryStore::new();
        memory.set(PROFILE_KEY, "not json").unwrap();
        let err = ProfileStore::new(&memory).load().unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
