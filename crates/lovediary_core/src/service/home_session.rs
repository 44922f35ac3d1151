//! Profile screen use-case.
//!
//! # Responsibility
//! - Load and edit the partner names.
//! - Gate diary entry on both names being present.
//! - Run the confirmation-gated profile reset.
//!
//! # Invariants
//! - A rejected entry attempt performs no storage write.
//! - Storage failures are logged and never reach the caller.

use crate::model::confirmation::{ConfirmPrompt, ResetGate, PROFILE_RESET_PROMPT};
use crate::model::profile::Profile;
use crate::repo::profile_store::ProfileStore;
use crate::service::EntryError;
use crate::storage::Store;
use log::{info, warn};

pub struct HomeSession<S: Store> {
    store: ProfileStore<S>,
    profile: Profile,
    reset_gate: ResetGate,
}

impl<S: Store> HomeSession<S> {
    /// Loads the saved names, falling back to empty names on any failure.
    pub fn open(store: ProfileStore<S>) -> Self {
        let profile = store.load().unwrap_or_else(|err| {
            warn!(
                "event=profile_load module=home status=degraded error_code={} error={}",
                err.code(),
                err
            );
            Profile::empty()
        });
        Self {
            store,
            profile,
            reset_gate: ResetGate::new(PROFILE_RESET_PROMPT),
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn set_partner_one(&mut self, name: impl Into<String>) {
        self.profile.partner_one = name.into();
    }

    pub fn set_partner_two(&mut self, name: impl Into<String>) {
        self.profile.partner_two = name.into();
    }

    /// Validates the names, saves them and returns the profile to hand to the
    /// diary.
    ///
    /// The save is best effort: a failed write is logged and entry proceeds.
    pub fn enter_diary(&self) -> Result<Profile, EntryError> {
        if let Err(err) = self.profile.validate_for_entry() {
            info!("event=diary_enter module=home status=rejected reason={err}");
            return Err(err.into());
        }

        if let Err(err) = self.store.save(&self.profile) {
            warn!(
                "event=profile_save module=home status=error error_code={} error={}",
                err.code(),
                err
            );
        }
        info!("event=diary_enter module=home status=ok");
        Ok(self.profile.clone())
    }

    pub fn reset_gate(&self) -> &ResetGate {
        &self.reset_gate
    }

    pub fn request_reset(&mut self) -> &ConfirmPrompt {
        self.reset_gate.request()
    }

    pub fn cancel_reset(&mut self) -> bool {
        self.reset_gate.cancel()
    }

    /// Deletes the profile record once the prompt is confirmed.
    ///
    /// Returns `true` when the record was deleted. Names are only cleared
    /// after a successful delete.
    pub fn confirm_reset(&mut self) -> bool {
        if !self.reset_gate.confirm() {
            return false;
        }
        match self.store.reset() {
            Ok(()) => {
                self.profile = Profile::empty();
                true
            }
            Err(err) => {
                warn!(
                    "event=profile_reset module=home status=error error_code={} error={}",
                    err.code(),
                    err
                );
                false
            }
        }
    }

    pub fn into_store(self) -> ProfileStore<S> {
        self.store
    }
}
