//! Diary screen use-case.
//!
//! # Responsibility
//! - Hold the draft and fold it into notes on commit.
//! - Drive `NoteLedger` mutations and swallow their write failures.
//! - Run the confirmation-gated bulk reset.
//!
//! # Invariants
//! - A session only exists for a profile with both names present.
//! - Every add/remove is followed by exactly one snapshot write attempt
//!   (delegated to the ledger).

use crate::model::clock::{Clock, SystemClock};
use crate::model::confirmation::{ConfirmPrompt, ResetGate, NOTES_RESET_PROMPT};
use crate::model::draft::{ImagePick, NoteDraft};
use crate::model::note::{Note, NoteId};
use crate::model::profile::Profile;
use crate::repo::note_ledger::NoteLedger;
use crate::service::diary_view::{diary_title, note_rows, NoteRow};
use crate::service::EntryError;
use crate::storage::Store;
use chrono::{DateTime, Utc};
use log::{info, warn};

pub struct DiarySession<S: Store, C: Clock = SystemClock> {
    profile: Profile,
    ledger: NoteLedger<S, C>,
    draft: NoteDraft,
    reset_gate: ResetGate,
    synced: bool,
}

impl<S: Store, C: Clock> DiarySession<S, C> {
    /// Starts a session for `profile` and loads its notes.
    ///
    /// The profile is checked before storage is touched. Load failures
    /// degrade to an empty diary.
    pub fn open(profile: Profile, mut ledger: NoteLedger<S, C>) -> Result<Self, EntryError> {
        profile.validate_for_entry()?;

        if let Err(err) = ledger.load() {
            warn!(
                "event=notes_load module=diary status=degraded error_code={} error={}",
                err.code(),
                err
            );
        }
        let draft = NoteDraft::new(ledger.clock().now());
        info!(
            "event=diary_open module=diary status=ok count={}",
            ledger.len()
        );
        Ok(Self {
            profile,
            ledger,
            draft,
            reset_gate: ResetGate::new(NOTES_RESET_PROMPT),
            synced: true,
        })
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn notes(&self) -> &[Note] {
        self.ledger.notes()
    }

    pub fn draft(&self) -> &NoteDraft {
        &self.draft
    }

    pub fn title(&self) -> String {
        diary_title(&self.profile)
    }

    pub fn rows(&self) -> Vec<NoteRow> {
        note_rows(self.ledger.notes())
    }

    /// Whether the last add/remove/reset reached storage.
    pub fn is_synced(&self) -> bool {
        self.synced
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.draft.set_content(content);
    }

    /// `None` means the picker closed without a value.
    pub fn pick_date(&mut self, picked: Option<DateTime<Utc>>) {
        let now = self.ledger.clock().now();
        self.draft.pick_date(picked, now);
    }

    pub fn apply_image_pick(&mut self, pick: ImagePick) {
        self.draft.apply_pick(pick);
    }

    /// Commits the draft as a new note and clears it.
    pub fn add_note(&mut self) -> Note {
        let outcome = self.ledger.add(&self.draft);
        self.synced = outcome.is_persisted();
        if let Err(err) = outcome.persisted {
            warn!(
                "event=note_add module=diary status=unsaved note_id={} error_code={} error={}",
                outcome.value.id,
                err.code(),
                err
            );
        }
        self.draft.clear_after_commit();
        outcome.value
    }

    /// Removes the note with `id`; returns how many notes were dropped.
    pub fn remove_note(&mut self, id: NoteId) -> usize {
        let outcome = self.ledger.remove(id);
        self.synced = outcome.is_persisted();
        if let Err(err) = outcome.persisted {
            warn!(
                "event=note_remove module=diary status=unsaved note_id={id} error_code={} error={}",
                err.code(),
                err
            );
        }
        outcome.value
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

    /// Clears every note once the prompt is confirmed.
    ///
    /// Returns `true` when the stored snapshot was deleted.
    pub fn confirm_reset(&mut self) -> bool {
        if !self.reset_gate.confirm() {
            return false;
        }
        // The ledger logs the failure; the session only reports it.
        self.synced = self.ledger.reset().is_ok();
        self.synced
    }

    /// Ends the session ("go back") and hands the ledger back.
    pub fn leave(self) -> NoteLedger<S, C> {
        info!("event=diary_leave module=diary status=ok");
        self.ledger
    }
}
