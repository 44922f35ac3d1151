//! Note collection ownership and write-through persistence.
//!
//! # Responsibility
//! - Hold the ordered note collection for the current diary.
//! - Persist the whole collection after every mutation.
//!
//! # Invariants
//! - Each `add`/`remove` applies in memory, then makes exactly one
//!   full-snapshot write attempt.
//! - A failed write never rolls back memory; the in-memory collection stays
//!   authoritative for the rest of the session.
//! - Snapshots are written under `NOTES_KEY` only.

use crate::model::clock::{Clock, SystemClock};
use crate::model::draft::NoteDraft;
use crate::model::note::{appended, without, Note, NoteId, NoteIdGenerator};
use crate::storage::{Store, StoreError, StoreResult};
use log::{debug, error, info};
use std::time::Instant;

/// Fixed key of the note snapshot.
pub const NOTES_KEY: &str = "notes";

/// Outcome of a mutation: the in-memory result plus the write attempt.
#[derive(Debug)]
#[must_use = "the write result tells whether the snapshot reached storage"]
pub struct WriteThrough<T> {
    pub value: T,
    pub persisted: StoreResult<()>,
}

impl<T> WriteThrough<T> {
    pub fn is_persisted(&self) -> bool {
        self.persisted.is_ok()
    }
}

/// Ordered note collection bound to one store.
pub struct NoteLedger<S: Store, C: Clock = SystemClock> {
    store: S,
    clock: C,
    ids: NoteIdGenerator,
    notes: Vec<Note>,
}

impl<S: Store> NoteLedger<S> {
    /// Creates an empty, not yet loaded ledger on the wall clock.
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: Store, C: Clock> NoteLedger<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            ids: NoteIdGenerator::new(),
            notes: Vec::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Replaces the in-memory collection with the persisted snapshot.
    ///
    /// # Errors
    /// - Read or parse failures are returned; the collection is left empty.
    pub fn load(&mut self) -> StoreResult<&[Note]> {
        self.notes.clear();
        let Some(raw) = self.store.get(NOTES_KEY)? else {
            debug!("event=notes_load module=ledger status=ok found=false");
            return Ok(&self.notes);
        };
        self.notes = serde_json::from_str::<Vec<Note>>(&raw)?;
        self.ids.observe(&self.notes);
        info!(
            "event=notes_load module=ledger status=ok found=true count={}",
            self.notes.len()
        );
        Ok(&self.notes)
    }

    /// Writes the full current collection, replacing the stored snapshot.
    pub fn persist(&self) -> StoreResult<()> {
        let started_at = Instant::now();
        let result = serde_json::to_string(&self.notes)
            .map_err(StoreError::from)
            .and_then(|raw| self.store.set(NOTES_KEY, &raw));
        match &result {
            Ok(()) => debug!(
                "event=notes_persist module=ledger status=ok count={} duration_ms={}",
                self.notes.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=notes_persist module=ledger status=error count={} error_code={} error={}",
                self.notes.len(),
                err.code(),
                err
            ),
        }
        result
    }

    /// Appends a note built from `draft` with a fresh id, then persists.
    ///
    /// Content is not validated; an empty note is a valid note.
    pub fn add(&mut self, draft: &NoteDraft) -> WriteThrough<Note> {
        let id = self.ids.next(self.clock.now_ms());
        let note = Note::new(
            id,
            Some(draft.date()),
            draft.content(),
            draft.image().map(str::to_string),
        );
        self.notes = appended(&self.notes, note.clone());
        info!("event=note_add module=ledger status=ok note_id={id}");
        WriteThrough {
            value: note,
            persisted: self.persist(),
        }
    }

    /// Drops every note with `id`, then persists even when nothing matched.
    ///
    /// Returns the number of notes removed.
    pub fn remove(&mut self, id: NoteId) -> WriteThrough<usize> {
        let before = self.notes.len();
        self.notes = without(&self.notes, id);
        let removed = before - self.notes.len();
        info!("event=note_remove module=ledger status=ok note_id={id} removed={removed}");
        WriteThrough {
            value: removed,
            persisted: self.persist(),
        }
    }

    /// Deletes the stored snapshot and empties the collection.
    ///
    /// # Errors
    /// - When the delete fails the collection is kept as is.
    pub fn reset(&mut self) -> StoreResult<()> {
        if let Err(err) = self.store.delete(NOTES_KEY) {
            error!(
                "event=notes_reset module=ledger status=error error_code={} error={}",
                err.code(),
                err
            );
            return Err(err);
        }
        let cleared = self.notes.len();
        self.notes.clear();
        info!("event=notes_reset module=ledger status=ok cleared={cleared}");
        Ok(())
    }

    /// Releases the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }
}
