//! Diary note record and collection helpers.
//!
//! # Responsibility
//! - Define the persisted note shape and its stable id type.
//! - Provide the pure append/filter operations the ledger is built on.
//! - Generate note ids from creation time.
//!
//! # Invariants
//! - Collection order is insertion order.
//! - Generated ids are strictly increasing per generator, and equal to the
//!   creation millisecond whenever that millisecond is still unused.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Note identifier: creation time in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub i64);

impl NoteId {
    pub fn as_millis(self) -> i64 {
        self.0
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One diary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    /// Calendar date picked for the entry. Serialized as RFC 3339.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    /// Free text. May be empty.
    #[serde(default)]
    pub content: String,
    /// Opaque image URI, stored as given.
    #[serde(default)]
    pub image: Option<String>,
}

impl Note {
    pub fn new(
        id: NoteId,
        date: Option<DateTime<Utc>>,
        content: impl Into<String>,
        image: Option<String>,
    ) -> Self {
        Self {
            id,
            date,
            content: content.into(),
            image,
        }
    }
}

/// Returns a new sequence with `note` appended after `notes`.
pub fn appended(notes: &[Note], note: Note) -> Vec<Note> {
    let mut next = Vec::with_capacity(notes.len() + 1);
    next.extend_from_slice(notes);
    next.push(note);
    next
}

/// Returns a new sequence without any note whose id equals `id`.
///
/// Ids can collide when data was written by older builds, so every match is
/// dropped, not only the first.
pub fn without(notes: &[Note], id: NoteId) -> Vec<Note> {
    notes.iter().filter(|note| note.id != id).cloned().collect()
}

/// Time-derived id source.
#[derive(Debug, Clone, Default)]
pub struct NoteIdGenerator {
    last: Option<i64>,
}

impl NoteIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes sure future ids sort after every id in `notes`.
    pub fn observe(&mut self, notes: &[Note]) {
        if let Some(max) = notes.iter().map(|note| note.id.0).max() {
            self.last = Some(self.last.map_or(max, |last| last.max(max)));
        }
    }

    /// Returns the id for a note created at `now_ms`.
    ///
    /// When the stored ids already reach `i64::MAX` the sequence restarts
    /// from `now_ms`.
    pub fn next(&mut self, now_ms: i64) -> NoteId {
        let id = match self.last {
            Some(last) if now_ms <= last => last.checked_add(1).unwrap_or(now_ms),
            _ => now_ms,
        };
        self.last = Some(id);
        NoteId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::{appended, without, Note, NoteId, NoteIdGenerator};
    use chrono::{TimeZone, Utc};

    fn note(id: i64, content: &str) -> Note {
        Note::new(NoteId(id), None, content, None)
    }

    #[test]
    fn without_absent_id_keeps_sequence() {
        let notes = vec![note(1, "a"), note(2, "b")];
        assert_eq!(without(&notes, NoteId(99)), notes);
    }

    #[test]
    fn without_drops_every_colliding_id() {
        let notes = vec![note(1, "a"), note(2, "b"), note(1, "c")];
        assert_eq!(without(&notes, NoteId(1)), vec![note(2, "b")]);
    }

    #[test]
    fn appended_keeps_insertion_order() {
        let notes = appended(&[note(5, "late")], note(1, "early"));
        let ids: Vec<i64> = notes.iter().map(|note| note.id.0).collect();
        assert_eq!(ids, vec![5, 1]);
    }

    #[test]
    fn generator_uses_clock_and_breaks_ties() {
        let mut ids = NoteIdGenerator::new();
        assert_eq!(ids.next(1_000), NoteId(1_000));
        assert_eq!(ids.next(1_000), NoteId(1_001));
        assert_eq!(ids.next(999), NoteId(1_002));
        assert_eq!(ids.next(5_000), NoteId(5_000));
    }

    #[test]
    fn generator_skips_past_observed_ids() {
        let mut ids = NoteIdGenerator::new();
        ids.observe(&[note(2_000, "a"), note(7_000, "b")]);
        assert_eq!(ids.next(3_000), NoteId(7_001));
    }

    #[test]
    fn json_shape_matches_stored_notes() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let stored = r#"{"id":1704067200000,"date":"2024-01-01T00:00:00.000Z","content":"Dinner","image":null}"#;
        let parsed: Note = serde_json::from_str(stored).unwrap();
        assert_eq!(parsed, Note::new(NoteId(1_704_067_200_000), Some(date), "Dinner", None));

        let value = serde_json::to_value(&parsed).unwrap();
        assert_eq!(value["id"], 1_704_067_200_000_i64);
        assert_eq!(value["date"], "2024-01-01T00:00:00Z");
        assert!(value["image"].is_null());
    }
}
