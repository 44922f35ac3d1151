//! Core logic for the couple's diary.
//! Owns the partner profile, the note collection and how both are persisted.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod storage;

pub use config::{ConfigError, DiaryPaths};
pub use logging::{default_log_level, init_logging, init_logging_in, logging_status, LogLevel};
pub use model::clock::{Clock, ManualClock, SystemClock};
pub use model::confirmation::{
    ConfirmPrompt, GateState, ResetGate, NOTES_RESET_PROMPT, PROFILE_RESET_PROMPT,
};
pub use model::draft::{DraftState, ImagePick, NoteDraft};
pub use model::note::{appended, without, Note, NoteId, NoteIdGenerator};
pub use model::profile::{Partner, Profile, ProfileValidationError, MISSING_NAMES_MESSAGE};
pub use repo::note_ledger::{NoteLedger, WriteThrough, NOTES_KEY};
pub use repo::profile_store::{ProfileStore, PROFILE_KEY};
pub use service::diary_session::DiarySession;
pub use service::diary_view::{diary_title, note_rows, note_rows_in, notes_section_visible, NoteRow};
pub use service::home_session::HomeSession;
pub use service::EntryError;
pub use storage::{FileStore, MemoryStore, SqliteKvStore, Store, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
