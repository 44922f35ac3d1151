//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the profile and diary use-cases to Dart via FRB.
//! - Translate core types into flat, stable response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Profile calls go through one `HomeSession`; note calls go through the
//!   `DiarySession` opened by `diary_open` and are rejected without one.
//! - Calls are serialized by the state lock, so parallel host threads never
//!   interleave reads and snapshot writes.
//! - Storage failures never fail a call; they are logged and reported via
//!   `persisted = false`. The open session's notes stay authoritative.

use chrono::{TimeZone, Utc};
use lovediary_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, note_rows,
    ping as ping_inner, DiaryPaths, DiarySession, FileStore, HomeSession, ImagePick, Note,
    NoteId, SqliteKvStore,
};
use log::{info, warn};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

static DIARY_PATHS: OnceLock<DiaryPaths> = OnceLock::new();
static STATE: Mutex<ScreenState> = Mutex::new(ScreenState {
    home: None,
    diary: None,
});

const NOT_CONFIGURED: &str = "storage is not configured; call configure(data_dir) first";
const NO_DIARY: &str = "no diary is open; call diary_open(partner_one, partner_two) first";

/// Live screen sessions shared by every FFI call.
struct ScreenState {
    home: Option<HomeSession<FileStore>>,
    diary: Option<DiarySession<SqliteKvStore>>,
}

impl ScreenState {
    fn home(&mut self, paths: &DiaryPaths) -> &mut HomeSession<FileStore> {
        self.home
            .get_or_insert_with(|| HomeSession::open(paths.profile_store()))
    }
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Sets the app document directory every store lives under.
///
/// # FFI contract
/// - `data_dir` must be absolute.
/// - Idempotent for the same directory; a different directory is rejected.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn configure(data_dir: String) -> String {
    let paths = match DiaryPaths::new(data_dir.as_str()) {
        Ok(paths) => paths,
        Err(err) => return err.to_string(),
    };
    let active = DIARY_PATHS.get_or_init(|| paths.clone());
    if *active == paths {
        String::new()
    } else {
        format!(
            "storage already configured at `{}`; refusing to switch to `{}`",
            active.data_dir().display(),
            paths.data_dir().display()
        )
    }
}

/// Saved partner names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileResponse {
    pub partner_one: String,
    pub partner_two: String,
    /// Empty on success; diagnostics otherwise.
    pub message: String,
}

/// Result of a profile or bulk action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the action was accepted.
    pub ok: bool,
    /// User-facing text when rejected, diagnostics otherwise.
    pub message: String,
}

impl ActionResponse {
    fn accepted(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn rejected(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// One note as the list renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    pub id: i64,
    pub date_epoch_ms: Option<i64>,
    pub date_label: String,
    pub content: String,
    pub content_label: String,
    pub image: Option<String>,
    pub striped: bool,
}

/// Current note list in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesResponse {
    /// `"{one}'s Heart ♥ {two}'s Heart"`; empty without an open diary.
    pub title: String,
    pub items: Vec<NoteItem>,
    pub message: String,
}

/// Result of a single-note mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteActionResponse {
    pub ok: bool,
    /// Created note id for `note_add`.
    pub note_id: Option<i64>,
    /// Number of notes dropped for `note_remove`.
    pub removed: u32,
    /// Whether the snapshot reached storage.
    pub persisted: bool,
    pub message: String,
}

impl NoteActionResponse {
    fn rejected(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            note_id: None,
            removed: 0,
            persisted: false,
            message: message.into(),
        }
    }
}

/// Reloads the saved partner names; empty names when nothing is saved.
///
/// Unsaved edits from an earlier `diary_open` rejection are dropped.
#[flutter_rust_bridge::frb(sync)]
pub fn profile_load() -> ProfileResponse {
    let Some(paths) = DIARY_PATHS.get() else {
        return ProfileResponse {
            partner_one: String::new(),
            partner_two: String::new(),
            message: NOT_CONFIGURED.to_string(),
        };
    };
    let mut state = state();
    let home = state
        .home
        .insert(HomeSession::open(paths.profile_store()));
    let profile = home.profile();
    ProfileResponse {
        partner_one: profile.partner_one.clone(),
        partner_two: profile.partner_two.clone(),
        message: String::new(),
    }
}

/// Validates and saves the names, then opens the diary for them.
///
/// # FFI contract
/// - `ok = false` with the alert text when a name is blank; nothing is
///   written and no diary is opened.
/// - A failed profile save still opens the diary.
/// - Replaces any diary that is already open.
#[flutter_rust_bridge::frb(sync)]
pub fn diary_open(partner_one: String, partner_two: String) -> ActionResponse {
    let Some(paths) = DIARY_PATHS.get() else {
        return ActionResponse::rejected(NOT_CONFIGURED);
    };
    let mut state = state();
    let home = state.home(paths);
    home.set_partner_one(partner_one);
    home.set_partner_two(partner_two);
    let profile = match home.enter_diary() {
        Ok(profile) => profile,
        Err(err) => return ActionResponse::rejected(err.user_message()),
    };

    let ledger = match paths.note_ledger() {
        Ok(ledger) => ledger,
        Err(err) => {
            warn!(
                "event=diary_open module=ffi status=error error_code={}",
                err.code()
            );
            return ActionResponse::rejected(format!("note store open failed: {err}"));
        }
    };
    match DiarySession::open(profile, ledger) {
        Ok(session) => {
            state.diary = Some(session);
            ActionResponse::accepted("")
        }
        Err(err) => ActionResponse::rejected(err.user_message()),
    }
}

/// Closes the open diary ("go back"). `ok = false` when none was open.
#[flutter_rust_bridge::frb(sync)]
pub fn diary_leave() -> ActionResponse {
    match state().diary.take() {
        Some(session) => {
            let _ledger = session.leave();
            ActionResponse::accepted("")
        }
        None => ActionResponse::rejected(NO_DIARY),
    }
}

/// Deletes the profile record. The host shows the confirmation prompt first.
///
/// Names are cleared only when the delete succeeds.
#[flutter_rust_bridge::frb(sync)]
pub fn profile_reset() -> ActionResponse {
    let Some(paths) = DIARY_PATHS.get() else {
        return ActionResponse::rejected(NOT_CONFIGURED);
    };
    let mut state = state();
    let home = state.home(paths);
    home.request_reset();
    if home.confirm_reset() {
        ActionResponse::accepted("")
    } else {
        ActionResponse::rejected("profile_reset failed; names kept")
    }
}

/// Lists the open diary's notes in insertion order with display labels.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_list() -> NotesResponse {
    let state = state();
    match state.diary.as_ref() {
        Some(diary) => NotesResponse {
            title: diary.title(),
            items: to_note_items(diary.notes()),
            message: String::new(),
        },
        None => NotesResponse {
            title: String::new(),
            items: Vec::new(),
            message: NO_DIARY.to_string(),
        },
    }
}

/// Commits a note to the open diary and writes the full snapshot.
///
/// Input semantics:
/// - `date_epoch_ms = None` keeps the draft date: the diary open time, or
///   the date picked for the previous note. An out-of-range value counts as
///   a dismissed picker and uses now.
/// - `image_uri = None` means no image was picked.
#[flutter_rust_bridge::frb(sync)]
pub fn note_add(
    content: String,
    date_epoch_ms: Option<i64>,
    image_uri: Option<String>,
) -> NoteActionResponse {
    let mut state = state();
    let Some(diary) = state.diary.as_mut() else {
        return NoteActionResponse::rejected(NO_DIARY);
    };
    diary.set_content(content);
    if let Some(ms) = date_epoch_ms {
        diary.pick_date(Utc.timestamp_millis_opt(ms).single());
    }
    if let Some(uri) = image_uri {
        diary.apply_image_pick(ImagePick::Picked(uri));
    }
    let note = diary.add_note();
    let persisted = diary.is_synced();
    info!(
        "event=note_add module=ffi status=ok note_id={} persisted={persisted}",
        note.id
    );
    NoteActionResponse {
        ok: true,
        note_id: Some(note.id.as_millis()),
        removed: 0,
        persisted,
        message: unsaved_message(persisted),
    }
}

/// Removes every note with `note_id` and writes the full snapshot.
#[flutter_rust_bridge::frb(sync)]
pub fn note_remove(note_id: i64) -> NoteActionResponse {
    let mut state = state();
    let Some(diary) = state.diary.as_mut() else {
        return NoteActionResponse::rejected(NO_DIARY);
    };
    let removed = diary.remove_note(NoteId(note_id));
    let persisted = diary.is_synced();
    NoteActionResponse {
        ok: true,
        note_id: Some(note_id),
        removed: u32::try_from(removed).unwrap_or(u32::MAX),
        persisted,
        message: unsaved_message(persisted),
    }
}

/// Deletes every note. The host shows the confirmation prompt first.
///
/// Notes are cleared only when the delete succeeds.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_reset() -> ActionResponse {
    let mut state = state();
    let Some(diary) = state.diary.as_mut() else {
        return ActionResponse::rejected(NO_DIARY);
    };
    diary.request_reset();
    if diary.confirm_reset() {
        ActionResponse::accepted("")
    } else {
        ActionResponse::rejected("notes_reset failed; notes kept")
    }
}

fn state() -> MutexGuard<'static, ScreenState> {
    STATE.lock().unwrap_or_else(PoisonError::into_inner)
}

fn unsaved_message(persisted: bool) -> String {
    if persisted {
        String::new()
    } else {
        "change kept in memory but not saved".to_string()
    }
}

fn to_note_items(notes: &[Note]) -> Vec<NoteItem> {
    notes
        .iter()
        .zip(note_rows(notes))
        .map(|(note, row)| NoteItem {
            id: note.id.as_millis(),
            date_epoch_ms: note.date.map(|date| date.timestamp_millis()),
            date_label: row.date_label,
            content: note.content.clone(),
            content_label: row.content_label,
            image: row.image,
            striped: row.striped,
        })
        .collect()
}
