mod common;

use chrono::{TimeZone, Utc};
use common::ProbeStore;
use lovediary_core::{
    Clock, DiarySession, DraftState, EntryError, GateState, HomeSession, ImagePick, ManualClock,
    MemoryStore, NoteId, NoteLedger, Partner, Profile, ProfileStore, ProfileValidationError,
    Store, NOTES_KEY, PROFILE_KEY,
};

#[test]
fn entry_with_missing_name_is_rejected_without_writes() {
    let store = ProbeStore::new();
    let mut home = HomeSession::open(ProfileStore::new(&store));
    home.set_partner_one("");
    home.set_partner_two("Sam");

    let err = home.enter_diary().unwrap_err();
    assert_eq!(
        err,
        EntryError::MissingNames(ProfileValidationError::MissingPartner(Partner::One))
    );
    assert_eq!(err.user_message(), "Please enter both names.");
    assert_eq!(store.set_count(), 0);
    assert_eq!(store.get(PROFILE_KEY).unwrap(), None);

    home.set_partner_one("   ");
    assert!(home.enter_diary().is_err());
    assert_eq!(store.set_count(), 0);
}

#[test]
fn entry_saves_names_and_hands_off_profile() {
    let store = MemoryStore::new();
    let mut home = HomeSession::open(ProfileStore::new(&store));
    home.set_partner_one("Ann");
    home.set_partner_two("Sam");

    let profile = home.enter_diary().unwrap();
    assert_eq!(profile, Profile::new("Ann", "Sam"));

    let reopened = HomeSession::open(ProfileStore::new(&store));
    assert_eq!(reopened.profile(), &Profile::new("Ann", "Sam"));
}

#[test]
fn entry_proceeds_when_profile_write_fails() {
    let store = ProbeStore::new();
    store.fail_writes(true);
    let mut home = HomeSession::open(ProfileStore::new(&store));
    home.set_partner_one("Ann");
    home.set_partner_two("Sam");

    assert!(home.enter_diary().is_ok());
    assert_eq!(store.set_count(), 1);
}

#[test]
fn home_degrades_to_empty_names_on_read_failure() {
    let store = ProbeStore::new();
    store.inner.set(PROFILE_KEY, r#"{"partnerOne":"Ann","partnerTwo":"Sam"}"#).unwrap();
    store.fail_reads(true);

    let home = HomeSession::open(ProfileStore::new(&store));
    assert_eq!(home.profile(), &Profile::empty());
}

#[test]
fn home_reset_requires_confirmation() {
    let store = MemoryStore::new();
    store.set(PROFILE_KEY, r#"{"partnerOne":"Ann","partnerTwo":"Sam"}"#).unwrap();
    let mut home = HomeSession::open(ProfileStore::new(&store));

    let prompt = *home.request_reset();
    assert_eq!(prompt.message, "Are you sure? This will remove all diary entries.");
    assert!(home.cancel_reset());
    assert!(store.contains(PROFILE_KEY));
    assert_eq!(home.profile().partner_one, "Ann");

    home.request_reset();
    assert!(home.confirm_reset());
    assert!(!store.contains(PROFILE_KEY));
    assert!(home.profile().is_empty());
}

#[test]
fn diary_open_rejects_blank_profile_before_loading() {
    let store = ProbeStore::new();
    store.fail_reads(true);
    let result = DiarySession::open(Profile::new("Ann", " "), NoteLedger::new(&store));
    assert!(matches!(result, Err(EntryError::MissingNames(_))));
}

#[test]
fn diary_flow_add_remove_and_draft_lifecycle() {
    let store = MemoryStore::new();
    let clock = ManualClock::at_millis(1_707_900_000_000);
    let ledger = NoteLedger::with_clock(&store, &clock);
    let mut diary = DiarySession::open(Profile::new("Ann", "Sam"), ledger).unwrap();
    assert_eq!(diary.title(), "Ann's Heart \u{2665} Sam's Heart");
    assert_eq!(diary.draft().state(), DraftState::Empty);

    let valentines = Utc.with_ymd_and_hms(2024, 2, 14, 12, 0, 0).unwrap();
    diary.set_content("Roses");
    diary.pick_date(Some(valentines));
    diary.apply_image_pick(ImagePick::Picked("file:///roses.jpg".to_string()));
    diary.apply_image_pick(ImagePick::Cancelled);
    assert_eq!(diary.draft().state(), DraftState::Editing);

    let first = diary.add_note();
    assert_eq!(first.content, "Roses");
    assert_eq!(first.date, Some(valentines));
    assert_eq!(first.image.as_deref(), Some("file:///roses.jpg"));
    assert_eq!(diary.draft().state(), DraftState::Committed);
    assert_eq!(diary.draft().image(), None);
    assert_eq!(diary.draft().date(), valentines);

    clock.advance_millis(1);
    let second = diary.add_note();
    assert_eq!(second.content, "");
    assert_eq!(diary.notes().len(), 2);

    assert_eq!(diary.remove_note(first.id), 1);
    assert_eq!(diary.remove_note(NoteId(7)), 0);
    assert_eq!(diary.notes(), &[second]);

    let rows = diary.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].content_label, "Note: ");

    let ledger = diary.leave();
    assert_eq!(ledger.len(), 1);
}

#[test]
fn dismissed_date_picker_uses_current_time() {
    let store = MemoryStore::new();
    let clock = ManualClock::at_millis(1_000_000);
    let ledger = NoteLedger::with_clock(&store, &clock);
    let mut diary = DiarySession::open(Profile::new("Ann", "Sam"), ledger).unwrap();

    clock.advance_millis(60_000);
    diary.pick_date(None);
    assert_eq!(diary.draft().date(), clock.now());
}

#[test]
fn diary_reset_only_runs_after_confirm() {
    let store = MemoryStore::new();
    let clock = ManualClock::at_millis(50_000);
    let ledger = NoteLedger::with_clock(&store, &clock);
    let mut diary = DiarySession::open(Profile::new("Ann", "Sam"), ledger).unwrap();
    for content in ["a", "b", "c"] {
        diary.set_content(content);
        diary.add_note();
    }

    assert!(!diary.confirm_reset());
    assert_eq!(diary.notes().len(), 3);

    assert_eq!(diary.request_reset().title, "Remove");
    assert!(diary.cancel_reset());
    assert_eq!(diary.reset_gate().state(), GateState::Cancelled);
    assert_eq!(diary.notes().len(), 3);

    diary.request_reset();
    assert!(diary.confirm_reset());
    assert!(diary.notes().is_empty());
    assert!(!store.contains(NOTES_KEY));
}

#[test]
fn diary_keeps_working_when_storage_fails() {
    let store = ProbeStore::new();
    store.fail_reads(true);
    store.fail_writes(true);
    let clock = ManualClock::at_millis(1);
    let ledger = NoteLedger::with_clock(&store, &clock);
    let mut diary = DiarySession::open(Profile::new("Ann", "Sam"), ledger).unwrap();
    assert!(diary.notes().is_empty());

    diary.set_content("offline");
    let note = diary.add_note();
    assert_eq!(diary.notes(), &[note.clone()]);
    assert_eq!(store.set_count(), 1);
    assert!(!diary.is_synced());

    store.fail_writes(false);
    assert_eq!(diary.remove_note(NoteId(-5)), 0);
    assert!(diary.is_synced());
    assert_eq!(diary.notes(), &[note]);
}
