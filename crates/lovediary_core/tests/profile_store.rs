use lovediary_core::{FileStore, Profile, ProfileStore, PROFILE_KEY};

#[test]
fn saved_profile_loads_back_exactly() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProfileStore::new(FileStore::new(dir.path()));

    store.save(&Profile::new("Ann", "Sam")).unwrap();
    assert_eq!(store.load().unwrap(), Profile::new("Ann", "Sam"));

    let raw = std::fs::read_to_string(dir.path().join(PROFILE_KEY)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["partnerOne"], "Ann");
    assert_eq!(value["partnerTwo"], "Sam");
}

#[test]
fn save_overwrites_whole_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProfileStore::new(FileStore::new(dir.path()));

    store.save(&Profile::new("Ann", "Sam")).unwrap();
    store.save(&Profile::new("Kim", "")).unwrap();
    assert_eq!(store.load().unwrap(), Profile::new("Kim", ""));
}

#[test]
fn reset_deletes_file_and_load_yields_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProfileStore::new(FileStore::new(dir.path()));
    store.save(&Profile::new("Ann", "Sam")).unwrap();

    store.reset().unwrap();
    assert!(!dir.path().join(PROFILE_KEY).exists());
    assert_eq!(store.load().unwrap(), Profile::empty());

    store.reset().unwrap();
}

#[test]
fn legacy_record_from_the_mobile_app_loads() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(PROFILE_KEY),
        r#"{"partner1":"Ann","partner2":"Sam"}"#,
    )
    .unwrap();

    let store = ProfileStore::new(FileStore::new(dir.path()));
    assert_eq!(store.load().unwrap(), Profile::new("Ann", "Sam"));
}
