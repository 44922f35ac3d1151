use lovediary_core::db::migrations::{latest_version, schema_version};
use lovediary_core::db::{open_db, open_db_in_memory, DbError};
use lovediary_core::{SqliteKvStore, Store, StoreError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_kv_table() {
    let conn = open_db_in_memory().unwrap();
    assert_eq!(schema_version(&conn).unwrap(), latest_version());

    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv_entries'
            );",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1);
}

#[test]
fn reopening_database_keeps_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lovediary.sqlite3");

    let store = SqliteKvStore::open(&path).unwrap();
    store.set("notes", "[]").unwrap();
    drop(store);

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn).unwrap(), latest_version());
    drop(conn);

    let store = SqliteKvStore::open(&path).unwrap();
    assert_eq!(store.get("notes").unwrap().as_deref(), Some("[]"));
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = SqliteKvStore::open(&path).err().expect("store open must fail");
    assert!(matches!(err, StoreError::Db(_)));
}
