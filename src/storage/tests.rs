#![allow(clippy::unwrap_used)]

use super::*;

// ── SQLite store ──────────────────────────────────────────────

#[test]
fn test_read_missing_key() {
    let store = SqliteStore::open_in_memory().unwrap();
    assert!(store.read("budgie_budgets").unwrap().is_none());
}

#[test]
fn test_write_then_read() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.write("budgie_budgets", "[]").unwrap();
    assert_eq!(store.read("budgie_budgets").unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_write_replaces_value() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.write("budgie_budgets", "first").unwrap();
    store.write("budgie_budgets", "second").unwrap();
    assert_eq!(
        store.read("budgie_budgets").unwrap().as_deref(),
        Some("second")
    );
}

#[test]
fn test_keys_are_independent() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.write("a", "1").unwrap();
    store.write("b", "2").unwrap();
    assert_eq!(store.read("a").unwrap().as_deref(), Some("1"));
    assert_eq!(store.read("b").unwrap().as_deref(), Some("2"));
    assert!(store.read("c").unwrap().is_none());
}

#[test]
fn test_schema_version_set_on_fresh_database() {
    let store = SqliteStore::open_in_memory().unwrap();
    assert_eq!(store.schema_version().unwrap(), schema::CURRENT_VERSION);
}

#[test]
fn test_value_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("budgie.db");

    {
        let mut store = SqliteStore::open(&path).unwrap();
        store.write("budgie_budgets", r#"{"version":1,"budgets":[]}"#).unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(
        store.read("budgie_budgets").unwrap().as_deref(),
        Some(r#"{"version":1,"budgets":[]}"#)
    );
    assert_eq!(store.schema_version().unwrap(), schema::CURRENT_VERSION);
}

const ADD_CHECKSUM: &[(i32, &str)] =
    &[(1, "ALTER TABLE kv_store ADD COLUMN checksum TEXT NOT NULL DEFAULT '';")];

#[test]
fn test_migration_raises_version_and_keeps_data() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.write("budgie_budgets", "[]").unwrap();

    store.migrate_to(2, ADD_CHECKSUM).unwrap();
    assert_eq!(store.schema_version().unwrap(), 2);
    assert_eq!(store.read("budgie_budgets").unwrap().as_deref(), Some("[]"));
    assert!(store
        .columns("kv_store")
        .unwrap()
        .contains(&"checksum".to_string()));

    // Already at 2: the ALTER would fail if it ran again.
    store.migrate_to(2, ADD_CHECKSUM).unwrap();
    assert_eq!(store.schema_version().unwrap(), 2);
}

#[test]
fn test_migration_stops_at_target() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.migrate_to(1, ADD_CHECKSUM).unwrap();
    assert_eq!(store.schema_version().unwrap(), 1);
    assert!(!store
        .columns("kv_store")
        .unwrap()
        .contains(&"checksum".to_string()));
}

#[test]
fn test_failed_migration_rolls_back() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let broken: &[(i32, &str)] = &[(1, "ALTER TABLE missing_table ADD COLUMN x TEXT;")];
    assert!(store.migrate_to(2, broken).is_err());
    assert_eq!(store.schema_version().unwrap(), 1);
}

#[test]
fn test_unicode_value() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.write("k", "₦ naira 日本語").unwrap();
    assert_eq!(store.read("k").unwrap().as_deref(), Some("₦ naira 日本語"));
}

// ── Memory store ──────────────────────────────────────────────

#[test]
fn test_memory_store_counts_writes() {
    let mut store = MemoryStore::default();
    assert!(store.read("k").unwrap().is_none());
    store.write("k", "v").unwrap();
    store.write("k", "w").unwrap();
    assert_eq!(store.writes, 2);
    assert_eq!(store.read("k").unwrap().as_deref(), Some("w"));
}

#[test]
fn test_memory_store_seeded() {
    let store = MemoryStore::with_value("k", "v");
    assert_eq!(store.read("k").unwrap().as_deref(), Some("v"));
    assert_eq!(store.writes, 0);
}
