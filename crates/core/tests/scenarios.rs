//! End-to-end flows through the public store surface

use fitfizz_core::storage::keys::{BMI_CAP, BMI_KEY};
use fitfizz_core::{bmi, Database, FeedbackEntry, KeyValueStore, MemoryStore, WellnessStore};
use tempfile::tempdir;

#[test]
fn register_login_and_cap_bmi_history() {
    let store = WellnessStore::new(Database::open_in_memory().unwrap());

    assert!(store.register("alice", "secret1").success);
    let duplicate = store.register("alice", "other2");
    assert!(!duplicate.success);
    assert_eq!(duplicate.message, "Username already exists");

    let login = store.login("alice", "secret1");
    assert!(login.success);
    let session = login.session.unwrap();
    assert_eq!(session.username, "alice");

    let owner = session.owner_id();
    let mut records = Vec::new();
    for i in 0..=BMI_CAP {
        let entry = bmi::calculate(50.0 + (i % 100) as f64, 170.0)
            .unwrap()
            .into_entry(format!("day {i}"));
        records.push(store.append_bmi_record(&owner, entry).unwrap());
    }

    let history = store.query_bmi_history(&owner);
    assert_eq!(history.len(), BMI_CAP);
    assert!(history.iter().all(|r| r.id != records[0].id));
    assert_eq!(history[0].id, records[BMI_CAP].id);
}

#[test]
fn query_on_empty_store_is_empty() {
    let store = WellnessStore::new(MemoryStore::new());
    assert!(store.query_report_history("ghost-id").is_empty());
    assert!(store.query_bmi_history("ghost-id").is_empty());
    assert!(store.query_feedback_history("ghost-id").is_empty());
}

#[test]
fn login_requires_exact_pair() {
    let store = WellnessStore::new(MemoryStore::new());
    store.register("alice", "secret1");
    store.register("bob", "secret2");

    assert!(store.login("alice", "secret1").success);
    assert!(store.login("bob", "secret2").success);
    assert!(!store.login("alice", "secret2").success);
    assert!(!store.login("carol", "secret1").success);
}

#[test]
fn logout_is_idempotent() {
    let store = WellnessStore::new(MemoryStore::new());
    store.logout().unwrap();
    assert!(store.current_session().is_none());

    store.register("alice", "secret1");
    store.login("alice", "secret1");
    store.logout().unwrap();
    store.logout().unwrap();
    assert!(store.current_session().is_none());
}

#[test]
fn history_is_partitioned_by_owner() {
    let store = WellnessStore::new(MemoryStore::new());
    let feedback = |msg: &str| FeedbackEntry {
        email: "x@example.com".into(),
        message: msg.into(),
        wants_updates: false,
    };

    store.append_feedback("a", feedback("one")).unwrap();
    store.append_feedback("b", feedback("two")).unwrap();
    let newest = store.append_feedback("a", feedback("three")).unwrap();

    let a = store.query_feedback_history("a");
    assert_eq!(a.len(), 2);
    assert_eq!(a[0], newest);
    assert!(a.iter().all(|r| r.user_id == "a"));
}

#[test]
fn corrupt_collection_is_replaced_by_next_write() {
    let store = WellnessStore::new(MemoryStore::new());
    store.medium().set(BMI_KEY, "\u{0}garbage").unwrap();

    assert!(store.query_bmi_history("a").is_empty());

    let entry = bmi::calculate(70.0, 180.0).unwrap().into_entry("now");
    store.append_bmi_record("a", entry).unwrap();
    assert_eq!(store.query_bmi_history("a").len(), 1);
}

#[test]
fn everything_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fitfizz.db");

    let owner = {
        let store = WellnessStore::new(Database::open(&path).unwrap());
        store.register("alice", "secret1");
        let session = store.login("alice", "secret1").session.unwrap();
        store
            .append_report_record(&session.owner_id(), "Normal panel", Some("blood.pdf"))
            .unwrap();
        session.owner_id()
    };

    let store = WellnessStore::new(Database::open(&path).unwrap());
    let session = store.current_session().unwrap();
    assert_eq!(session.owner_id(), owner);

    let reports = store.query_report_history(&owner);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].file_name, "blood.pdf");
}
