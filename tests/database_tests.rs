//! Tests for the Database
//!
//! These tests verify:
//! - Exact, case-sensitive key lookup
//! - Overwrite and duplicate-rejection semantics
//! - Idempotent removal
//! - Insertion-order iteration

use confkv::{Database, StoreError, Value, ValueKind, ValueRecord};

// =============================================================================
// Helper Functions
// =============================================================================

fn database_with(entries: &[(&str, i64)]) -> Database {
    let mut db = Database::new();
    for (key, value) in entries {
        db.set(ValueRecord::new(*key, *value), false).unwrap();
    }
    db
}

// =============================================================================
// Lookup Tests
// =============================================================================

#[test]
fn test_get_returns_matching_record() {
    let db = database_with(&[("alpha", 1), ("beta", 2)]);

    let record = db.get("beta").unwrap();
    assert_eq!(record.key, "beta");
    assert_eq!(record.value, Value::Int(2));
    assert_eq!(record.kind(), ValueKind::Int);
}

#[test]
fn test_get_missing_key_fails() {
    let db = database_with(&[("alpha", 1)]);

    let err = db.get("gamma").unwrap_err();
    assert!(matches!(err, StoreError::KeyNotFound { .. }));
}

#[test]
fn test_lookup_is_case_sensitive() {
    let db = database_with(&[("Alpha", 1)]);

    assert!(db.contains("Alpha"));
    assert!(!db.contains("alpha"));
    assert!(db.get("alpha").is_err());
}

#[test]
fn test_contains_never_fails_on_empty() {
    let db = Database::new();
    assert!(!db.contains("anything"));
}

// =============================================================================
// Insertion Tests
// =============================================================================

#[test]
fn test_set_with_overwrite_replaces_value() {
    let mut db = Database::new();
    db.set(ValueRecord::new("key", "first"), true).unwrap();
    db.set(ValueRecord::new("key", "second"), true).unwrap();

    assert_eq!(db.len(), 1);
    assert_eq!(db.get("key").unwrap().value, Value::from("second"));
}

#[test]
fn test_set_without_overwrite_rejects_duplicate() {
    let mut db = Database::new();
    db.set(ValueRecord::new("key", "original"), false).unwrap();

    let err = db.set(ValueRecord::new("key", "intruder"), false).unwrap_err();
    assert!(matches!(err, StoreError::DuplicateKey { .. }));

    // Original value is untouched
    assert_eq!(db.len(), 1);
    assert_eq!(db.get("key").unwrap().value, Value::from("original"));
}

#[test]
fn test_overwrite_can_change_value_type() {
    let mut db = Database::new();
    db.set(ValueRecord::new("key", 5i64), true).unwrap();
    db.set(ValueRecord::new("key", "five"), true).unwrap();

    assert_eq!(db.get("key").unwrap().kind(), ValueKind::Text);
}

// =============================================================================
// Removal Tests
// =============================================================================

#[test]
fn test_remove_deletes_record() {
    let mut db = database_with(&[("alpha", 1), ("beta", 2)]);

    assert_eq!(db.remove("alpha"), 1);
    assert!(!db.contains("alpha"));
    assert_eq!(db.len(), 1);
}

#[test]
fn test_remove_missing_key_is_noop() {
    let mut db = database_with(&[("alpha", 1)]);

    assert_eq!(db.remove("gamma"), 0);
    assert_eq!(db.len(), 1);
    assert!(db.contains("alpha"));
}

#[test]
fn test_remove_on_empty_database() {
    let mut db = Database::new();
    assert_eq!(db.remove("anything"), 0);
    assert!(db.is_empty());
}

// =============================================================================
// Iteration Tests
// =============================================================================

#[test]
fn test_iter_preserves_insertion_order() {
    let db = database_with(&[("c", 3), ("a", 1), ("b", 2)]);

    let keys: Vec<&str> = db.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["c", "a", "b"]);
}

#[test]
fn test_mixed_value_types() {
    let mut db = Database::new();
    db.set(ValueRecord::new("flag", true), false).unwrap();
    db.set(ValueRecord::new("count", 5i64), false).unwrap();
    db.set(ValueRecord::new("ratio", 0.5f64), false).unwrap();
    db.set(ValueRecord::new("name", "confkv"), false).unwrap();
    db.set(ValueRecord::new("blob", vec![0u8, 1, 2]), false).unwrap();

    assert_eq!(db.len(), 5);
    assert_eq!(db.get("flag").unwrap().kind(), ValueKind::Bool);
    assert_eq!(db.get("blob").unwrap().kind(), ValueKind::Bytes);
}
