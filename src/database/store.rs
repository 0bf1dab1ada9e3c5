//! Database implementation
//!
//! Insertion-ordered record collection with linear-scan lookup.
//!
//! Configuration stores hold tens to low hundreds of entries, so a `Vec`
//! scan beats an indexed map on simplicity with no observable cost at that
//! scale. Order is insertion order and is not preserved across a
//! remove-then-reinsert.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};
use super::ValueRecord;

/// The full set of value records for one configuration store
///
/// Invariant: no two records share a key. `set` is the only insert path and
/// upholds this by removing any existing record before appending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Database {
    records: Vec<ValueRecord>,
}

impl Database {
    /// Create an empty database
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a record by exact (case-sensitive) key
    pub fn get(&self, key: &str) -> Result<&ValueRecord> {
        self.records
            .iter()
            .find(|r| r.key == key)
            .ok_or_else(|| StoreError::KeyNotFound {
                key: key.to_string(),
            })
    }

    /// Check whether a record with this key exists
    pub fn contains(&self, key: &str) -> bool {
        self.records.iter().any(|r| r.key == key)
    }

    /// Insert a record
    ///
    /// With `overwrite` set, an existing record under the same key is removed
    /// first and the new one appended (last write wins). Without it, an
    /// existing key fails with `DuplicateKey` and the original is untouched.
    pub fn set(&mut self, record: ValueRecord, overwrite: bool) -> Result<()> {
        if self.contains(&record.key) {
            if !overwrite {
                return Err(StoreError::DuplicateKey { key: record.key });
            }
            self.remove(&record.key);
        }

        self.records.push(record);
        Ok(())
    }

    /// Remove all records matching `key`, returning how many were removed
    ///
    /// Idempotent: removing an absent key is a no-op, not an error.
    pub fn remove(&mut self, key: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.key != key);
        before - self.records.len()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the database holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &ValueRecord> {
        self.records.iter()
    }
}
