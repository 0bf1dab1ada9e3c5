//! Value record definitions
//!
//! Defines the (key, value, type) triple the Database stores.

use serde::{Deserialize, Serialize};

use crate::value::{Value, ValueKind};

/// A single stored entry: a key and its typed value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueRecord {
    /// String identifier, unique within a Database
    pub key: String,

    /// The stored payload; its enum discriminant is the type tag
    pub value: Value,
}

impl ValueRecord {
    /// Create a record from a key and anything convertible to a [`Value`]
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The type tag this record's value was stored under
    pub fn kind(&self) -> ValueKind {
        self.value.kind()
    }
}
