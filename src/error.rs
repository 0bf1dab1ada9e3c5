//! Error types for confkv
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::value::ValueKind;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Unified error type for confkv operations
#[derive(Debug, Error)]
pub enum StoreError {
    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("key not found: {key}")]
    KeyNotFound { key: String },

    #[error("duplicate key: {key}")]
    DuplicateKey { key: String },

    // -------------------------------------------------------------------------
    // Type Errors
    // -------------------------------------------------------------------------
    #[error("type mismatch for key {key:?}: requested {expected}, stored {found}")]
    TypeMismatch {
        key: String,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("value out of range for key {key:?}: stored int {value} does not fit the requested width")]
    IntOutOfRange { key: String, value: i64 },

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Encoding Errors
    // -------------------------------------------------------------------------
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary encoding error: {0}")]
    Binary(#[from] bincode::Error),
}

impl StoreError {
    /// Construct a `TypeMismatch` without a key context (filled in by the Manager)
    pub(crate) fn mismatch(expected: ValueKind, found: ValueKind) -> Self {
        StoreError::TypeMismatch {
            key: String::new(),
            expected,
            found,
        }
    }

    /// Construct an `IntOutOfRange` without a key context (filled in by the Manager)
    pub(crate) fn int_out_of_range(value: i64) -> Self {
        StoreError::IntOutOfRange {
            key: String::new(),
            value,
        }
    }

    /// Attach the key a retrieval error was raised for
    pub(crate) fn with_key(self, key: &str) -> Self {
        match self {
            StoreError::TypeMismatch {
                expected, found, ..
            } => StoreError::TypeMismatch {
                key: key.to_string(),
                expected,
                found,
            },
            StoreError::IntOutOfRange { value, .. } => StoreError::IntOutOfRange {
                key: key.to_string(),
                value,
            },
            other => other,
        }
    }
}
