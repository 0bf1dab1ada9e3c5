//! Typed values
//!
//! A `Value` carries one stored payload together with its runtime type tag:
//! the enum discriminant is the type descriptor. The compact binary format
//! persists it inline, and the JSON format writes it as a self-describing
//! field tag.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// A stored value with its type carried by the enum discriminant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Boolean flag
    Bool(bool),

    /// Signed 64-bit integer (all integer sets are widened to this)
    Int(i64),

    /// 64-bit float
    Float(f64),

    /// UTF-8 string
    Text(String),

    /// Raw bytes
    Bytes(Vec<u8>),
}

/// Type tags for stored values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    Text,
    Bytes,
}

impl Value {
    /// Get the type tag this value was stored under
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
            Value::Bytes(_) => ValueKind::Bytes,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Text => "text",
            ValueKind::Bytes => "bytes",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => f.write_str(s),
            Value::Bytes(b) => write!(f, "<{} bytes>", b.len()),
        }
    }
}

// =============================================================================
// Checked Extraction
// =============================================================================

/// Checked conversion out of a stored [`Value`]
///
/// Retrieval validates the stored type tag against the requested type and
/// fails with `TypeMismatch` instead of casting blindly.
pub trait FromValue: Sized {
    /// Extract `Self` from a stored value, or fail with `TypeMismatch`
    fn from_value(value: &Value) -> Result<Self>;
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(StoreError::mismatch(ValueKind::Bool, other.kind())),
        }
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Int(i) => Ok(*i),
            other => Err(StoreError::mismatch(ValueKind::Int, other.kind())),
        }
    }
}

impl FromValue for i32 {
    /// Succeeds only when the stored integer fits in an `i32`
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Int(i) => i32::try_from(*i).map_err(|_| StoreError::int_out_of_range(*i)),
            other => Err(StoreError::mismatch(ValueKind::Int, other.kind())),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Float(x) => Ok(*x),
            other => Err(StoreError::mismatch(ValueKind::Float, other.kind())),
        }
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Text(s) => Ok(s.clone()),
            other => Err(StoreError::mismatch(ValueKind::Text, other.kind())),
        }
    }
}

impl FromValue for Vec<u8> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Bytes(b) => Ok(b.clone()),
            other => Err(StoreError::mismatch(ValueKind::Bytes, other.kind())),
        }
    }
}

// =============================================================================
// Conversions Into Value
// =============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}
