//! Serializer module
//!
//! Pluggable encodings for persisting a [`Database`] to a file.
//!
//! A serializer is a stateless strategy: it writes the complete database in
//! one shot and reads it back whole. `serialize` overwrites its target
//! in-place with no atomicity guarantee of its own; the Manager's safe-save
//! protocol is what layers atomicity on top.

mod binary;
mod json;

use std::path::Path;

pub use binary::BinarySerializer;
pub use json::JsonSerializer;

use crate::database::Database;
use crate::error::Result;

/// A strategy that encodes/decodes a Database to/from a file
pub trait Serializer {
    /// Write a complete encoding of `database` to `path`, overwriting any
    /// existing content
    fn serialize(&self, database: &Database, path: &Path) -> Result<()>;

    /// Decode a full Database from the file at `path`
    ///
    /// Fails with `FileNotFound` when the path does not exist.
    fn deserialize(&self, path: &Path) -> Result<Database>;

    /// Decode without propagating errors
    ///
    /// Any failure (missing file, corrupt content, format mismatch) yields
    /// an empty Database and a `false` flag instead of an error.
    fn try_deserialize(&self, path: &Path) -> (Database, bool) {
        match self.deserialize(path) {
            Ok(database) => (database, true),
            Err(_) => (Database::new(), false),
        }
    }
}

// =============================================================================
// Format Selection
// =============================================================================

/// Available file formats, selected at Manager construction time
///
/// The two formats are not cross-compatible: a file written as `Json`
/// cannot be read back as `Binary` and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Human-readable, self-describing, hand-editable JSON
    Json,

    /// Compact binary with inline type descriptors (not human-readable)
    Binary,
}

impl Format {
    /// Construct the serializer implementing this format
    pub fn serializer(self) -> Box<dyn Serializer> {
        match self {
            Format::Json => Box::new(JsonSerializer),
            Format::Binary => Box::new(BinarySerializer),
        }
    }
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "json" => Ok(Format::Json),
            "binary" | "bin" => Ok(Format::Binary),
            other => Err(format!("unknown format: {} (expected json or binary)", other)),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Json => f.write_str("json"),
            Format::Binary => f.write_str("binary"),
        }
    }
}
