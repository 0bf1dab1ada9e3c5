//! # confkv
//!
//! A persistent, typed key-value configuration store with:
//! - Typed value records (bool, int, float, string, bytes)
//! - Pluggable file formats (human-readable JSON, compact binary)
//! - Crash-safe saves via temp-file-then-rename promotion
//! - Infallible startup: a missing or corrupt file never blocks construction
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Caller                                │
//! │              (application / confkv-cli)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ get / set / remove / contains / save
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Manager                                │
//! │        (typed accessors, auto-save, safe-save)               │
//! └──────────┬──────────────────────────────┬───────────────────┘
//!            │                              │
//!            ▼                              ▼
//!     ┌─────────────┐               ┌─────────────┐
//!     │  Database   │               │ Serializer  │
//!     │ (records)   │               │ (json/bin)  │
//!     └─────────────┘               └──────┬──────┘
//!                                          │
//!                                          ▼
//!                                   ┌─────────────┐
//!                                   │ Backing file│
//!                                   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod value;

pub mod database;
pub mod serializer;
pub mod manager;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, StoreError};
pub use value::{FromValue, Value, ValueKind};
pub use database::{Database, ValueRecord};
pub use serializer::{BinarySerializer, Format, JsonSerializer, Serializer};
pub use manager::Manager;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of confkv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
