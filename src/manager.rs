//! Manager Module
//!
//! The public entry point coordinating the Database, the chosen Serializer,
//! and the backing file.
//!
//! ## Responsibilities
//! - Load existing state on construction (or start empty)
//! - Mediate typed get/set/remove/contains
//! - Persist after every mutation when auto-save is on
//! - Guarantee crash-safe saves via temp-file promotion

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::database::{Database, ValueRecord};
use crate::error::Result;
use crate::serializer::{Format, Serializer};
use crate::value::{FromValue, Value};

/// The stateful façade over one configuration store
///
/// A Manager binds exactly one backing file, one Database, and one
/// Serializer for its lifetime. It is single-threaded by contract: no
/// locking is performed, and concurrent use requires external
/// synchronization.
pub struct Manager {
    /// Backing file path
    path: PathBuf,

    /// In-memory state; mutated only through this Manager
    database: Database,

    /// Stateless encoding strategy chosen at construction
    serializer: Box<dyn Serializer>,

    /// Persist after every mutation
    auto_save: bool,

    /// True when an existing file failed to decode and was discarded
    recovered_empty: bool,
}

impl Manager {
    /// Suffix for the temporary file used by the safe-save protocol
    const TMP_SUFFIX: &'static str = ".tmp";

    /// Create a manager bound to `path`
    ///
    /// If a file exists at `path` it is decoded into the Database. A file
    /// that fails to decode (truncated, corrupt, wrong format) is treated as
    /// no prior state: the Manager starts empty, logs a warning, and flags
    /// [`recovered_empty`](Self::recovered_empty). Construction never fails.
    pub fn new(path: impl Into<PathBuf>, serializer: Box<dyn Serializer>, auto_save: bool) -> Self {
        let path = path.into();

        let (database, recovered_empty) = if path.exists() {
            let (database, ok) = serializer.try_deserialize(&path);
            if !ok {
                warn!(
                    path = %path.display(),
                    "existing store file failed to decode; starting empty"
                );
            }
            (database, !ok)
        } else {
            (Database::new(), false)
        };

        Self {
            path,
            database,
            serializer,
            auto_save,
            recovered_empty,
        }
    }

    /// Convenience constructor: pick a [`Format`], auto-save enabled
    pub fn open(path: impl Into<PathBuf>, format: Format) -> Self {
        Self::new(path, format.serializer(), true)
    }

    // =========================================================================
    // Typed Accessors
    // =========================================================================

    /// Get the value stored under `key`, decoded as `T`
    ///
    /// An absent key yields `T::default()` rather than an error; use
    /// [`contains`](Self::contains) to tell the two cases apart. A present
    /// key holding an incompatible type fails with `TypeMismatch`.
    pub fn get<T: FromValue + Default>(&self, key: &str) -> Result<T> {
        match self.database.get(key) {
            Ok(record) => T::from_value(&record.value).map_err(|e| e.with_key(key)),
            Err(_) => Ok(T::default()),
        }
    }

    /// Like [`get`](Self::get), but an absent key yields `default` instead
    /// of `T::default()`
    pub fn get_or<T: FromValue>(&self, key: &str, default: T) -> Result<T> {
        match self.database.get(key) {
            Ok(record) => T::from_value(&record.value).map_err(|e| e.with_key(key)),
            Err(_) => Ok(default),
        }
    }

    /// Store `value` under `key`, replacing any previous entry
    ///
    /// Re-setting an existing key never fails (last write wins). Persists
    /// immediately when auto-save is on.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<()> {
        // Overwrite is unconditional here; DuplicateKey cannot surface.
        self.database.set(ValueRecord::new(key, value), true)?;

        if self.auto_save {
            self.save()?;
        }
        Ok(())
    }

    /// Delete the entry under `key` (no-op when absent)
    ///
    /// Persists immediately when auto-save is on.
    pub fn remove(&mut self, key: &str) -> Result<()> {
        self.database.remove(key);

        if self.auto_save {
            self.save()?;
        }
        Ok(())
    }

    /// Check whether `key` exists
    pub fn contains(&self, key: &str) -> bool {
        self.database.contains(key)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Persist the whole Database, crash-safely
    ///
    /// Steps:
    /// 1. Serialize to `<path>.tmp`
    /// 2. On success: delete any old file at `path`, rename tmp into place
    /// 3. On failure at either step: best-effort delete the tmp file,
    ///    propagate the error; the last-known-good file is untouched
    ///
    /// A save that dies mid-write therefore never corrupts the previous
    /// file; the rename is the atomic commit point.
    pub fn save(&self) -> Result<()> {
        let tmp_path = self.tmp_path();

        if let Err(e) = self.serializer.serialize(&self.database, &tmp_path) {
            // The tmp file may be partial; the real file is still intact.
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }

        if let Err(e) = self.promote(&tmp_path) {
            // Promotion failed; the tmp file is whole but orphaned.
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }

        debug!(
            path = %self.path.display(),
            entries = self.database.len(),
            "store saved"
        );
        Ok(())
    }

    /// Commit a fully written tmp file: drop the old target, rename into place
    fn promote(&self, tmp_path: &Path) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        fs::rename(tmp_path, &self.path)?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut os = self.path.clone().into_os_string();
        os.push(Self::TMP_SUFFIX);
        PathBuf::from(os)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether mutations persist immediately
    pub fn auto_save(&self) -> bool {
        self.auto_save
    }

    /// True when construction found a file it could not decode and fell
    /// back to an empty Database
    pub fn recovered_empty(&self) -> bool {
        self.recovered_empty
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.database.len()
    }

    /// True when the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.database.is_empty()
    }

    /// Read-only view of the underlying Database
    pub fn database(&self) -> &Database {
        &self.database
    }
}
