//! JSON serializer (structured text)
//!
//! Human-readable, self-describing encoding. Value type tags appear as JSON
//! field tags, so the file survives manual inspection and careful editing.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::database::Database;
use crate::error::{Result, StoreError};

use super::Serializer;

/// Writes the database as pretty-printed JSON
pub struct JsonSerializer;

impl Serializer for JsonSerializer {
    fn serialize(&self, database: &Database, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, database)?;
        writer.flush()?;
        Ok(())
    }

    fn deserialize(&self, path: &Path) -> Result<Database> {
        if !path.exists() {
            return Err(StoreError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let database = serde_json::from_reader(reader)?;
        Ok(database)
    }
}
