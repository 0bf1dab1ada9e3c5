//! Binary serializer (compact)
//!
//! Not human-readable. Type descriptors travel inline as enum discriminants,
//! so the decoder rebuilds typed records without external schema knowledge.
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ Header (6 bytes)                            │
//! │   Magic: "CKVF" (4) | Version: u16 (2)      │
//! ├─────────────────────────────────────────────┤
//! │ Body (variable)                             │
//! │   bincode-encoded Database                  │
//! └─────────────────────────────────────────────┘
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::database::Database;
use crate::error::{Result, StoreError};

use super::Serializer;

/// Magic bytes identifying a confkv binary file
const MAGIC: &[u8; 4] = b"CKVF";

/// Current binary format version
const VERSION: u16 = 1;

/// Writes the database as a bincode body behind a magic/version header
pub struct BinarySerializer;

impl Serializer for BinarySerializer {
    fn serialize(&self, database: &Database, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        writer.write_all(MAGIC)?;
        writer.write_all(&VERSION.to_le_bytes())?;
        bincode::serialize_into(&mut writer, database)?;

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
        let mut reader = BufReader::new(file);

        let mut header = [0u8; 6];
        reader.read_exact(&mut header)?;

        if &header[0..4] != MAGIC {
            return Err(bincode::Error::from(bincode::ErrorKind::Custom(format!(
                "invalid magic: expected CKVF, got {:?}",
                &header[0..4]
            )))
            .into());
        }

        let version = u16::from_le_bytes([header[4], header[5]]);
        if version != VERSION {
            return Err(bincode::Error::from(bincode::ErrorKind::Custom(format!(
                "unsupported format version: {}",
                version
            )))
            .into());
        }

        let database = bincode::deserialize_from(&mut reader)?;
        Ok(database)
    }
}
