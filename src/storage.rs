//! Persistence for the table
//!
//! The data file is plain text: one entry per line, key and value separated
//! by a single space. There is no quoting or escaping, so keys and values
//! containing ASCII whitespace are not representable; the protocol's
//! tokenization means such entries cannot be produced through normal
//! operation in the first place.
//!
//! Saves go through a sibling temporary file that is renamed over the data
//! file once fully written, so an interrupted save never leaves a truncated
//! file behind.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{FlatKvError, Result};
use crate::table::Table;

/// Handle to the flat data file backing a table
#[derive(Debug, Clone)]
pub struct DataFile {
    path: PathBuf,
}

impl DataFile {
    /// Create a handle for the file at `path` (the file need not exist yet)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    // =========================================================================
    // Load
    // =========================================================================

    /// Load a table from the data file
    ///
    /// Tokens are consumed pairwise in file order and applied as upserts:
    /// a duplicated key keeps its first position and takes the last value.
    /// A trailing token without a partner is discarded. An unreadable file
    /// yields a `Load` error; callers treat that as non-fatal and start
    /// from an empty table.
    pub fn load(&self) -> Result<Table> {
        let mut contents = String::new();
        File::open(&self.path)
            .and_then(|mut file| file.read_to_string(&mut contents))
            .map_err(|e| FlatKvError::Load(format!("{}: {}", self.path.display(), e)))?;

        let mut table = Table::new();
        let mut tokens = contents.split_ascii_whitespace();
        while let Some(key) = tokens.next() {
            match tokens.next() {
                Some(value) => table.upsert(key, value),
                None => break,
            }
        }

        Ok(table)
    }

    // =========================================================================
    // Save
    // =========================================================================

    /// Write the whole table to the data file
    ///
    /// Entries are written in table order, so saving and reloading yields
    /// an identical table. On failure the previous file contents and the
    /// in-memory table are both left untouched, and the partial temporary
    /// file is removed.
    pub fn save(&self, table: &Table) -> Result<()> {
        let tmp_path = self.tmp_path();
        self.write_and_swap(table, &tmp_path).map_err(|e| {
            // A failed save must not leave its partial temp file behind.
            let _ = fs::remove_file(&tmp_path);
            FlatKvError::Save(format!("{}: {}", self.path.display(), e))
        })
    }

    fn write_and_swap(&self, table: &Table, tmp_path: &Path) -> std::io::Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(tmp_path)?;
        let mut writer = BufWriter::new(file);

        for entry in table.entries() {
            writeln!(writer, "{} {}", entry.key, entry.value)?;
        }

        writer.flush()?;
        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;

        fs::rename(tmp_path, &self.path)?;
        Ok(())
    }

    /// Sibling temporary file used for the atomic swap
    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.as_os_str().to_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}
