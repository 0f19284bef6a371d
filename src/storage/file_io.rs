//! File I/O utilities with atomic writes
//!
//! Reads are forgiving: a missing, unreadable or malformed data file loads
//! as the default value. The caller still learns which of those happened
//! through `LoadStatus`, it just isn't an error.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::ExpenseError;

/// How a data file was loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// File parsed successfully
    Loaded,
    /// File did not exist
    Missing,
    /// File existed but could not be read or parsed; default used instead
    Malformed(String),
}

impl LoadStatus {
    pub fn is_malformed(&self) -> bool {
        matches!(self, LoadStatus::Malformed(_))
    }
}

/// Read JSON from a file, falling back to the default value on any failure
pub fn read_json_or_default<T, P>(path: P) -> (T, LoadStatus)
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return (T::default(), LoadStatus::Missing);
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            return (
                T::default(),
                LoadStatus::Malformed(format!("Failed to read {}: {}", path.display(), e)),
            )
        }
    };

    match serde_json::from_str(&contents) {
        Ok(data) => (data, LoadStatus::Loaded),
        Err(e) => (
            T::default(),
            LoadStatus::Malformed(format!("Failed to parse {}: {}", path.display(), e)),
        ),
    }
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The output is pretty-printed with two-space indentation. The target is
/// either completely replaced or left untouched, so two invocations racing
/// on the same file never leave a torn file behind (the last rename wins).
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), ExpenseError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ExpenseError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| ExpenseError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| ExpenseError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| ExpenseError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| ExpenseError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ExpenseError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Create a file containing an empty JSON array if it doesn't exist yet
pub fn ensure_json_array<P: AsRef<Path>>(path: P) -> Result<bool, ExpenseError> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(false);
    }
    let empty: Vec<serde_json::Value> = Vec::new();
    write_json_atomic(path, &empty)?;
    Ok(true)
}
