//! Audit logger for the append-only audit log
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};

use super::entry::AuditEntry;

/// Handles writing audit entries to the audit log file (JSONL)
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry to the log
    pub fn log(&self, entry: &AuditEntry) -> ExpenseResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| ExpenseError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| ExpenseError::Io(format!("Failed to write audit entry: {}", e)))?;

        file.flush()
            .map_err(|e| ExpenseError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// Read all entries, oldest first
    pub fn read_all(&self) -> ExpenseResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to open audit log: {}", e)))?;

        let mut entries = Vec::new();
        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                ExpenseError::Io(format!("Failed to read audit log line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: AuditEntry = serde_json::from_str(&line).map_err(|e| {
                ExpenseError::Json(format!(
                    "Failed to parse audit entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> ExpenseResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    /// Check if the audit log file exists
    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    /// Get the path to the audit log file
    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{EntityType, Operation};
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (logger, temp_dir)
    }

    fn expense_entry(id: u64) -> AuditEntry {
        AuditEntry::create(
            EntityType::Expense,
            id.to_string(),
            Some(format!("Expense {}", id)),
            &json!({"id": id}),
        )
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        logger.log(&expense_entry(1)).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_type, EntityType::Expense);
    }

    #[test]
    fn test_one_line_per_entry() {
        let (logger, temp) = create_test_logger();
        logger.log(&expense_entry(1)).unwrap();
        logger.log(&expense_entry(2)).unwrap();

        let contents = std::fs::read_to_string(temp.path().join("audit.log")).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();
        for i in 0..10 {
            logger.log(&expense_entry(i)).unwrap();
        }

        let recent = logger.read_recent(3).unwrap();
        let ids: Vec<_> = recent.iter().map(|e| e.entity_id.as_str()).collect();
        assert_eq!(ids, vec!["7", "8", "9"]);

        assert_eq!(logger.read_recent(50).unwrap().len(), 10);
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();
        assert!(!logger.exists());
        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_line_is_an_error() {
        let (logger, temp) = create_test_logger();
        logger.log(&expense_entry(1)).unwrap();
        std::fs::OpenOptions::new()
            .append(true)
            .open(temp.path().join("audit.log"))
            .unwrap()
            .write_all(b"{oops\n")
            .unwrap();

        let err = logger.read_all().unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
