//! Path management for the expense tracker
//!
//! All data files live in a single data directory.
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory (`--data-dir` or `EXPENSE_TRACKER_DATA_DIR`)
//! 2. The directory containing the running executable

use std::path::{Path, PathBuf};

use crate::error::ExpenseError;

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Directory holding every data file
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Resolve the data directory
    ///
    /// Uses `explicit` when given, otherwise the directory of the current
    /// executable.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable location cannot be determined.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, ExpenseError> {
        let base_dir = match explicit {
            Some(dir) => dir,
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create ExpensePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join("expenses.json")
    }

    /// Get the path to budget.json (monthly budgets)
    pub fn budget_file(&self) -> PathBuf {
        self.base_dir.join("budget.json")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create data directory: {}", e)))
    }
}

/// The directory the running binary lives in
fn resolve_default_path() -> Result<PathBuf, ExpenseError> {
    let exe = std::env::current_exe().map_err(|e| {
        ExpenseError::Config(format!("Could not determine executable location: {}", e))
    })?;

    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| ExpenseError::Config("Executable has no parent directory".into()))
}
