//! Monthly budget repository for JSON storage
//!
//! Manages loading and saving budgets to budget.json. At most one budget
//! exists per month; setting a month again overwrites it without moving it.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::ExpenseError;
use crate::models::{Budget, Money, Month};

use super::file_io::{read_json_or_default, write_json_atomic, LoadStatus};

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    budgets: RwLock<Vec<Budget>>,
    status: RwLock<LoadStatus>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: RwLock::new(Vec::new()),
            status: RwLock::new(LoadStatus::Missing),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Budget>>, ExpenseError> {
        self.budgets
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Budget>>, ExpenseError> {
        self.budgets
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load budgets from disk
    ///
    /// A missing or malformed file loads as no budgets at all.
    pub fn load(&self) -> Result<(), ExpenseError> {
        let (budgets, status): (Vec<Budget>, _) = read_json_or_default(&self.path);

        *self.write()? = budgets;
        *self
            .status
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))? =
            status;

        Ok(())
    }

    /// How the last `load` went
    pub fn load_status(&self) -> LoadStatus {
        self.status
            .read()
            .map(|s| s.clone())
            .unwrap_or(LoadStatus::Missing)
    }

    /// Save budgets to disk, replacing the file
    pub fn save(&self) -> Result<(), ExpenseError> {
        let budgets = self.read()?;
        write_json_atomic(&self.path, &*budgets)
    }

    /// Get the budget for a month
    pub fn get(&self, month: Month) -> Result<Option<Budget>, ExpenseError> {
        Ok(self.read()?.iter().find(|b| b.applies_to(month)).cloned())
    }

    /// Set the budget for a month
    ///
    /// Returns the previous budget if one was replaced.
    pub fn upsert(&self, month: Month, amount: Money) -> Result<Option<Budget>, ExpenseError> {
        let mut budgets = self.write()?;

        match budgets.iter_mut().find(|b| b.applies_to(month)) {
            Some(existing) => {
                let previous = existing.clone();
                existing.amount = amount;
                Ok(Some(previous))
            }
            None => {
                budgets.push(Budget::new(month, amount));
                Ok(None)
            }
        }
    }

    /// Get all budgets in file order
    pub fn get_all(&self) -> Result<Vec<Budget>, ExpenseError> {
        Ok(self.read()?.clone())
    }

    /// Count budgets
    pub fn count(&self) -> Result<usize, ExpenseError> {
        Ok(self.read()?.len())
    }
}
