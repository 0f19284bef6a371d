//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json. The file is a bare
//! JSON array and file order is insertion order, which the listing relies
//! on to break ties between expenses of the same day.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::ExpenseError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json_or_default, write_json_atomic, LoadStatus};

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Vec<Expense>>,
    status: RwLock<LoadStatus>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
            status: RwLock::new(LoadStatus::Missing),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Expense>>, ExpenseError> {
        self.data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Expense>>, ExpenseError> {
        self.data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load expenses from disk
    ///
    /// A missing or malformed file loads as an empty ledger.
    pub fn load(&self) -> Result<(), ExpenseError> {
        let (expenses, status): (Vec<Expense>, _) = read_json_or_default(&self.path);

        *self.write()? = expenses;
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

    /// Save all expenses to disk, replacing the file
    pub fn save(&self) -> Result<(), ExpenseError> {
        let expenses = self.read()?;
        write_json_atomic(&self.path, &*expenses)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, ExpenseError> {
        Ok(self.read()?.iter().find(|e| e.id == id).cloned())
    }

    /// Get all expenses in insertion order
    pub fn get_all(&self) -> Result<Vec<Expense>, ExpenseError> {
        Ok(self.read()?.clone())
    }

    /// The id the next inserted expense should get
    pub fn next_id(&self) -> Result<ExpenseId, ExpenseError> {
        Ok(ExpenseId::next_after(self.read()?.iter().map(|e| e.id)))
    }

    /// Append a new expense or replace the one with the same ID in place
    pub fn upsert(&self, expense: Expense) -> Result<(), ExpenseError> {
        let mut expenses = self.write()?;
        match expenses.iter_mut().find(|e| e.id == expense.id) {
            Some(existing) => *existing = expense,
            None => expenses.push(expense),
        }
        Ok(())
    }

    /// Delete an expense, returning it if it existed
    pub fn delete(&self, id: ExpenseId) -> Result<Option<Expense>, ExpenseError> {
        let mut expenses = self.write()?;
        let index = expenses.iter().position(|e| e.id == id);
        Ok(index.map(|i| expenses.remove(i)))
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, ExpenseError> {
        Ok(self.read()?.len())
    }
}
