//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes and forgiving reads, plus
//! the audit trail of every mutation.

pub mod budget;
pub mod expenses;
pub mod file_io;
pub mod init;

pub use budget::BudgetRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json_or_default, write_json_atomic, LoadStatus};
pub use init::initialize_storage;

use serde::Serialize;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
    pub budgets: BudgetRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance, creating empty data files if needed
    pub fn new(paths: ExpensePaths) -> Result<Self, ExpenseError> {
        initialize_storage(&paths)?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            budgets: BudgetRepository::new(paths.budget_file()),
            audit: Some(AuditLogger::new(paths.audit_log())),
            paths,
        })
    }

    /// Turn audit logging off for this instance
    pub fn without_audit(mut self) -> Self {
        self.audit = None;
        self
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), ExpenseError> {
        self.expenses.load()?;
        self.budgets.load()?;
        Ok(())
    }

    /// Whether mutations are being written to the audit log
    pub fn audit_enabled(&self) -> bool {
        self.audit.is_some()
    }

    /// The audit logger, if enabled
    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record a created entity
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), ExpenseError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::create(
                entity_type,
                entity_id,
                entity_name,
                entity,
            )),
            None => Ok(()),
        }
    }

    /// Record an updated entity with a field-level diff
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), ExpenseError> {
        let Some(logger) = &self.audit else {
            return Ok(());
        };

        let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };

        logger.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff,
        ))
    }

    /// Record a deleted entity
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), ExpenseError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::delete(
                entity_type,
                entity_id,
                entity_name,
                entity,
            )),
            None => Ok(()),
        }
    }
}
