//! Storage initialization
//!
//! Handles first-run setup: the data directory and both data files are
//! created empty if they don't exist yet.

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;

use super::file_io::ensure_json_array;

/// Make sure the data directory and both data files exist
///
/// Existing files are never touched. Returns true if anything was created.
pub fn initialize_storage(paths: &ExpensePaths) -> Result<bool, ExpenseError> {
    paths.ensure_directories()?;

    let created_expenses = ensure_json_array(paths.expenses_file())?;
    let created_budgets = ensure_json_array(paths.budget_file())?;

    Ok(created_expenses || created_budgets)
}
