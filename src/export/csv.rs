//! CSV Export functionality
//!
//! Columns are `ID,Date,Description,Amount,Category`. Only the description
//! is quoted when needed; ids, dates and amounts never contain separators.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::storage::Storage;

/// File name used when no export path is given
pub const DEFAULT_EXPORT_FILE: &str = "expenses.csv";

const HEADER: &str = "ID,Date,Description,Amount,Category";

/// Write expenses as CSV, in ledger order
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    writeln!(writer, "{}", HEADER).map_err(|e| ExpenseError::Export(e.to_string()))?;

    for expense in expenses {
        writeln!(
            writer,
            "{},{},{},{},{}",
            expense.id,
            expense.date,
            escape_csv(&expense.description),
            expense.amount.to_decimal_string(),
            expense.category
        )
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Export every stored expense to `path`, replacing the file
///
/// Fails with `NoData` (and creates no file) when there are no expenses.
/// Returns the number of rows written.
pub fn export_to_file(storage: &Storage, path: &Path) -> ExpenseResult<usize> {
    let expenses = storage.expenses.get_all()?;
    if expenses.is_empty() {
        return Err(ExpenseError::NoData("No expenses to export.".into()));
    }

    let file = File::create(path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    export_expenses_csv(&expenses, &mut writer)?;
    writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(expenses.len())
}

/// Escape a string for CSV format
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
