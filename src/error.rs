//! Custom error types for the expense tracker
//!
//! Every operation in the library returns `ExpenseResult`. Only the binary
//! decides how an error is reported and which exit status it maps to.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Rejected user input (empty description, bad amount, bad month)
    #[error("{0}")]
    InvalidInput(String),

    /// Entity not found errors
    #[error("{entity_type} with ID {identifier} not found.")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Nothing to operate on (e.g. exporting an empty ledger)
    #[error("{0}")]
    NoData(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(id: u64) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: id.to_string(),
        }
    }

    /// Error for an amount that is not a positive number
    pub fn invalid_amount() -> Self {
        Self::InvalidInput("Amount must be a positive number.".into())
    }

    /// Error for a month outside 1-12
    pub fn invalid_month() -> Self {
        Self::InvalidInput("Month must be between 1 and 12.".into())
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an input validation error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Check if this is a "no data" error
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData(_))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
