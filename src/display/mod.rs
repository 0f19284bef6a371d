//! Display formatting for terminal output
//!
//! Pure functions that turn models and service results into text. Nothing
//! here prints; the CLI decides which stream each string goes to.

pub mod budget;
pub mod expense;

pub use budget::{format_add_warning, format_budget_status, format_current_warning};
pub use expense::{format_expense_table, truncate};
