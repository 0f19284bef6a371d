//! Export module for the expense tracker
//!
//! Writes the expense ledger as CSV for spreadsheets.

pub mod csv;

pub use csv::{escape_csv, export_expenses_csv, export_to_file, DEFAULT_EXPORT_FILE};
