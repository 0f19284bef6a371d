//! Expense Tracker - personal command-line expense tracking
//!
//! This library provides the core functionality for the `expense` binary.
//! Expenses and monthly budgets are kept in two JSON files inside a data
//! directory; every command loads them, applies one operation and writes
//! the result back.
//!
//! # Architecture
//!
//! - `config`: data directory resolution and user settings
//! - `error`: custom error types
//! - `models`: expenses, budgets and the `Money` amount type
//! - `storage`: JSON file storage layer
//! - `audit`: append-only audit log of mutations
//! - `services`: business logic (validation, id assignment, budget checks)
//! - `reports`: spending summaries
//! - `export`: CSV export
//! - `display`: terminal formatting
//! - `cli`: clap commands and handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::ExpensePaths;
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::Storage;
//!
//! let mut storage = Storage::new(ExpensePaths::with_base_dir(dir))?;
//! storage.load_all()?;
//! let expense = ExpenseService::new(&storage).add("Coffee", "3.50", None)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
