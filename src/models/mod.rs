//! Core data models for the expense tracker
//!
//! This module contains the data structures persisted to disk (expenses and
//! monthly budgets) and the value types they are built from.

pub mod budget;
pub mod expense;
pub mod ids;
pub mod money;
pub mod month;

pub use budget::Budget;
pub use expense::{Expense, ExpenseValidationError, DEFAULT_CATEGORY};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use month::Month;
