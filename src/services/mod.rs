//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer:
//! input validation, id assignment, persistence and budget checks. Services
//! never print; they return values for the CLI to render.

pub mod budget;
pub mod expense;

pub use budget::{BudgetCheck, BudgetService, BudgetWarning, CurrentBudget};
pub use expense::{AddedExpense, ExpenseFilter, ExpenseService, ExpenseUpdate};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Money, Month};

/// Default fraction of a budget at which spending counts as "close"
pub const DEFAULT_NEAR_BUDGET_THRESHOLD: f64 = 0.9;

/// Parse a user-supplied amount that must be strictly positive after
/// rounding to cents
pub(crate) fn parse_positive_amount(input: &str) -> ExpenseResult<Money> {
    let amount = Money::parse(input).map_err(|_| ExpenseError::invalid_amount())?;
    if !amount.is_positive() {
        return Err(ExpenseError::invalid_amount());
    }
    Ok(amount)
}

/// Validate a month filter argument
pub(crate) fn parse_month(number: i64) -> ExpenseResult<Month> {
    Month::new(number).ok_or_else(ExpenseError::invalid_month)
}
