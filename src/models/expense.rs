//! Expense model
//!
//! A single recorded outgoing payment. The id and date are fixed when the
//! expense is created; description, amount and category can be edited.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;
use super::month::Month;

/// Category assigned when none is given
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Day the expense was recorded (YYYY-MM-DD)
    pub date: NaiveDate,

    /// What the money was spent on
    pub description: String,

    /// Amount spent, always positive
    pub amount: Money,

    /// Free-form category
    #[serde(default = "default_category")]
    pub category: String,
}

impl Expense {
    /// Create a new expense, trimming description and category
    pub fn new(
        id: ExpenseId,
        date: NaiveDate,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date,
            description: description.into().trim().to_string(),
            amount,
            category: category.into().trim().to_string(),
        }
    }

    /// Month the expense falls in
    pub fn month(&self) -> Month {
        Month::of(self.date)
    }

    /// Case-insensitive category comparison
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {} ({})",
            self.id, self.date, self.description, self.amount, self.category
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NonPositiveAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description is required."),
            Self::NonPositiveAmount(_) => write!(f, "Amount must be a positive number."),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
