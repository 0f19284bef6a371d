//! Budget service
//!
//! Sets monthly budgets and compares a month's spending against them.
//! Exceeding a budget is never an error: checks return a `BudgetWarning`
//! for the caller to show.

use chrono::{Local, NaiveDate};

use crate::audit::EntityType;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Budget, Money, Month};
use crate::storage::Storage;

use super::{parse_month, parse_positive_amount, DEFAULT_NEAR_BUDGET_THRESHOLD};

/// Outcome of comparing spending with a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetWarning {
    /// Comfortably under budget
    None,
    /// At or past the near-budget threshold but not over
    Near,
    /// Spent more than the budget
    Over,
}

/// Spending in one month measured against its budget
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetCheck {
    pub month: Month,
    pub budget: Money,
    pub spent: Money,
    pub warning: BudgetWarning,
}

impl BudgetCheck {
    /// Classify `spent` against `budget`
    ///
    /// Over when `spent > budget`, near when `spent >= threshold * budget`.
    pub fn evaluate(month: Month, budget: Money, spent: Money, threshold: f64) -> Self {
        let warning = if spent > budget {
            BudgetWarning::Over
        } else if spent.reaches_share_of(budget, threshold) {
            BudgetWarning::Near
        } else {
            BudgetWarning::None
        };

        Self {
            month,
            budget,
            spent,
            warning,
        }
    }

    /// Budget left; negative when over
    pub fn remaining(&self) -> Money {
        self.budget - self.spent
    }

    /// How far spending exceeds the budget (zero when not over)
    pub fn overage(&self) -> Money {
        if self.spent > self.budget {
            self.spent - self.budget
        } else {
            Money::zero()
        }
    }
}

/// Status of the current calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentBudget {
    pub month: Month,
    /// `None` when no budget is set for the month
    pub check: Option<BudgetCheck>,
}

/// Service for monthly budgets
pub struct BudgetService<'a> {
    storage: &'a Storage,
    near_threshold: f64,
    today: NaiveDate,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            near_threshold: DEFAULT_NEAR_BUDGET_THRESHOLD,
            today: Local::now().date_naive(),
        }
    }

    /// Use a different near-budget threshold (fraction of the budget)
    pub fn with_near_threshold(mut self, threshold: f64) -> Self {
        self.near_threshold = threshold;
        self
    }

    /// Pin "today" (the current month is derived from it)
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Set the budget for a month
    ///
    /// `month` must be an integer in 1-12 and `amount` a positive number.
    /// An existing budget for the month is overwritten in place.
    pub fn set(&self, amount: &str, month: &str) -> ExpenseResult<Budget> {
        let month_number: i64 = month
            .trim()
            .parse()
            .map_err(|_| ExpenseError::InvalidInput("Month must be an integer.".into()))?;
        let amount = parse_positive_amount(amount)?;
        let month = parse_month(month_number)?;

        let previous = self.storage.budgets.upsert(month, amount)?;
        self.storage.budgets.save()?;

        let budget = Budget::new(month, amount);
        let label = Some(month.name().to_string());
        match previous {
            Some(before) => self.storage.log_update(
                EntityType::Budget,
                month.to_string(),
                label,
                &before,
                &budget,
            )?,
            None => self
                .storage
                .log_create(EntityType::Budget, month.to_string(), label, &budget)?,
        }

        Ok(budget)
    }

    /// Get the budget for a month
    pub fn get(&self, month: Month) -> ExpenseResult<Option<Budget>> {
        self.storage.budgets.get(month)
    }

    /// Total spent across all expenses dated in `month` (any year)
    pub fn spent_in(&self, month: Month) -> ExpenseResult<Money> {
        Ok(self
            .storage
            .expenses
            .get_all()?
            .iter()
            .filter(|e| e.month() == month)
            .map(|e| e.amount)
            .sum())
    }

    /// Compare a month's spending with its budget
    ///
    /// Returns `None` when no budget is set for the month.
    pub fn check_month(&self, month: Month) -> ExpenseResult<Option<BudgetCheck>> {
        let Some(budget) = self.get(month)? else {
            return Ok(None);
        };

        let spent = self.spent_in(month)?;
        Ok(Some(BudgetCheck::evaluate(
            month,
            budget.amount,
            spent,
            self.near_threshold,
        )))
    }

    /// Budget check for the month a date falls in
    pub fn check_date(&self, date: NaiveDate) -> ExpenseResult<Option<BudgetCheck>> {
        self.check_month(Month::of(date))
    }

    /// Budget check for the current calendar month
    pub fn check_current(&self) -> ExpenseResult<CurrentBudget> {
        let month = Month::of(self.today);
        Ok(CurrentBudget {
            month,
            check: self.check_month(month)?,
        })
    }
}
