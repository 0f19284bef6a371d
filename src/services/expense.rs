//! Expense service
//!
//! Provides business logic for expense management: validation, sequential
//! id assignment, filtering, and the automatic budget check after each
//! new expense.

use chrono::{Local, NaiveDate};

use crate::audit::EntityType;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, DEFAULT_CATEGORY};
use crate::storage::Storage;

use super::budget::{BudgetCheck, BudgetService};
use super::{parse_month, parse_positive_amount, DEFAULT_NEAR_BUDGET_THRESHOLD};

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    near_threshold: f64,
    today: NaiveDate,
}

/// Options for filtering expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Category name, matched case-insensitively
    pub category: Option<String>,
    /// Month number; must be 1-12 when present
    pub month: Option<i64>,
}

impl ExpenseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by month (any year)
    pub fn month(mut self, month: i64) -> Self {
        self.month = Some(month);
        self
    }
}

/// Fields to change on an existing expense
///
/// The amount is tied to the description: when `description` is present the
/// amount is re-validated from `amount` and replaced; an `amount` without a
/// `description` is ignored.
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub description: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
}

impl ExpenseUpdate {
    /// True when an amount was supplied that will not be applied
    pub fn amount_ignored(&self) -> bool {
        self.amount.is_some() && self.description.is_none()
    }
}

/// A newly recorded expense and the budget status of its month
#[derive(Debug, Clone)]
pub struct AddedExpense {
    pub expense: Expense,
    /// `None` when the expense's month has no budget
    pub budget: Option<BudgetCheck>,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            near_threshold: DEFAULT_NEAR_BUDGET_THRESHOLD,
            today: Local::now().date_naive(),
        }
    }

    /// Use a different near-budget threshold for the post-add check
    pub fn with_near_threshold(mut self, threshold: f64) -> Self {
        self.near_threshold = threshold;
        self
    }

    /// Pin the date stamped on new expenses
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Record a new expense dated today
    ///
    /// The description must not be blank and the amount must be a positive
    /// number; it is rounded to cents. The category defaults to
    /// "Uncategorized".
    pub fn add(
        &self,
        description: &str,
        amount: &str,
        category: Option<&str>,
    ) -> ExpenseResult<AddedExpense> {
        if description.trim().is_empty() {
            return Err(ExpenseError::InvalidInput("Description is required.".into()));
        }
        let amount = parse_positive_amount(amount)?;

        let expense = Expense::new(
            self.storage.expenses.next_id()?,
            self.today,
            description,
            amount,
            category.unwrap_or(DEFAULT_CATEGORY),
        );
        expense
            .validate()
            .map_err(|e| ExpenseError::InvalidInput(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            &expense,
        )?;

        let budget = BudgetService::new(self.storage)
            .with_near_threshold(self.near_threshold)
            .check_date(expense.date)?;

        Ok(AddedExpense { expense, budget })
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        self.storage.expenses.get(id)
    }

    /// Update an existing expense
    ///
    /// The id and date never change.
    pub fn update(&self, id: ExpenseId, changes: ExpenseUpdate) -> ExpenseResult<Expense> {
        let mut expense = self
            .storage
            .expenses
            .get(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id.value()))?;

        let before = expense.clone();

        if let Some(description) = &changes.description {
            let description = description.trim();
            if description.is_empty() {
                return Err(ExpenseError::InvalidInput("Description is required.".into()));
            }
            let amount = parse_positive_amount(changes.amount.as_deref().unwrap_or_default())?;

            expense.description = description.to_string();
            expense.amount = amount;
        }

        if let Some(category) = &changes.category {
            expense.category = category.trim().to_string();
        }

        expense
            .validate()
            .map_err(|e| ExpenseError::InvalidInput(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_update(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            &before,
            &expense,
        )?;

        Ok(expense)
    }

    /// Delete an expense, returning what was removed
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<Expense> {
        let expense = self
            .storage
            .expenses
            .delete(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id.value()))?;

        self.storage.expenses.save()?;

        self.storage.log_delete(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            &expense,
        )?;

        Ok(expense)
    }

    /// List expenses newest first, optionally filtered
    ///
    /// Expenses sharing a date keep their recorded order.
    pub fn list(&self, filter: &ExpenseFilter) -> ExpenseResult<Vec<Expense>> {
        let month = filter.month.map(parse_month).transpose()?;

        let mut expenses = self.storage.expenses.get_all()?;
        expenses.sort_by(|a, b| b.date.cmp(&a.date));

        if let Some(category) = &filter.category {
            expenses.retain(|e| e.in_category(category));
        }
        if let Some(month) = month {
            expenses.retain(|e| month.contains(e.date));
        }

        Ok(expenses)
    }

    /// Count all expenses
    pub fn count(&self) -> ExpenseResult<usize> {
        self.storage.expenses.count()
    }
}
