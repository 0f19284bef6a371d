//! Spending Summary
//!
//! Totals expenses overall or for one month, with a breakdown by category
//! in the order each category first appears in the ledger.

use crate::error::ExpenseResult;
use crate::models::{Expense, Money, Month};
use crate::services::parse_month;
use crate::storage::Storage;

/// Spending in one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category name exactly as recorded
    pub category: String,
    pub total: Money,
    pub count: usize,
}

/// Spending summary report
#[derive(Debug, Clone)]
pub struct SummaryReport {
    /// Month the report is restricted to, if any
    pub month: Option<Month>,
    pub total: Money,
    pub expense_count: usize,
    /// Per-category totals, first-seen order
    pub categories: Vec<CategoryTotal>,
}

impl SummaryReport {
    /// Generate a summary, optionally for a single month (1-12)
    pub fn generate(storage: &Storage, month: Option<i64>) -> ExpenseResult<Self> {
        let month = month.map(parse_month).transpose()?;

        let expenses = match month {
            Some(m) => storage
                .expenses
                .get_all()?
                .into_iter()
                .filter(|e| m.contains(e.date))
                .collect(),
            None => storage.expenses.get_all()?,
        };

        Ok(Self::from_expenses(month, &expenses))
    }

    /// Build a summary from an already-filtered set of expenses
    pub fn from_expenses(month: Option<Month>, expenses: &[Expense]) -> Self {
        let mut categories: Vec<CategoryTotal> = Vec::new();

        for expense in expenses {
            match categories.iter_mut().find(|c| c.category == expense.category) {
                Some(entry) => {
                    entry.total += expense.amount;
                    entry.count += 1;
                }
                None => categories.push(CategoryTotal {
                    category: expense.category.clone(),
                    total: expense.amount,
                    count: 1,
                }),
            }
        }

        Self {
            month,
            total: expenses.iter().map(|e| e.amount).sum(),
            expense_count: expenses.len(),
            categories,
        }
    }

    /// Format for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = match self.month {
            Some(month) => format!(
                "Total expenses for {}: {}\n",
                month.name(),
                self.total.format_with_symbol(currency_symbol)
            ),
            None => format!(
                "Total expenses: {}\n",
                self.total.format_with_symbol(currency_symbol)
            ),
        };

        if !self.categories.is_empty() {
            output.push_str("\nBreakdown by Category:\n");
            for entry in &self.categories {
                output.push_str(&format!(
                    "- {}: {}\n",
                    entry.category,
                    entry.total.format_with_symbol(currency_symbol)
                ));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::models::ExpenseId;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn record(storage: &Storage, id: u64, month: u32, cents: i64, category: &str) {
        storage
            .expenses
            .upsert(Expense::new(
                ExpenseId::new(id),
                NaiveDate::from_ymd_opt(2025, month, 1).unwrap(),
                "Item",
                Money::from_cents(cents),
                category,
            ))
            .unwrap();
    }

    #[test]
    fn test_summary_all() {
        let (_temp_dir, storage) = create_test_storage();
        record(&storage, 1, 1, 1000, "Food");
        record(&storage, 2, 2, 2550, "Travel");
        record(&storage, 3, 2, 10, "Food");

        let report = SummaryReport::generate(&storage, None).unwrap();
        assert_eq!(report.total.cents(), 3560);
        assert_eq!(report.expense_count, 3);
        assert_eq!(
            report.categories,
            vec![
                CategoryTotal {
                    category: "Food".into(),
                    total: Money::from_cents(1010),
                    count: 2
                },
                CategoryTotal {
                    category: "Travel".into(),
                    total: Money::from_cents(2550),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_summary_for_month() {
        let (_temp_dir, storage) = create_test_storage();
        record(&storage, 1, 1, 1000, "Food");
        record(&storage, 2, 2, 2550, "Travel");
        record(&storage, 3, 2, 10, "Food");

        let report = SummaryReport::generate(&storage, Some(2)).unwrap();
        assert_eq!(report.total.cents(), 2560);
        let names: Vec<_> = report.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["Travel", "Food"]);
    }

    #[test]
    fn test_summary_rejects_bad_month() {
        let (_temp_dir, storage) = create_test_storage();
        assert!(SummaryReport::generate(&storage, Some(13))
            .unwrap_err()
            .is_invalid_input());
    }

    #[test]
    fn test_format_terminal() {
        let (_temp_dir, storage) = create_test_storage();
        record(&storage, 1, 3, 1234, "Food");
        record(&storage, 2, 3, 66, "Fun");

        let report = SummaryReport::generate(&storage, Some(3)).unwrap();
        assert_eq!(
            report.format_terminal("$"),
            "Total expenses for March: $13.00\n\n\
             Breakdown by Category:\n- Food: $12.34\n- Fun: $0.66\n"
        );
    }

    #[test]
    fn test_format_terminal_empty_has_no_breakdown() {
        let (_temp_dir, storage) = create_test_storage();
        let report = SummaryReport::generate(&storage, None).unwrap();
        assert_eq!(report.format_terminal("$"), "Total expenses: $0.00\n");
    }
}
