//! Budget status and warning formatting

use crate::services::{BudgetCheck, BudgetWarning};

/// Warning shown after adding an expense, if the month is near or over budget
pub fn format_add_warning(check: &BudgetCheck, currency_symbol: &str) -> Option<String> {
    match check.warning {
        BudgetWarning::None => None,
        BudgetWarning::Over => Some(format!(
            "\n    Warning: You have exceeded your budget for month {}!\n    \
             Spent: {}\n    \
             Over budget by: {}\n",
            check.month,
            check.spent.format_with_symbol(currency_symbol),
            check.overage().format_with_symbol(currency_symbol)
        )),
        BudgetWarning::Near => Some(format!(
            "\n    Warning: You are close to exceeding your budget for month {}!\n    \
             Spent: {}\n    \
             Remaining budget: {}\n",
            check.month,
            check.spent.format_with_symbol(currency_symbol),
            check.remaining().format_with_symbol(currency_symbol)
        )),
    }
}

/// Budget, spending and remaining amount for the `check-budget` command
pub fn format_budget_status(check: &BudgetCheck, currency_symbol: &str) -> String {
    format!(
        "Budget for month {}: {}\nSpent this month: {}\nRemaining budget: {}\n",
        check.month,
        check.budget.format_with_symbol(currency_symbol),
        check.spent.format_with_symbol(currency_symbol),
        check.remaining().format_with_symbol(currency_symbol)
    )
}

/// Warning line for the `check-budget` command
pub fn format_current_warning(check: &BudgetCheck, currency_symbol: &str) -> Option<String> {
    match check.warning {
        BudgetWarning::None => None,
        BudgetWarning::Over => Some(format!(
            "\n    Warning: You're over your budget by {}",
            check.overage().format_with_symbol(currency_symbol)
        )),
        BudgetWarning::Near => Some(format!(
            "\n    Warning: You're close to exceeding your budget! Only {} left.",
            check.remaining().format_with_symbol(currency_symbol)
        )),
    }
}
