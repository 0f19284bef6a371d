//! Expense table formatting

use crate::models::Expense;

const DESCRIPTION_WIDTH: usize = 25;

/// Truncate to at most `max_chars` characters
pub fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

/// Format one table row
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "{:<3} {} {:<width$} {:>8} {}",
        expense.id.to_string(),
        expense.date.format("%Y-%m-%d"),
        truncate(&expense.description, DESCRIPTION_WIDTH),
        expense.amount.to_decimal_string(),
        expense.category,
        width = DESCRIPTION_WIDTH
    )
}

/// Format expenses as a fixed-width table
///
/// An empty slice yields the "no expenses" notice instead of a table.
pub fn format_expense_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("ID   Date       Description               Amount    Category\n");
    output.push_str("---- ---------- ------------------------- --------- --------\n");

    for expense in expenses {
        output.push_str(&format_expense_row(expense));
        output.push('\n');
    }

    output
}
