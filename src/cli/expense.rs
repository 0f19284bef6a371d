//! Expense CLI commands
//!
//! Implements `add`, `update`, `delete` and `list`.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_add_warning, format_expense_table};
use crate::error::ExpenseResult;
use crate::models::{ExpenseId, DEFAULT_CATEGORY};
use crate::services::{ExpenseFilter, ExpenseService, ExpenseUpdate};
use crate::storage::Storage;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Description of the expense
    #[arg(short, long)]
    pub description: String,

    /// Amount of the expense (e.g. "12.50")
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: String,

    /// Category of the expense
    #[arg(short, long, default_value = DEFAULT_CATEGORY)]
    pub category: String,
}

/// Arguments for `update`
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// ID of the expense to update
    #[arg(short, long)]
    pub id: u64,

    /// New description (the amount is re-read together with it)
    #[arg(short, long)]
    pub description: Option<String>,

    /// New amount, applied when --description is also given
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// New category
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for `delete`
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// ID of the expense to delete
    #[arg(short, long)]
    pub id: u64,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by category (case-insensitive)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Filter by month (1-12)
    #[arg(short, long, allow_hyphen_values = true)]
    pub month: Option<i64>,
}

/// Handle `add`
pub fn handle_add(storage: &Storage, settings: &Settings, args: AddArgs) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage).with_near_threshold(settings.near_budget_threshold);
    let added = service.add(&args.description, &args.amount, Some(&args.category))?;

    if let Some(warning) = added
        .budget
        .as_ref()
        .and_then(|check| format_add_warning(check, &settings.currency_symbol))
    {
        eprintln!("{}", warning);
    }

    println!("Expense added successfully (ID: {})", added.expense.id);
    Ok(())
}

/// Handle `update`
pub fn handle_update(storage: &Storage, args: UpdateArgs) -> ExpenseResult<()> {
    let changes = ExpenseUpdate {
        description: args.description,
        amount: args.amount,
        category: args.category,
    };

    if changes.amount_ignored() {
        eprintln!("Note: --amount is only applied together with --description.");
    }

    let id = ExpenseId::new(args.id);
    ExpenseService::new(storage).update(id, changes)?;

    println!("Expense updated successfully (ID: {})", id);
    Ok(())
}

/// Handle `delete`
pub fn handle_delete(storage: &Storage, args: DeleteArgs) -> ExpenseResult<()> {
    let id = ExpenseId::new(args.id);
    ExpenseService::new(storage).delete(id)?;

    println!("Expense deleted successfully (ID: {})", id);
    Ok(())
}

/// Handle `list`
pub fn handle_list(storage: &Storage, args: ListArgs) -> ExpenseResult<()> {
    let filter = ExpenseFilter {
        category: args.category,
        month: args.month,
    };

    let expenses = ExpenseService::new(storage).list(&filter)?;
    print!("{}", format_expense_table(&expenses));
    Ok(())
}
