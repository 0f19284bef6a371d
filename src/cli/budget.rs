//! Budget CLI commands
//!
//! Implements `set-budget` and `check-budget`.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_budget_status, format_current_warning};
use crate::error::ExpenseResult;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Arguments for `set-budget`
#[derive(Args, Debug)]
pub struct SetBudgetArgs {
    /// Month for the budget (1-12)
    #[arg(short, long, allow_hyphen_values = true)]
    pub month: String,

    /// Budget amount
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: String,
}

/// Handle `set-budget`
pub fn handle_set_budget(
    storage: &Storage,
    settings: &Settings,
    args: SetBudgetArgs,
) -> ExpenseResult<()> {
    let budget = BudgetService::new(storage).set(&args.amount, &args.month)?;

    println!(
        "Budget set successfully for month {}: {}",
        budget.month,
        budget.amount.format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}

/// Handle `check-budget`
pub fn handle_check_budget(storage: &Storage, settings: &Settings) -> ExpenseResult<()> {
    let current = BudgetService::new(storage)
        .with_near_threshold(settings.near_budget_threshold)
        .check_current()?;

    let Some(check) = current.check else {
        println!("No budget set for month {}.", current.month);
        return Ok(());
    };

    print!("{}", format_budget_status(&check, &settings.currency_symbol));
    if let Some(warning) = format_current_warning(&check, &settings.currency_symbol) {
        eprintln!("{}", warning);
    }
    Ok(())
}
