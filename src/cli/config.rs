//! CLI command showing configuration and data file status

use crate::config::settings::Settings;
use crate::error::ExpenseResult;
use crate::storage::{LoadStatus, Storage};

fn describe(status: &LoadStatus) -> String {
    match status {
        LoadStatus::Loaded => "ok".to_string(),
        LoadStatus::Missing => "missing".to_string(),
        LoadStatus::Malformed(reason) => format!("unreadable, treated as empty ({})", reason),
    }
}

/// Handle `config`
pub fn handle_config(storage: &Storage, settings: &Settings) -> ExpenseResult<()> {
    let paths = storage.paths();

    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Data directory: {}", paths.base_dir().display());
    println!(
        "Expenses file:  {} [{}]",
        paths.expenses_file().display(),
        describe(&storage.expenses.load_status())
    );
    println!(
        "Budget file:    {} [{}]",
        paths.budget_file().display(),
        describe(&storage.budgets.load_status())
    );
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:       {}", settings.currency_symbol);
    println!(
        "  Near-budget threshold: {:.0}%",
        settings.near_budget_threshold * 100.0
    );
    println!("  Audit logging:         {}", settings.audit_enabled);
    Ok(())
}
