//! Report CLI commands
//!
//! Implements `summary` and `history`.

use clap::Args;

use crate::config::settings::Settings;
use crate::error::ExpenseResult;
use crate::reports::SummaryReport;
use crate::storage::Storage;

/// Arguments for `summary`
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Show summary for a specific month (1-12)
    #[arg(short, long, allow_hyphen_values = true)]
    pub month: Option<i64>,
}

/// Arguments for `history`
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of entries to show
    #[arg(short = 'n', long, default_value = "10")]
    pub count: usize,
}

/// Handle `summary`
pub fn handle_summary(
    storage: &Storage,
    settings: &Settings,
    args: SummaryArgs,
) -> ExpenseResult<()> {
    let report = SummaryReport::generate(storage, args.month)?;
    print!("{}", report.format_terminal(&settings.currency_symbol));
    Ok(())
}

/// Handle `history`
pub fn handle_history(storage: &Storage, args: HistoryArgs) -> ExpenseResult<()> {
    let Some(logger) = storage.audit_logger() else {
        println!("Audit logging is disabled.");
        return Ok(());
    };

    let entries = logger.read_recent(args.count)?;
    if entries.is_empty() {
        println!("No history recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
