use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_add, handle_check_budget, handle_config, handle_delete, handle_export,
    handle_history, handle_list, handle_set_budget, handle_summary, handle_update, AddArgs,
    DeleteArgs, ExportArgs, HistoryArgs, ListArgs, SetBudgetArgs, SummaryArgs, UpdateArgs,
};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Personal command-line expense tracker",
    long_about = "Record expenses, set monthly budgets, review spending summaries \
                  and export everything to CSV. Data lives in two JSON files \
                  (expenses.json and budget.json) in the data directory."
)]
struct Cli {
    /// Directory holding expenses.json and budget.json
    /// (defaults to the directory containing the executable)
    #[arg(long, env = "EXPENSE_TRACKER_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new expense dated today
    Add(AddArgs),

    /// Update an existing expense
    Update(UpdateArgs),

    /// Delete an expense
    Delete(DeleteArgs),

    /// List expenses, newest first
    List(ListArgs),

    /// Show total spending and a per-category breakdown
    Summary(SummaryArgs),

    /// Set the budget for a month
    SetBudget(SetBudgetArgs),

    /// Compare this month's spending against its budget
    CheckBudget,

    /// Export all expenses to a CSV file
    Export(ExportArgs),

    /// Show recent changes from the audit log
    History(HistoryArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::resolve(cli.data_dir)?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths)?;
    if !settings.audit_enabled {
        storage = storage.without_audit();
    }
    storage.load_all()?;

    match cli.command {
        Commands::Add(args) => handle_add(&storage, &settings, args)?,
        Commands::Update(args) => handle_update(&storage, args)?,
        Commands::Delete(args) => handle_delete(&storage, args)?,
        Commands::List(args) => handle_list(&storage, args)?,
        Commands::Summary(args) => handle_summary(&storage, &settings, args)?,
        Commands::SetBudget(args) => handle_set_budget(&storage, &settings, args)?,
        Commands::CheckBudget => handle_check_budget(&storage, &settings)?,
        Commands::Export(args) => handle_export(&storage, args)?,
        Commands::History(args) => handle_history(&storage, args)?,
        Commands::Config => handle_config(&storage, &settings)?,
    }

    Ok(())
}
