//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the service layer. Handlers are the only code
//! that writes to stdout/stderr; errors are returned to `main`.

pub mod budget;
pub mod config;
pub mod expense;
pub mod export;
pub mod report;

pub use budget::{handle_check_budget, handle_set_budget, SetBudgetArgs};
pub use config::handle_config;
pub use expense::{
    handle_add, handle_delete, handle_list, handle_update, AddArgs, DeleteArgs, ListArgs,
    UpdateArgs,
};
pub use export::{handle_export, ExportArgs};
pub use report::{handle_history, handle_summary, HistoryArgs, SummaryArgs};
