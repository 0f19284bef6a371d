//! CLI command for CSV export

use clap::Args;
use std::path::PathBuf;

use crate::error::ExpenseResult;
use crate::export::{export_to_file, DEFAULT_EXPORT_FILE};
use crate::storage::Storage;

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output CSV file
    #[arg(short, long, default_value = DEFAULT_EXPORT_FILE)]
    pub file: PathBuf,
}

/// Handle `export`
pub fn handle_export(storage: &Storage, args: ExportArgs) -> ExpenseResult<()> {
    export_to_file(storage, &args.file)?;
    println!("Expenses exported to {}", args.file.display());
    Ok(())
}
