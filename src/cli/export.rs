//! Export CLI command

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_expenses_json, ExportFormat};
use crate::services::LedgerService;
use crate::storage::Storage;

/// Export the ledger to a file. Without an explicit format the file
/// extension decides, falling back to CSV.
pub fn handle_export(
    storage: &Storage,
    output: &Path,
    format: Option<&str>,
) -> ExpenseResult<()> {
    let format = match format {
        Some(f) => f.parse()?,
        None => ExportFormat::from_path(output).unwrap_or_default(),
    };

    let expenses = LedgerService::new(storage).list()?;

    let file = File::create(output).map_err(|e| {
        ExpenseError::Io(format!("Failed to create {}: {}", output.display(), e))
    })?;
    let writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export_expenses_csv(&expenses, writer)?,
        ExportFormat::Json => export_expenses_json(&expenses, writer)?,
    }

    println!(
        "Exported {} expenses to {} ({})",
        expenses.len(),
        output.display(),
        format
    );
    Ok(())
}
