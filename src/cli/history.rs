//! Audit history CLI command

use crate::error::ExpenseResult;
use crate::storage::Storage;

/// Print the most recent audit entries
pub fn handle_history(storage: &Storage, count: usize) -> ExpenseResult<()> {
    let Some(logger) = storage.audit() else {
        println!("Audit log is disabled in settings.");
        return Ok(());
    };

    let entries = logger.read_recent(count)?;
    if entries.is_empty() {
        println!("No history recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
