//! JSON export

use std::io::Write;

use crate::error::ExpenseResult;
use crate::models::Expense;

/// Write expenses as a pretty-printed JSON array
pub fn export_expenses_json<W: Write>(expenses: &[Expense], mut writer: W) -> ExpenseResult<()> {
    serde_json::to_writer_pretty(&mut writer, expenses)?;
    writeln!(writer)?;
    Ok(())
}
