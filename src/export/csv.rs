//! CSV export

use std::io::Write;

use crate::error::ExpenseResult;
use crate::models::{Expense, DATE_FORMAT};

/// Write expenses as CSV with a `name,amount,category,date` header
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer.write_record(["name", "amount", "category", "date"])?;
    for expense in expenses {
        let amount = expense.amount.format_plain();
        let date = expense.date.format(DATE_FORMAT).to_string();
        csv_writer.write_record([
            expense.name.as_str(),
            amount.as_str(),
            expense.category.name(),
            date.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
