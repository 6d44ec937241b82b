//! Report CLI commands

use crate::config::Settings;
use crate::display::{format_category_breakdown, format_monthly_report};
use crate::error::ExpenseResult;
use crate::reports::{CategoryBreakdown, MonthlyReport};
use crate::services::LedgerService;
use crate::storage::Storage;

/// Print spending by category
pub fn handle_categories(storage: &Storage, settings: &Settings) -> ExpenseResult<()> {
    let expenses = LedgerService::new(storage).list()?;
    print!(
        "{}",
        format_category_breakdown(&CategoryBreakdown::generate(&expenses), settings)
    );
    Ok(())
}

/// Print spending by month
pub fn handle_monthly(storage: &Storage, settings: &Settings) -> ExpenseResult<()> {
    let expenses = LedgerService::new(storage).list()?;
    print!(
        "{}",
        format_monthly_report(&MonthlyReport::generate(&expenses), settings)
    );
    Ok(())
}
