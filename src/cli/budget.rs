//! Budget CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_budget_report;
use crate::error::{ExpenseError, ExpenseResult};
use crate::services::BudgetService;
use crate::storage::Storage;

use super::expense::parse_amount;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Compare spending against the budget
    Status {
        /// Only count expenses from this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Set the budget limit
    Set {
        /// Amount (e.g., "500" or "500.00")
        amount: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> ExpenseResult<()> {
    let service = BudgetService::new(storage);

    match cmd {
        BudgetCommands::Status { month } => {
            if let Some(month) = &month {
                validate_month(month)?;
            }
            let report = service.check(month.as_deref())?;
            print!("{}", format_budget_report(&report, settings));
        }
        BudgetCommands::Set { amount } => {
            let amount = parse_amount(&amount)?;
            service.set_limit(amount)?;
            println!(
                "Budget set to {}",
                amount.format_with_symbol(&settings.currency_symbol)
            );
        }
    }

    Ok(())
}

/// Check a "YYYY-MM" month argument
pub(crate) fn validate_month(month: &str) -> ExpenseResult<()> {
    chrono::NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d")
        .ok()
        .filter(|_| month.len() == 7)
        .map(|_| ())
        .ok_or_else(|| {
            ExpenseError::Validation(format!("Invalid month '{}'. Use YYYY-MM", month))
        })
}
