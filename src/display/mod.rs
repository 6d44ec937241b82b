//! Display formatting for terminal output
//!
//! Turns expenses and reports into printable strings. Nothing here touches
//! storage.

pub mod expense;
pub mod report;

pub use expense::{format_expense_details, format_expense_table};
pub use report::{format_budget_report, format_category_breakdown, format_monthly_report};
