//! Expense display formatting

use std::fmt::Write;

use chrono::NaiveDateTime;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{Expense, Money, DATE_FORMAT};

use super::report::truncate;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format expenses as a numbered table followed by their total
///
/// Each item carries the 1-based ledger position it should be shown with,
/// so search results keep the numbers `delete` expects.
pub fn format_expense_table(expenses: &[(usize, Expense)], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let rows = expenses.iter().map(|(position, e)| ExpenseRow {
        position: *position,
        date: format_date(&e.date, settings),
        name: truncate(&e.name, 30),
        category: e.category.to_string(),
        amount: e.amount.format_with_symbol(&settings.currency_symbol),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());

    let total: Money = expenses.iter().map(|(_, e)| e.amount).sum();
    format!(
        "{}\n\nTotal: {} ({} expense{})\n",
        table,
        total.format_with_symbol(&settings.currency_symbol),
        expenses.len(),
        if expenses.len() == 1 { "" } else { "s" }
    )
}

/// Format a single expense, e.g. after adding or deleting it
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!("  Name:     {}\n", expense.name));
    output.push_str(&format!(
        "  Amount:   {}\n",
        expense.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("  Category: {}\n", expense.category));
    output.push_str(&format!("  Date:     {}\n", format_date(&expense.date, settings)));
    output
}

/// Format a timestamp with the configured format, falling back to the
/// default one when the configured string is not valid strftime
pub fn format_date(date: &NaiveDateTime, settings: &Settings) -> String {
    let mut output = String::new();
    match write!(output, "{}", date.format(&settings.date_format)) {
        Ok(()) => output,
        Err(_) => date.format(DATE_FORMAT).to_string(),
    }
}
