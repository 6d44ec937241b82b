//! Expense CLI commands
//!
//! Add, list, delete, search and clear.

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Money};
use crate::services::LedgerService;
use crate::storage::Storage;

/// Parse an amount typed by the user
pub(crate) fn parse_amount(amount: &str) -> ExpenseResult<Money> {
    Money::parse(amount).map_err(|e| {
        ExpenseError::Validation(format!(
            "Invalid amount '{}'. Use a number like '12.50'. ({})",
            amount, e
        ))
    })
}

/// Convert a user-typed position into a ledger position
pub(crate) fn to_position(position: i64, len: usize) -> ExpenseResult<usize> {
    usize::try_from(position)
        .ok()
        .filter(|p| *p >= 1)
        .ok_or(ExpenseError::IndexOutOfRange { index: position, len })
}

pub fn handle_add(
    storage: &Storage,
    settings: &Settings,
    name: &str,
    amount: &str,
    category: Option<&str>,
) -> ExpenseResult<()> {
    let amount = parse_amount(amount)?;
    let category = match category {
        Some(c) => c.parse::<Category>()?,
        None => Category::Other,
    };

    let expense = LedgerService::new(storage).add(name, amount, category)?;

    println!("Added expense:");
    print!("{}", format_expense_details(&expense, settings));
    Ok(())
}

pub fn handle_list(storage: &Storage, settings: &Settings) -> ExpenseResult<()> {
    let expenses = LedgerService::new(storage).list()?;
    let numbered: Vec<_> = expenses.into_iter().enumerate().map(|(i, e)| (i + 1, e)).collect();

    print!("{}", format_expense_table(&numbered, settings));
    Ok(())
}

pub fn handle_delete(
    storage: &Storage,
    settings: &Settings,
    position: i64,
    force: bool,
) -> ExpenseResult<()> {
    let ledger = LedgerService::new(storage);
    let expenses = ledger.list()?;
    let position = to_position(position, expenses.len())?;

    let Some(expense) = expenses.get(position - 1) else {
        return Err(ExpenseError::IndexOutOfRange {
            index: position as i64,
            len: expenses.len(),
        });
    };

    if !force {
        println!("About to delete expense #{}:", position);
        print!("{}", format_expense_details(expense, settings));
        println!();
        println!("Use --force to confirm deletion");
        return Ok(());
    }

    let removed = ledger.delete_at(position)?;
    println!(
        "Deleted expense: {} ({})",
        removed.name,
        removed.amount.format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}

pub fn handle_search(storage: &Storage, settings: &Settings, keyword: &str) -> ExpenseResult<()> {
    let matches = LedgerService::new(storage).search_with_positions(keyword)?;

    if matches.is_empty() {
        println!("No expenses found matching '{}'.", keyword);
        return Ok(());
    }

    println!("Expenses matching '{}':", keyword);
    print!("{}", format_expense_table(&matches, settings));
    Ok(())
}

pub fn handle_clear(storage: &Storage, force: bool) -> ExpenseResult<()> {
    let ledger = LedgerService::new(storage);

    if !force {
        println!(
            "This will delete ALL {} recorded expenses.",
            ledger.count()?
        );
        println!("Use --force to confirm");
        return Ok(());
    }

    let removed = ledger.clear()?;
    println!("All expenses have been cleared ({} removed).", removed);
    Ok(())
}
