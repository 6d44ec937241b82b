//! Ledger service
//!
//! The ordered collection of expenses. Every operation loads the whole
//! collection, and every mutation writes the whole collection back before
//! returning. Positions are 1-based and only meaningful for the snapshot
//! they were read from.

use crate::audit::{AuditEntry, EntityType};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense, Money};
use crate::storage::Storage;

/// Service for expense management
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense stamped with the current time
    pub fn add(&self, name: &str, amount: Money, category: Category) -> ExpenseResult<Expense> {
        self.append(Expense::new(name, amount, category))
    }

    /// Append an already-built expense after validating it
    pub fn append(&self, expense: Expense) -> ExpenseResult<Expense> {
        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let mut expenses = self.storage.expenses.load_collection()?;
        expenses.push(expense.clone());
        self.storage.expenses.save_collection(&expenses)?;

        tracing::info!(name = %expense.name, amount = %expense.amount, "expense added");
        self.storage.log(AuditEntry::create(
            EntityType::Expense,
            format!("#{}", expenses.len()),
            Some(expense.name.clone()),
            &expense,
        ));

        Ok(expense)
    }

    /// All expenses in insertion order
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.storage.expenses.load_collection()
    }

    /// Number of stored expenses
    pub fn count(&self) -> ExpenseResult<usize> {
        Ok(self.list()?.len())
    }

    /// Remove and return the expense at a 1-based position
    pub fn delete_at(&self, position: usize) -> ExpenseResult<Expense> {
        let mut expenses = self.storage.expenses.load_collection()?;

        if position == 0 || position > expenses.len() {
            return Err(ExpenseError::IndexOutOfRange {
                index: i64::try_from(position).unwrap_or(i64::MAX),
                len: expenses.len(),
            });
        }

        let removed = expenses.remove(position - 1);
        self.storage.expenses.save_collection(&expenses)?;

        tracing::info!(position, name = %removed.name, "expense deleted");
        self.storage.log(AuditEntry::delete(
            EntityType::Expense,
            format!("#{}", position),
            Some(removed.name.clone()),
            &removed,
        ));

        Ok(removed)
    }

    /// Remove every expense; returns how many were removed
    pub fn clear(&self) -> ExpenseResult<usize> {
        let removed = self.storage.expenses.load_collection()?;
        self.storage.expenses.save_collection(&[])?;

        tracing::info!(count = removed.len(), "ledger cleared");
        self.storage
            .log(AuditEntry::clear(EntityType::Ledger, "expenses", &removed));

        Ok(removed.len())
    }

    /// Expenses whose name contains `keyword`, ignoring case, in ledger
    /// order. An empty keyword matches everything.
    pub fn search(&self, keyword: &str) -> ExpenseResult<Vec<Expense>> {
        let mut expenses = self.storage.expenses.load_collection()?;
        expenses.retain(|e| e.name_contains(keyword));
        Ok(expenses)
    }

    /// Like `search`, but keeps each match's 1-based ledger position
    pub fn search_with_positions(&self, keyword: &str) -> ExpenseResult<Vec<(usize, Expense)>> {
        Ok(self
            .storage
            .expenses
            .load_collection()?
            .into_iter()
            .enumerate()
            .filter(|(_, e)| e.name_contains(keyword))
            .map(|(i, e)| (i + 1, e))
            .collect())
    }
}
