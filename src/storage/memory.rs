//! In-memory stores
//!
//! Hold the documents in process memory. Used by tests and by callers that
//! embed the ledger without touching the filesystem.

use std::sync::RwLock;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Budget, Expense};

use super::traits::{BudgetStore, ExpenseStore};

/// Expense store kept in memory
#[derive(Debug, Default)]
pub struct MemoryExpenseStore {
    expenses: RwLock<Vec<Expense>>,
}

impl MemoryExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExpenseStore for MemoryExpenseStore {
    fn load_collection(&self) -> ExpenseResult<Vec<Expense>> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| ExpenseError::Io(format!("Failed to acquire read lock: {}", e)))?;
        Ok(expenses.clone())
    }

    fn save_collection(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        let mut stored = self
            .expenses
            .write()
            .map_err(|e| ExpenseError::Io(format!("Failed to acquire write lock: {}", e)))?;
        *stored = expenses.to_vec();
        Ok(())
    }
}

/// Budget store kept in memory
#[derive(Debug, Default)]
pub struct MemoryBudgetStore {
    budget: RwLock<Budget>,
}

impl MemoryBudgetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BudgetStore for MemoryBudgetStore {
    fn load_budget(&self) -> ExpenseResult<Budget> {
        let budget = self
            .budget
            .read()
            .map_err(|e| ExpenseError::Io(format!("Failed to acquire read lock: {}", e)))?;
        Ok(budget.clone())
    }

    fn save_budget(&self, budget: &Budget) -> ExpenseResult<()> {
        let mut stored = self
            .budget
            .write()
            .map_err(|e| ExpenseError::Io(format!("Failed to acquire write lock: {}", e)))?;
        *stored = budget.clone();
        Ok(())
    }
}
