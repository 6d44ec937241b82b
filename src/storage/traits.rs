//! Storage traits
//!
//! The services layer talks to the two backing documents through these
//! handles instead of fixed file paths, so a ledger can run against JSON
//! files on disk or against memory.
//!
//! Each call loads or replaces the whole document. Two processes doing
//! load-modify-save on the same store concurrently will lose one update;
//! the tracker is single-user and does not lock.

use crate::error::ExpenseResult;
use crate::models::{Budget, Expense};

/// Whole-document access to the expense collection
pub trait ExpenseStore: Send + Sync {
    /// Load every stored expense in insertion order.
    /// An absent store yields an empty collection.
    fn load_collection(&self) -> ExpenseResult<Vec<Expense>>;

    /// Replace the stored collection with `expenses`
    fn save_collection(&self, expenses: &[Expense]) -> ExpenseResult<()>;
}

/// Whole-document access to the budget settings
pub trait BudgetStore: Send + Sync {
    /// Load the budget. An absent store yields an unset budget.
    fn load_budget(&self) -> ExpenseResult<Budget>;

    /// Replace the stored budget document
    fn save_budget(&self, budget: &Budget) -> ExpenseResult<()>;
}
