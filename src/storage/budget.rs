//! Budget repository for JSON storage
//!
//! Manages loading and saving the budget document in budget.json.

use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Budget;

use super::file_io::{read_json, write_json_atomic};
use super::traits::BudgetStore;

/// JSON file backed budget store
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    path: PathBuf,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BudgetStore for BudgetRepository {
    fn load_budget(&self) -> ExpenseResult<Budget> {
        let budget: Budget = read_json(&self.path)?;

        if let Some(limit) = budget.limit {
            if !limit.is_positive() {
                return Err(ExpenseError::malformed(
                    &self.path,
                    format!("budget limit must be positive, found {}", limit),
                ));
            }
        }

        Ok(budget)
    }

    fn save_budget(&self, budget: &Budget) -> ExpenseResult<()> {
        write_json_atomic(&self.path, budget)
    }
}
