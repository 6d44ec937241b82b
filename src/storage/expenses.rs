//! Expense repository for JSON storage
//!
//! Manages loading and saving the expense list in expenses.json. The file is
//! a bare JSON array of `{name, amount, category, date}` objects.

use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

use super::file_io::{read_json, write_json_atomic};
use super::traits::ExpenseStore;

/// JSON file backed expense store
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExpenseStore for ExpenseRepository {
    fn load_collection(&self) -> ExpenseResult<Vec<Expense>> {
        let expenses: Vec<Expense> = read_json(&self.path)?;

        // A record that parses but breaks the invariants is corruption too
        for (i, expense) in expenses.iter().enumerate() {
            expense.validate().map_err(|e| {
                ExpenseError::malformed(&self.path, format!("record {}: {}", i + 1, e))
            })?;
        }

        tracing::debug!(count = expenses.len(), "loaded expenses");
        Ok(expenses)
    }

    fn save_collection(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        write_json_atomic(&self.path, expenses)
    }
}
