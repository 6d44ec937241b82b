//! Storage layer for the expense tracker
//!
//! Two whole-document stores (expenses and budget) behind the
//! `ExpenseStore` / `BudgetStore` traits, with JSON file and in-memory
//! backends, plus the optional audit log.

pub mod budget;
pub mod expenses;
pub mod file_io;
pub mod memory;
pub mod traits;

pub use budget::BudgetRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use memory::{MemoryBudgetStore, MemoryExpenseStore};
pub use traits::{BudgetStore, ExpenseStore};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{paths::ExpensePaths, settings::Settings};
use crate::error::ExpenseResult;

/// Holds the store handles the services operate on
pub struct Storage {
    pub expenses: Box<dyn ExpenseStore>,
    pub budget: Box<dyn BudgetStore>,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// JSON file stores under the configured data directory
    pub fn new(paths: &ExpensePaths, settings: &Settings) -> ExpenseResult<Self> {
        paths.ensure_directories()?;

        let audit = settings
            .audit_log
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            expenses: Box::new(ExpenseRepository::new(paths.expenses_file())),
            budget: Box::new(BudgetRepository::new(paths.budget_file())),
            audit,
        })
    }

    /// Use caller-supplied store handles, without an audit log
    pub fn from_stores(expenses: Box<dyn ExpenseStore>, budget: Box<dyn BudgetStore>) -> Self {
        Self {
            expenses,
            budget,
            audit: None,
        }
    }

    /// Empty in-memory stores
    pub fn in_memory() -> Self {
        Self::from_stores(
            Box::new(MemoryExpenseStore::new()),
            Box::new(MemoryBudgetStore::new()),
        )
    }

    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record an audit entry if auditing is enabled
    ///
    /// Called after the store write has succeeded, so a failure here is
    /// logged as a warning rather than reported as a failed mutation.
    pub fn log(&self, entry: AuditEntry) {
        let Some(logger) = &self.audit else {
            return;
        };
        if let Err(e) = logger.log(&entry) {
            tracing::warn!(
                path = %logger.path().display(),
                operation = %entry.operation,
                error = %e,
                "failed to write audit entry"
            );
        }
    }
}
