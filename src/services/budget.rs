//! Budget service
//!
//! Reads and updates the single budget limit, and checks ledger spending
//! against it.

use crate::audit::{AuditEntry, EntityType};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Budget, Money};
use crate::reports::BudgetReport;
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// The stored budget document
    pub fn get(&self) -> ExpenseResult<Budget> {
        self.storage.budget.load_budget()
    }

    /// The current limit, if one is set
    pub fn get_limit(&self) -> ExpenseResult<Option<Money>> {
        Ok(self.get()?.limit)
    }

    /// Set the limit, keeping every other field of the budget document
    pub fn set_limit(&self, value: Money) -> ExpenseResult<Budget> {
        if !value.is_positive() {
            return Err(ExpenseError::Validation(format!(
                "Budget must be greater than 0 (got {})",
                value
            )));
        }

        let before = self.get()?;
        let mut budget = before.clone();
        budget.limit = Some(value);
        self.storage.budget.save_budget(&budget)?;

        tracing::info!(limit = %value, "budget limit set");
        self.storage.log(AuditEntry::update(
            EntityType::Budget,
            "budget",
            None,
            &before,
            &budget,
        ));

        Ok(budget)
    }

    /// Check all recorded spending, or one "YYYY-MM" month of it, against
    /// the limit
    pub fn check(&self, month: Option<&str>) -> ExpenseResult<BudgetReport> {
        let budget = self.get()?;
        let expenses = self.storage.expenses.load_collection()?;

        Ok(match month {
            Some(month) => BudgetReport::for_month(&expenses, &budget, month),
            None => BudgetReport::generate(&expenses, &budget),
        })
    }
}
