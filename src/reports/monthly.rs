//! Spending by calendar month

use std::collections::BTreeMap;

use crate::models::{Expense, Money};

/// Per-month totals keyed by "YYYY-MM"
///
/// Keys sort lexicographically, which for this format is chronological.
pub fn by_month(expenses: &[Expense]) -> BTreeMap<String, Money> {
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.month_key()).or_default() += expense.amount;
    }
    totals
}

/// One month of the monthly report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthTotal {
    /// "YYYY-MM"
    pub month: String,
    pub total: Money,
    pub count: usize,
}

/// Monthly report, oldest month first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyReport {
    pub months: Vec<MonthTotal>,
    pub total: Money,
}

impl MonthlyReport {
    pub fn generate(expenses: &[Expense]) -> Self {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for expense in expenses {
            *counts.entry(expense.month_key()).or_default() += 1;
        }

        let months: Vec<MonthTotal> = by_month(expenses)
            .into_iter()
            .map(|(month, total)| MonthTotal {
                count: counts.get(&month).copied().unwrap_or(0),
                month,
                total,
            })
            .collect();

        let total = months.iter().map(|m| m.total).sum();
        Self { months, total }
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}
