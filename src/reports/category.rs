//! Spending by category

use std::collections::BTreeMap;

use crate::models::{Category, Expense, Money};

use super::percentage_of;

/// Per-category totals
///
/// Iterates in the fixed category order (Food first, Other last). Categories
/// with no spending are absent.
pub fn by_category(expenses: &[Expense]) -> BTreeMap<Category, Money> {
    let mut totals: BTreeMap<Category, Money> = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.category).or_default() += expense.amount;
    }
    totals.retain(|_, total| !total.is_zero());
    totals
}

/// One row of the category breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
    /// Number of expenses in the category
    pub count: usize,
    /// Share of the grand total, 0-100
    pub percentage: f64,
}

/// Category breakdown report
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub rows: Vec<CategoryTotal>,
    pub total: Money,
}

impl CategoryBreakdown {
    pub fn generate(expenses: &[Expense]) -> Self {
        let totals = by_category(expenses);
        let total: Money = totals.values().sum();

        let rows = totals
            .into_iter()
            .map(|(category, amount)| CategoryTotal {
                category,
                total: amount,
                count: expenses.iter().filter(|e| e.category == category).count(),
                percentage: percentage_of(amount, total),
            })
            .collect();

        Self { rows, total }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
