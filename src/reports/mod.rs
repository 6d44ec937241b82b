//! Reports: aggregation over a ledger snapshot
//!
//! Every function here is pure. Callers load the ledger once and pass the
//! slice in, so a report never observes a half-applied mutation.
//!
//! - `total`: grand total of a sequence of expenses
//! - `category`: per-category totals in fixed category order
//! - `monthly`: per-month totals keyed by "YYYY-MM"
//! - `budget_status`: comparison of a total against the budget limit

pub mod budget_status;
pub mod category;
pub mod monthly;

pub use budget_status::{budget_status, BudgetReport, BudgetStatus};
pub use category::{by_category, CategoryBreakdown, CategoryTotal};
pub use monthly::{by_month, MonthlyReport, MonthTotal};

use crate::models::{Expense, Money};

/// Sum of all amounts; zero for an empty slice
pub fn total(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Share of `part` in `whole` as a percentage (0 when `whole` is zero)
pub(crate) fn percentage_of(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        0.0
    } else {
        part.cents() as f64 / whole.cents() as f64 * 100.0
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;

    use crate::models::{Category, Expense, Money};

    /// Expense at noon on the given day
    pub fn expense(name: &str, cents: i64, category: Category, ymd: (i32, u32, u32)) -> Expense {
        let date = NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        Expense::with_date(name, Money::from_cents(cents), category, date)
    }
}
