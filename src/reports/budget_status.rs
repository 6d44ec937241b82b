//! Budget status: spending compared against the limit

use crate::models::{Budget, Expense, Money};

use super::total;

/// Where spending stands relative to the budget limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// No limit has been set
    Unset,
    /// Comfortably within the limit
    Ok { remaining: Money },
    /// Less than 20% of the limit remains
    NearLimit { remaining: Money },
    /// Spending is over the limit
    Exceeded { overage: Money },
}

impl BudgetStatus {
    pub fn is_exceeded(&self) -> bool {
        matches!(self, Self::Exceeded { .. })
    }
}

/// Compare a spending total against the budget
///
/// Exceeded is checked first, then near-limit (`remaining < 20% of limit`,
/// strict), otherwise Ok.
pub fn budget_status(spent: Money, budget: &Budget) -> BudgetStatus {
    let Some(limit) = budget.limit else {
        return BudgetStatus::Unset;
    };

    let remaining = limit - spent;

    if spent > limit {
        BudgetStatus::Exceeded {
            overage: spent - limit,
        }
    } else if remaining.cents().saturating_mul(5) < limit.cents() {
        // remaining < limit * 0.2, in exact integer cents
        BudgetStatus::NearLimit { remaining }
    } else {
        BudgetStatus::Ok { remaining }
    }
}

/// Budget check for display
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetReport {
    pub limit: Option<Money>,
    pub spent: Money,
    pub status: BudgetStatus,
    /// Month the spending was restricted to, if any ("YYYY-MM")
    pub month: Option<String>,
}

impl BudgetReport {
    /// Check every expense against the budget
    pub fn generate(expenses: &[Expense], budget: &Budget) -> Self {
        let spent = total(expenses);
        Self {
            limit: budget.limit,
            spent,
            status: budget_status(spent, budget),
            month: None,
        }
    }

    /// Check only the expenses recorded in `month` ("YYYY-MM")
    pub fn for_month(expenses: &[Expense], budget: &Budget, month: &str) -> Self {
        let in_month: Vec<Expense> = expenses
            .iter()
            .filter(|e| e.month_key() == month)
            .cloned()
            .collect();

        Self {
            month: Some(month.to_string()),
            ..Self::generate(&in_month, budget)
        }
    }

    /// Percentage of the limit used, if a limit is set
    pub fn percent_used(&self) -> Option<f64> {
        self.limit.map(|limit| super::percentage_of(self.spent, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::reports::test_support::expense;

    fn limit(units: i64) -> Budget {
        Budget::with_limit(Money::from_dollars_cents(units, 0))
    }

    fn spent(units: i64) -> Money {
        Money::from_dollars_cents(units, 0)
    }

    #[test]
    fn test_unset() {
        assert_eq!(budget_status(spent(50), &Budget::default()), BudgetStatus::Unset);
    }

    #[test]
    fn test_boundary_at_twenty_percent_is_ok() {
        // remaining 20 is not strictly less than 20% of 100
        assert_eq!(
            budget_status(spent(80), &limit(100)),
            BudgetStatus::Ok { remaining: spent(20) }
        );
    }

    #[test]
    fn test_near_limit() {
        assert_eq!(
            budget_status(spent(90), &limit(100)),
            BudgetStatus::NearLimit { remaining: spent(10) }
        );
        assert_eq!(
            budget_status(Money::from_cents(8001), &limit(100)),
            BudgetStatus::NearLimit {
                remaining: Money::from_cents(1999)
            }
        );
    }

    #[test]
    fn test_exactly_at_limit_is_near_limit() {
        assert_eq!(
            budget_status(spent(100), &limit(100)),
            BudgetStatus::NearLimit { remaining: Money::zero() }
        );
    }

    #[test]
    fn test_exceeded() {
        let status = budget_status(spent(120), &limit(100));
        assert_eq!(status, BudgetStatus::Exceeded { overage: spent(20) });
        assert!(status.is_exceeded());
    }

    #[test]
    fn test_fractional_threshold() {
        // limit 0.99 -> threshold 0.198; remaining 0.19 is below it
        let budget = Budget::with_limit(Money::from_cents(99));
        assert!(matches!(
            budget_status(Money::from_cents(80), &budget),
            BudgetStatus::NearLimit { .. }
        ));
        assert!(matches!(
            budget_status(Money::from_cents(79), &budget),
            BudgetStatus::Ok { .. }
        ));
    }

    #[test]
    fn test_largest_amounts_do_not_overflow() {
        let expenses = vec![
            expense("Yacht", Money::MAX.cents(), Category::Shopping, (2025, 3, 1)),
            expense("Yacht", Money::MAX.cents(), Category::Shopping, (2025, 3, 2)),
        ];

        let report = BudgetReport::generate(&expenses, &Budget::with_limit(Money::MAX));
        assert_eq!(report.spent.cents(), 2 * Money::MAX.cents());
        assert_eq!(report.status, BudgetStatus::Exceeded { overage: Money::MAX });

        assert_eq!(
            budget_status(Money::zero(), &Budget::with_limit(Money::MAX)),
            BudgetStatus::Ok { remaining: Money::MAX }
        );
    }

    #[test]
    fn test_report_for_month() {
        let expenses = vec![
            expense("Old", 50000, Category::Shopping, (2025, 1, 10)),
            expense("New", 2500, Category::Food, (2025, 2, 10)),
        ];
        let budget = limit(100);

        let all = BudgetReport::generate(&expenses, &budget);
        assert!(all.status.is_exceeded());
        assert_eq!(all.percent_used(), Some(525.0));

        let feb = BudgetReport::for_month(&expenses, &budget, "2025-02");
        assert_eq!(feb.spent.cents(), 2500);
        assert_eq!(feb.status, BudgetStatus::Ok { remaining: spent(75) });
        assert_eq!(feb.month.as_deref(), Some("2025-02"));
    }
}
