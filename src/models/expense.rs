//! Expense model
//!
//! A single recorded expense. Expenses have no stable identifier; within one
//! loaded ledger they are addressed by position only.

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;

/// Timestamp layout used on disk and for month grouping
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// What the money was spent on
    pub name: String,

    /// Amount spent (always positive)
    pub amount: Money,

    pub category: Category,

    /// When the expense was recorded, to the second
    #[serde(with = "date_format")]
    pub date: NaiveDateTime,
}

impl Expense {
    /// Create a new expense stamped with the current local time
    pub fn new(name: impl Into<String>, amount: Money, category: Category) -> Self {
        Self::with_date(name, amount, category, now())
    }

    /// Create an expense with an explicit timestamp (truncated to seconds)
    pub fn with_date(
        name: impl Into<String>,
        amount: Money,
        category: Category,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            name: name.into().trim().to_string(),
            amount,
            category,
            date: truncate_to_seconds(date),
        }
    }

    /// Calendar month key, "YYYY-MM"
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// Check the record invariants
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        if self.amount > Money::MAX {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }

        Ok(())
    }

    /// Case-insensitive substring match against the name
    pub fn name_contains(&self, keyword: &str) -> bool {
        self.name.to_lowercase().contains(&keyword.to_lowercase())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} [{}] ({})",
            self.name,
            self.amount,
            self.category,
            self.date.format(DATE_FORMAT)
        )
    }
}

/// Current local time at second precision
pub fn now() -> NaiveDateTime {
    truncate_to_seconds(Local::now().naive_local())
}

fn truncate_to_seconds(date: NaiveDateTime) -> NaiveDateTime {
    date.with_nanosecond(0).unwrap_or(date)
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than 0 (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount {} exceeds the maximum of {}", amount, Money::MAX)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

mod date_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}
