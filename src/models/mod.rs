//! Core data models for the expense tracker
//!
//! This module contains the data structures that represent the expense
//! domain: money amounts, categories, expense records and the budget.

pub mod budget;
pub mod category;
pub mod expense;
pub mod money;

pub use budget::Budget;
pub use category::Category;
pub use expense::{Expense, ExpenseValidationError, DATE_FORMAT};
pub use money::{Money, MoneyParseError};
