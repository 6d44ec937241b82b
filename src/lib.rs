//! expense-cli - Terminal-based personal expense tracker
//!
//! This library provides the core functionality for the `expense` command:
//! recording expenses, checking them against a single budget limit, and
//! reporting spending by category and by month.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory and settings management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, expenses, budget)
//! - `storage`: JSON document stores and in-memory stand-ins
//! - `services`: Business logic layer
//! - `reports`: Aggregations and budget status
//! - `display`: Terminal formatting
//! - `export`: CSV and JSON export
//! - `audit`: Audit logging system
//! - `cli`: Command handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_cli::config::{paths::ExpensePaths, settings::Settings};
//! use expense_cli::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_default(&paths)?;
//! let storage = Storage::new(&paths, &settings)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
