//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::Path;

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A user-supplied value violates a field invariant
    #[error("Validation error: {0}")]
    Validation(String),

    /// A 1-based position that does not exist in the ledger
    #[error("No expense at position {index} (ledger has {len})")]
    IndexOutOfRange { index: i64, len: usize },

    /// A backing store exists but does not hold the expected document
    #[error("Malformed store {path}: {reason}")]
    MalformedStore { path: String, reason: String },
}

impl ExpenseError {
    /// Create a malformed store error for a file path
    pub fn malformed(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::MalformedStore {
            path: path.as_ref().display().to_string(),
            reason: reason.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an out-of-range position error
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Check if this is a corrupted store error
    pub fn is_malformed_store(&self) -> bool {
        matches!(self, Self::MalformedStore { .. })
    }

    /// Errors the interactive menu reports and then carries on from
    pub fn is_recoverable(&self) -> bool {
        self.is_validation() || self.is_index_out_of_range()
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Io(format!("CSV: {}", err))
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
