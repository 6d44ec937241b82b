//! Export module
//!
//! Writes the ledger out in insertion order:
//! - CSV: spreadsheet-friendly, one row per expense
//! - JSON: the same document shape as expenses.json

pub mod csv;
pub mod json;

pub use self::csv::export_expenses_csv;
pub use self::json::export_expenses_json;

use std::fmt;
use std::str::FromStr;

use crate::error::ExpenseError;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }
}

impl FromStr for ExportFormat {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(ExpenseError::Validation(format!(
                "Unknown export format '{}'. Use csv or json",
                other
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}
