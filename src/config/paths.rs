//! Path management for the expense tracker
//!
//! All documents live side by side in one directory. By default that is the
//! current working directory; the CLI can point it elsewhere with
//! `--data-dir` or `EXPENSE_CLI_DATA_DIR`.

use std::path::PathBuf;

use crate::error::ExpenseError;

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Use the current working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = std::env::current_dir().map_err(|e| {
            ExpenseError::Config(format!("Could not determine working directory: {}", e))
        })?;
        Ok(Self { base_dir })
    }

    /// Create ExpensePaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Resolve an optional override, falling back to the working directory
    pub fn resolve(data_dir: Option<PathBuf>) -> Result<Self, ExpenseError> {
        match data_dir {
            Some(dir) => Ok(Self::with_base_dir(dir)),
            None => Self::new(),
        }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join("expenses.json")
    }

    /// Get the path to budget.json
    pub fn budget_file(&self) -> PathBuf {
        self.base_dir.join("budget.json")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create data directory: {}", e)))
    }
}
