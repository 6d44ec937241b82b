//! User settings for the expense tracker
//!
//! Display preferences and the audit log switch, stored in settings.json.

use std::io::ErrorKind;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::DATE_FORMAT;
use crate::storage::write_json_atomic;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Timestamp format for listings (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether mutations are recorded in audit.log
    #[serde(default = "default_audit_log")]
    pub audit_log: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    DATE_FORMAT.to_string()
}

fn default_audit_log() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            audit_log: default_audit_log(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_default(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        let contents = match std::fs::read_to_string(&settings_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Settings::default()),
            Err(e) => {
                return Err(ExpenseError::Io(format!(
                    "Failed to read settings file: {}",
                    e
                )))
            }
        };

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| ExpenseError::Config(format!("Failed to parse settings file: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check what serde cannot: `date_format` must be a valid strftime string
    pub fn validate(&self) -> Result<(), ExpenseError> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ExpenseError::Config(format!(
                "Invalid date_format '{}' in settings",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        self.validate()?;
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.date_format, "%Y-%m-%d %H:%M:%S");
        assert!(settings.audit_log);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(Settings::load_or_default(&paths).unwrap(), Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "€".to_string(),
            audit_log: false,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        assert_eq!(Settings::load_or_default(&paths).unwrap(), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "£"}"#).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "£");
        assert!(loaded.audit_log);
    }

    #[test]
    fn test_invalid_date_format_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%Y-%Q"}"#).unwrap();

        assert!(matches!(
            Settings::load_or_default(&paths),
            Err(ExpenseError::Config(_))
        ));

        let custom = Settings {
            date_format: "%d/%m/%Y".to_string(),
            ..Settings::default()
        };
        assert!(custom.validate().is_ok());
    }

    #[test]
    fn test_save_rejects_invalid_date_format() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            date_format: "%Q".to_string(),
            ..Settings::default()
        };

        assert!(settings.save(&paths).is_err());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_unreadable_settings_path_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("blocker"), "").unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().join("blocker"));

        assert!(matches!(
            Settings::load_or_default(&paths),
            Err(ExpenseError::Io(_))
        ));
    }

    #[test]
    fn test_corrupt_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{").unwrap();

        assert!(matches!(
            Settings::load_or_default(&paths),
            Err(ExpenseError::Config(_))
        ));
    }
}
