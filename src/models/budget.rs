//! Budget model
//!
//! A single optional monthly spending limit. The document also carries a
//! legacy `amount` field and may hold fields written by other tools; all of
//! them are kept as-is when the limit changes.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Budget settings document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Monthly spending limit; `None` means no budget is set
    #[serde(default)]
    pub limit: Option<Money>,

    /// Legacy field, unused
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<serde_json::Value>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Budget {
    /// Create a budget with a limit set
    pub fn with_limit(limit: Money) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn is_set(&self) -> bool {
        self.limit.is_some()
    }
}
