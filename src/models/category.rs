//! Expense categories
//!
//! Categories form a closed set. The declaration order is the display order
//! used by every report, and `Ord` follows it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ExpenseError;

/// Classification applied to every expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transportation,
    Entertainment,
    Utilities,
    Healthcare,
    Shopping,
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Transportation,
        Category::Entertainment,
        Category::Utilities,
        Category::Healthcare,
        Category::Shopping,
        Category::Other,
    ];

    /// Display name, identical to the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Healthcare => "Healthcare",
            Self::Shopping => "Shopping",
            Self::Other => "Other",
        }
    }

    /// Look up a category by its 1-based menu number
    pub fn from_menu_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    /// 1-based menu number of this category
    pub fn menu_number(&self) -> usize {
        Self::ALL
            .iter()
            .position(|c| c == self)
            .map_or(Self::ALL.len(), |i| i + 1)
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Other
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ExpenseError;

    /// Accepts a category name (any case) or its menu number
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(number) = s.parse::<usize>() {
            return Self::from_menu_number(number).ok_or_else(|| {
                ExpenseError::Validation(format!(
                    "Category number must be between 1 and {}",
                    Self::ALL.len()
                ))
            });
        }

        Self::ALL
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| {
                ExpenseError::Validation(format!(
                    "Unknown category '{}'. Choose one of: {}",
                    s,
                    Self::ALL.map(|c| c.name()).join(", ")
                ))
            })
    }
}
