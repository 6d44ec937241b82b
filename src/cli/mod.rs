//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod export;
pub mod history;
pub mod menu;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_add, handle_clear, handle_delete, handle_list, handle_search};
pub use export::handle_export;
pub use history::handle_history;
pub use menu::Menu;
pub use report::{handle_categories, handle_monthly};
