//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer:
//! validation, the load-mutate-save cycle, and audit logging.

pub mod budget;
pub mod ledger;

pub use budget::BudgetService;
pub use ledger::LedgerService;
