//! Audit logging for the expense tracker
//!
//! Records every add, delete, clear and budget change with before/after
//! snapshots in an append-only audit log.
//!
//! - `AuditEntry`: one logged operation with timestamp, operation, entity
//!   information and optional snapshots.
//! - `AuditLogger`: appends entries to the log as line-delimited JSON (JSONL)
//!   and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
