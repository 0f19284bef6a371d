//! Audit log for the expense tracker
//!
//! Every successful mutation (adding, updating or deleting an expense,
//! setting a budget) is appended to `audit.log` as one JSON line, with
//! snapshots of the record before and after the change.
//!
//! - `AuditEntry`: one log line (timestamp, operation, entity, snapshots)
//! - `AuditLogger`: appends to and reads back the JSONL file
//! - `generate_diff`: one-line summary of changed fields for updates

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
