//! Reports module for the expense tracker
//!
//! Provides the spending summary: a total plus a per-category breakdown,
//! optionally restricted to one month.

pub mod summary;

pub use summary::{CategoryTotal, SummaryReport};
