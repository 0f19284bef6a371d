//! Identifier types
//!
//! Expense ids are small positive integers assigned sequentially as
//! `max(existing) + 1`, so a deleted id is never handed out again while a
//! higher id exists.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// The id given to the first expense of an empty ledger
    pub const FIRST: ExpenseId = ExpenseId(1);

    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The id following this one
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Next id for a collection: one past the largest, or `FIRST` when empty
    pub fn next_after<I: IntoIterator<Item = ExpenseId>>(ids: I) -> Self {
        ids.into_iter()
            .max()
            .map(|max| max.next())
            .unwrap_or(Self::FIRST)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<u64> for ExpenseId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
