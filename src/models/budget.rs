//! Monthly budget model
//!
//! A spending ceiling for one calendar month. Budgets are keyed by month
//! number only, so a budget for March applies to March of every year.

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::month::Month;

/// A spending ceiling for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Month number (1-12)
    pub month: u32,

    /// Ceiling for the month
    pub amount: Money,
}

impl Budget {
    /// Create a budget for a month
    pub fn new(month: Month, amount: Money) -> Self {
        Self {
            month: month.number(),
            amount,
        }
    }

    /// Check whether this budget applies to a month
    pub fn applies_to(&self, month: Month) -> bool {
        self.month == month.number()
    }
}
