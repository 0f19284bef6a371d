//! Calendar month (1-12) used for filtering and budgets

use chrono::{Datelike, NaiveDate};
use std::fmt;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A month number in `1..=12`, independent of year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(u32);

impl Month {
    /// Create a month, returning `None` outside `1..=12`
    pub fn new(number: i64) -> Option<Self> {
        if (1..=12).contains(&number) {
            Some(Self(number as u32))
        } else {
            None
        }
    }

    /// The month a date falls in
    pub fn of(date: NaiveDate) -> Self {
        Self(date.month())
    }

    pub fn number(&self) -> u32 {
        self.0
    }

    /// English month name ("January")
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.0 - 1) as usize]
    }

    /// Check whether a date falls in this month (any year)
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.month() == self.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
