//! Calendar month arithmetic shared by salary records and trend buckets.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Error parsing a `YYYY-MM` month.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid month '{0}', expected YYYY-MM")]
pub struct InvalidMonth(pub String);

/// A calendar month. The month is always 1-12.
///
/// Serializes as `"YYYY-MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a month, returning `None` when `month` is not 1-12.
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month containing `date`.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Calendar year.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Month of year, 1-12.
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// Zero-based month index (January = 0).
    #[must_use]
    pub const fn month0(self) -> u32 {
        self.month - 1
    }

    /// First calendar day of the month.
    #[must_use]
    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// The month `n` months before this one.
    #[must_use]
    pub fn minus_months(self, n: u32) -> Self {
        let index = i64::from(self.year) * 12 + i64::from(self.month0()) - i64::from(n);
        let year = index.div_euclid(12);
        let month0 = index.rem_euclid(12);
        Self {
            year: i32::try_from(year).unwrap_or(i32::MIN),
            month: u32::try_from(month0).unwrap_or(0) + 1,
        }
    }

    /// Short display label, e.g. `"Nov 2025"`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{} {}", MONTH_ABBREVIATIONS[self.month0() as usize], self.year)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = InvalidMonth;

    /// Parses `YYYY-MM`. A trailing day (`YYYY-MM-DD`) is tolerated and ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidMonth(s.to_string());
        let mut parts = s.trim().split('-');
        let year = parts
            .next()
            .and_then(|y| y.parse::<i32>().ok())
            .ok_or_else(invalid)?;
        let month = parts
            .next()
            .and_then(|m| m.parse::<u32>().ok())
            .ok_or_else(invalid)?;
        Self::new(year, month).ok_or_else(invalid)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = InvalidMonth;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<YearMonth> for String {
    fn from(month: YearMonth) -> Self {
        month.to_string()
    }
}
