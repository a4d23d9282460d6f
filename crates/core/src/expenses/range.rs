//! Inclusive date range with open ends.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::ExpenseDate;

/// Inclusive `[from, to]` range. A missing bound is open.
///
/// Comparison is by calendar date only, so `to` covers its whole day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First included day.
    pub from: Option<NaiveDate>,
    /// Last included day.
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Range with both bounds.
    #[must_use]
    pub const fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Range that includes everything.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self { from: None, to: None }
    }

    /// True if neither bound is set.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Returns true if `date` lies within the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }

    /// Optional-date form: an undated value passes only an unbounded range.
    #[must_use]
    pub fn admits(&self, date: Option<NaiveDate>) -> bool {
        match date {
            Some(date) => self.contains(date),
            None => self.is_unbounded(),
        }
    }

    /// Range check for an expense date.
    ///
    /// Salary months compare as their first day. A salary record with no
    /// month is always included.
    #[must_use]
    pub fn includes(&self, date: ExpenseDate) -> bool {
        if self.is_unbounded() {
            return true;
        }
        match date {
            ExpenseDate::Day(day) => self.admits(day),
            ExpenseDate::Month(None) => true,
            ExpenseDate::Month(Some(month)) => self.contains(month.first_day()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::YearMonth;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(date(2025, 1, 1), true)]
    #[case(date(2025, 1, 31), true)]
    #[case(date(2025, 1, 15), true)]
    #[case(date(2024, 12, 31), false)]
    #[case(date(2025, 2, 1), false)]
    fn test_bounds_are_inclusive(#[case] day: NaiveDate, #[case] expected: bool) {
        let range = DateRange::between(date(2025, 1, 1), date(2025, 1, 31));
        assert_eq!(range.contains(day), expected);
    }

    #[test]
    fn test_open_ends() {
        let from_only = DateRange {
            from: Some(date(2025, 6, 1)),
            to: None,
        };
        assert!(from_only.contains(date(2030, 1, 1)));
        assert!(!from_only.contains(date(2025, 5, 31)));

        let to_only = DateRange {
            from: None,
            to: Some(date(2025, 6, 1)),
        };
        assert!(to_only.contains(date(1999, 1, 1)));
        assert!(!to_only.contains(date(2025, 6, 2)));
    }

    #[test]
    fn test_missing_dates() {
        let bounded = DateRange::between(date(2025, 1, 1), date(2025, 1, 31));
        assert!(!bounded.includes(ExpenseDate::Day(None)));
        assert!(bounded.includes(ExpenseDate::Month(None)));
        assert!(DateRange::unbounded().includes(ExpenseDate::Day(None)));
    }

    #[test]
    fn test_salary_month_uses_first_day() {
        let range = DateRange::between(date(2025, 3, 10), date(2025, 4, 30));
        assert!(!range.includes(ExpenseDate::Month(YearMonth::new(2025, 3))));
        assert!(range.includes(ExpenseDate::Month(YearMonth::new(2025, 4))));
    }
}
