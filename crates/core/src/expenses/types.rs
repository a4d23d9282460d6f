//! Expense record types.

use std::fmt;

use chrono::NaiveDate;
use ledgerdesk_shared::types::ExpenseId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::YearMonth;

/// Where an expense record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseSource {
    /// Operational expense.
    General,
    /// Staff salary.
    Salary,
    /// Purchase invoice counted as expense.
    Purchase,
}

impl ExpenseSource {
    /// All sources in report order.
    pub const ALL: [Self; 3] = [Self::General, Self::Salary, Self::Purchase];

    /// Report row label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "General Expense",
            Self::Salary => "Salary Expense",
            Self::Purchase => "Purchase Expense",
        }
    }
}

impl fmt::Display for ExpenseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a record is dated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseDate {
    /// A calendar date, if the record has one.
    Day(Option<NaiveDate>),
    /// A salary month, if the record has one.
    Month(Option<YearMonth>),
}

impl ExpenseDate {
    /// Month the record falls in.
    #[must_use]
    pub fn year_month(self) -> Option<YearMonth> {
        match self {
            Self::Day(day) => day.map(YearMonth::of),
            Self::Month(month) => month,
        }
    }
}

/// Salary amount components. Older records carry only `amount`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryComponents {
    /// Precomputed total, used as-is when present.
    pub total_salary: Option<Decimal>,
    /// Base pay.
    pub base_amount: Option<Decimal>,
    /// Legacy single amount, used when `base_amount` is absent.
    pub amount: Option<Decimal>,
    /// Allowance.
    pub allowance: Option<Decimal>,
    /// Bonus.
    pub bonus: Option<Decimal>,
}

impl SalaryComponents {
    /// `total_salary`, else base (or legacy amount) + allowance + bonus.
    #[must_use]
    pub fn total(&self) -> Decimal {
        if let Some(total) = self.total_salary {
            return total;
        }
        let base = self.base_amount.or(self.amount).unwrap_or_default();
        base + self.allowance.unwrap_or_default() + self.bonus.unwrap_or_default()
    }
}

/// A normalized expense from any source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Record ID within its source.
    pub id: ExpenseId,
    /// Source.
    pub source: ExpenseSource,
    /// Cost category name, if any.
    pub category: Option<String>,
    /// Amount.
    pub amount: Decimal,
    /// Record date.
    pub date: ExpenseDate,
}

impl ExpenseRecord {
    /// A general expense dated by its expense date.
    #[must_use]
    pub fn general(
        id: ExpenseId,
        category: Option<String>,
        amount: Decimal,
        date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            source: ExpenseSource::General,
            category,
            amount,
            date: ExpenseDate::Day(date),
        }
    }

    /// A salary record dated by its salary month.
    #[must_use]
    pub fn salary(id: ExpenseId, components: &SalaryComponents, month: Option<YearMonth>) -> Self {
        Self {
            id,
            source: ExpenseSource::Salary,
            category: None,
            amount: components.total(),
            date: ExpenseDate::Month(month),
        }
    }

    /// A purchase dated by its purchase date.
    #[must_use]
    pub fn purchase(id: ExpenseId, total_payable: Decimal, date: Option<NaiveDate>) -> Self {
        Self {
            id,
            source: ExpenseSource::Purchase,
            category: None,
            amount: total_payable,
            date: ExpenseDate::Day(date),
        }
    }
}
