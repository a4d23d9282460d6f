//! Monthly sales vs. expense trend.
//!
//! Buckets cover the `n` months ending with the current month, oldest
//! first. Records outside the window, or without a date, are dropped.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::YearMonth;
use crate::expenses::ExpenseRecord;
use crate::payments::LedgerDocument;

/// Anything that contributes an amount to a calendar month.
pub trait MonthlyAmount {
    /// Month the amount belongs to, if known.
    fn year_month(&self) -> Option<YearMonth>;

    /// Amount contributed.
    fn monthly_amount(&self) -> Decimal;
}

impl MonthlyAmount for LedgerDocument {
    fn year_month(&self) -> Option<YearMonth> {
        self.document_date.map(YearMonth::of)
    }

    fn monthly_amount(&self) -> Decimal {
        self.total_payable_amount
    }
}

impl MonthlyAmount for ExpenseRecord {
    fn year_month(&self) -> Option<YearMonth> {
        self.date.year_month()
    }

    fn monthly_amount(&self) -> Decimal {
        self.amount
    }
}

/// One month of the trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBucket {
    /// Calendar month.
    pub month: YearMonth,
    /// Short label, e.g. `"Nov 2025"`.
    pub label: String,
    /// Sales total.
    pub sales: Decimal,
    /// Expense total.
    pub expenses: Decimal,
}

impl MonthBucket {
    fn empty(month: YearMonth) -> Self {
        Self {
            month,
            label: month.label(),
            sales: Decimal::ZERO,
            expenses: Decimal::ZERO,
        }
    }

    /// Calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.month.year()
    }

    /// Zero-based month (January = 0).
    #[must_use]
    pub const fn month0(&self) -> u32 {
        self.month.month0()
    }
}

/// The `months` calendar months ending with the month of `today`, oldest first.
#[must_use]
pub fn month_window(today: NaiveDate, months: u32) -> Vec<YearMonth> {
    let current = YearMonth::of(today);
    (0..months).rev().map(|back| current.minus_months(back)).collect()
}

fn bucket_mut(buckets: &mut [MonthBucket], month: Option<YearMonth>) -> Option<&mut MonthBucket> {
    let month = month?;
    buckets.iter_mut().find(|b| b.month == month)
}

/// Sums sales and expenses into the trailing `months` month buckets.
#[must_use]
pub fn monthly_trend<S: MonthlyAmount, E: MonthlyAmount>(
    today: NaiveDate,
    months: u32,
    sales: &[S],
    expenses: &[E],
) -> Vec<MonthBucket> {
    let mut buckets: Vec<MonthBucket> = month_window(today, months)
        .into_iter()
        .map(MonthBucket::empty)
        .collect();
    for sale in sales {
        if let Some(bucket) = bucket_mut(&mut buckets, sale.year_month()) {
            bucket.sales += sale.monthly_amount();
        }
    }
    for expense in expenses {
        if let Some(bucket) = bucket_mut(&mut buckets, expense.year_month()) {
            bucket.expenses += expense.monthly_amount();
        }
    }
    buckets
}

fn month_total<T: MonthlyAmount>(items: &[T], month: YearMonth) -> Decimal {
    items
        .iter()
        .filter(|item| item.year_month() == Some(month))
        .map(MonthlyAmount::monthly_amount)
        .sum()
}

/// Sales, expenses and net for a single month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySnapshot {
    /// Calendar month.
    pub month: YearMonth,
    /// Sales total.
    pub sales: Decimal,
    /// Expense total.
    pub expenses: Decimal,
    /// `sales - expenses`.
    pub net: Decimal,
}

impl MonthlySnapshot {
    /// Totals for `month`.
    #[must_use]
    pub fn for_month<S: MonthlyAmount, E: MonthlyAmount>(
        month: YearMonth,
        sales: &[S],
        expenses: &[E],
    ) -> Self {
        let sales = month_total(sales, month);
        let expenses = month_total(expenses, month);

        Self {
            month,
            sales,
            expenses,
            net: sales - expenses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expenses::SalaryComponents;
    use crate::payments::DocumentKind;
    use ledgerdesk_shared::types::{DocumentId, ExpenseId};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sale(id: i64, total: Decimal, on: Option<NaiveDate>) -> LedgerDocument {
        LedgerDocument {
            id: DocumentId::new(id),
            kind: DocumentKind::Sale,
            invoice_no: None,
            document_date: on,
            counterparty_id: None,
            counterparty_name: None,
            total_payable_amount: total,
            payments: vec![],
        }
    }

    fn salary(id: i64, amount: Decimal, month: &str) -> ExpenseRecord {
        let components = SalaryComponents {
            amount: Some(amount),
            ..SalaryComponents::default()
        };
        ExpenseRecord::salary(ExpenseId::new(id), &components, month.parse().ok())
    }

    #[test]
    fn test_window_crosses_year_oldest_first() {
        let labels: Vec<String> = month_window(date(2026, 2, 14), 6)
            .into_iter()
            .map(YearMonth::label)
            .collect();
        assert_eq!(
            labels,
            vec!["Sep 2025", "Oct 2025", "Nov 2025", "Dec 2025", "Jan 2026", "Feb 2026"]
        );
        assert!(month_window(date(2026, 2, 14), 0).is_empty());
    }

    #[test]
    fn test_trend_buckets() {
        let sales = vec![
            sale(1, dec!(1000), Some(date(2025, 11, 3))),
            sale(2, dec!(500), Some(date(2025, 11, 28))),
            sale(3, dec!(700), Some(date(2025, 7, 1))),
            sale(4, dec!(999), Some(date(2025, 5, 31))),
            sale(5, dec!(50), None),
        ];
        let expenses = vec![
            ExpenseRecord::general(ExpenseId::new(1), None, dec!(300), Some(date(2025, 11, 10))),
            salary(1, dec!(20000), "2025-10"),
            salary(2, dec!(20000), "2024-10"),
        ];

        let trend = monthly_trend(date(2025, 11, 24), 6, &sales, &expenses);
        assert_eq!(trend.len(), 6);

        let first = &trend[0];
        assert_eq!((first.year(), first.month0()), (2025, 5));
        assert_eq!(first.label, "Jun 2025");
        assert_eq!(first.sales, dec!(0));

        assert_eq!(trend[1].sales, dec!(700));
        assert_eq!(trend[4].expenses, dec!(20000));

        let last = &trend[5];
        assert_eq!((last.year(), last.month0()), (2025, 10));
        assert_eq!(last.sales, dec!(1500));
        assert_eq!(last.expenses, dec!(300));

        let total: Decimal = trend.iter().map(|b| b.sales).sum();
        assert_eq!(total, dec!(2200));
    }

    #[test]
    fn test_monthly_snapshot() {
        let sales = vec![
            sale(1, dec!(8000), Some(date(2025, 11, 3))),
            sale(2, dec!(4000), Some(date(2025, 10, 3))),
        ];
        let expenses = vec![
            ExpenseRecord::general(ExpenseId::new(1), None, dec!(3000), Some(date(2025, 11, 10))),
            salary(1, dec!(9000), "2025-11"),
        ];

        let month = YearMonth::of(date(2025, 11, 24));
        let snapshot = MonthlySnapshot::for_month(month, &sales, &expenses);
        assert_eq!(snapshot.sales, dec!(8000));
        assert_eq!(snapshot.expenses, dec!(12000));
        assert_eq!(snapshot.net, dec!(-4000));
    }
}
