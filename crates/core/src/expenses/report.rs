//! Expense report totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::range::DateRange;
use super::types::{ExpenseRecord, ExpenseSource};

/// Label for records without a cost category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Total and record count for one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTotal {
    /// Source.
    pub source: ExpenseSource,
    /// Sum of amounts in range.
    pub total: Decimal,
    /// Records in range.
    pub count: usize,
}

/// Expense totals per source over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseReport {
    /// Range the report covers.
    pub range: DateRange,
    /// One row per source, in [`ExpenseSource::ALL`] order.
    pub rows: Vec<SourceTotal>,
    /// Sum of the row totals.
    pub grand_total: Decimal,
    /// Sum of the row counts.
    pub record_count: usize,
}

impl ExpenseReport {
    /// Total for one source.
    #[must_use]
    pub fn total_for(&self, source: ExpenseSource) -> Decimal {
        self.rows
            .iter()
            .find(|row| row.source == source)
            .map_or(Decimal::ZERO, |row| row.total)
    }
}

/// Total for one cost category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Category name.
    pub category: String,
    /// Sum of amounts in range.
    pub total: Decimal,
}

/// Builds the per-source report for records within `range`.
#[must_use]
pub fn expense_report(records: &[ExpenseRecord], range: DateRange) -> ExpenseReport {
    let rows: Vec<SourceTotal> = ExpenseSource::ALL
        .iter()
        .map(|&source| {
            let (total, count) = records
                .iter()
                .filter(|r| r.source == source && range.includes(r.date))
                .fold((Decimal::ZERO, 0usize), |(total, count), r| {
                    (total + r.amount, count + 1)
                });
            SourceTotal { source, total, count }
        })
        .collect();

    ExpenseReport {
        range,
        grand_total: rows.iter().map(|row| row.total).sum(),
        record_count: rows.iter().map(|row| row.count).sum(),
        rows,
    }
}

/// Sums records within `range` by cost category, in order of first appearance.
///
/// Records without a category are grouped under [`UNCATEGORIZED`].
#[must_use]
pub fn totals_by_category(records: &[ExpenseRecord], range: DateRange) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for record in records.iter().filter(|r| range.includes(r.date)) {
        let name = record
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(UNCATEGORIZED);
        match totals.iter_mut().find(|t| t.category == name) {
            Some(entry) => entry.total += record.amount,
            None => totals.push(CategoryTotal {
                category: name.to_string(),
                total: record.amount,
            }),
        }
    }
    totals
}
