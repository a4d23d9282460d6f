//! Report data types.

use chrono::NaiveDate;
use ledgerdesk_shared::types::CustomerId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::expenses::{CategoryTotal, DateRange};

/// One line of a year-over-year comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearComparison {
    /// Line label.
    pub item: String,
    /// Amount for the report year.
    pub current_year: Decimal,
    /// Amount for the year before.
    pub previous_year: Decimal,
    /// Change in percent, two decimal places.
    pub percent_change: Decimal,
}

/// Totals for one year of the Profit & Loss.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitLossInput {
    /// Sales total.
    pub sales: Decimal,
    /// Credits to income accounts from journals.
    pub other_income: Decimal,
    /// General expenses per cost category.
    pub expense_by_category: Vec<CategoryTotal>,
    /// Salary expense.
    pub salary: Decimal,
    /// Debits to expense accounts from journals.
    pub journal_expense: Decimal,
}

/// Profit & Loss for a year against the year before.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitLossReport {
    /// Report year.
    pub year: i32,
    /// Sales and Other Income.
    pub income: Vec<YearComparison>,
    /// Category rows, then Salary Expense and Journal Expenses.
    pub expenses: Vec<YearComparison>,
    /// Total income.
    pub gross_profit: YearComparison,
    /// Sum of expense rows.
    pub total_expenses: YearComparison,
    /// Gross profit less total expenses.
    pub net_profit: YearComparison,
}

/// Sales totals over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesSummary {
    /// Range covered.
    pub range: DateRange,
    /// Number of sales in range.
    pub count: usize,
    /// Sum of total payable.
    pub total_sales: Decimal,
    /// Sum of valid payments.
    pub total_paid: Decimal,
    /// `total_sales - total_paid`.
    pub total_due: Decimal,
}

/// Kind of statement row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementRowKind {
    /// Previous due carried in.
    Opening,
    /// Sale invoice.
    Invoice,
    /// Payment received.
    Payment,
}

/// A customer statement row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRow {
    /// Row kind.
    pub kind: StatementRowKind,
    /// Row date.
    pub date: Option<NaiveDate>,
    /// Invoice number or payment reference.
    pub reference: String,
    /// Narrative.
    pub description: String,
    /// Amount charged.
    pub debit: Decimal,
    /// Amount received.
    pub credit: Decimal,
    /// Balance after this row.
    pub balance: Decimal,
}

/// Customer the statement is for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementCustomer {
    /// Customer ID.
    pub id: CustomerId,
    /// Customer name.
    pub name: String,
    /// Due carried over from before the first invoice.
    pub previous_due: Decimal,
}

/// Invoices and payments of one customer with a running balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerStatement {
    /// Customer.
    pub customer: StatementCustomer,
    /// Rows in date order.
    pub rows: Vec<StatementRow>,
    /// Opening balance.
    pub opening_balance: Decimal,
    /// Sum of invoice totals.
    pub total_invoiced: Decimal,
    /// Sum of payments.
    pub total_received: Decimal,
    /// Balance after the last row.
    pub closing_balance: Decimal,
}
