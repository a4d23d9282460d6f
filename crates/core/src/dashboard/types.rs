//! Dashboard data types.

use chrono::NaiveDate;
use ledgerdesk_shared::config::ReportConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::YearMonth;
use crate::expenses::ExpenseRecord;
use crate::inventory::{InventorySnapshot, StockItem, StockStatus};
use crate::payments::{DocumentBalance, LedgerDocument};
use crate::trend::{MonthBucket, MonthlyAmount, MonthlySnapshot, monthly_trend};

/// Records the dashboard is computed from.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    /// Sales in backend order (newest first).
    pub sales: Vec<LedgerDocument>,
    /// General and salary expenses.
    pub expenses: Vec<ExpenseRecord>,
    /// Stock items.
    pub stocks: Vec<StockItem>,
    /// Number of customers.
    pub customer_count: usize,
    /// Number of vendors.
    pub vendor_count: usize,
}

/// Counts shown on the dashboard cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardCounts {
    /// Sales invoices.
    pub sales: usize,
    /// Sales invoices dated this month.
    pub sales_this_month: usize,
    /// Customers.
    pub customers: usize,
    /// Vendors.
    pub vendors: usize,
    /// Stock items.
    pub stock_items: usize,
}

/// Dashboard response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardView {
    /// Date the dashboard was built for.
    pub as_of: NaiveDate,
    /// Sales, expenses and net for the current month.
    pub this_month: MonthlySnapshot,
    /// Record counts.
    pub counts: DashboardCounts,
    /// Inventory totals.
    pub inventory: InventorySnapshot,
    /// Items at or below their reorder level, or the configured threshold
    /// when they have none.
    pub low_stock_items: Vec<StockItem>,
    /// Most recent sales invoices.
    pub recent_invoices: Vec<DocumentBalance>,
    /// Sales vs. expenses, oldest month first.
    pub trend: Vec<MonthBucket>,
}

impl DashboardView {
    /// Builds the dashboard for the month containing `today`.
    #[must_use]
    pub fn build(today: NaiveDate, data: &DashboardData, settings: &ReportConfig) -> Self {
        let month = YearMonth::of(today);
        let threshold = Decimal::from(settings.low_stock_threshold);

        Self {
            as_of: today,
            this_month: MonthlySnapshot::for_month(month, &data.sales, &data.expenses),
            counts: DashboardCounts {
                sales: data.sales.len(),
                sales_this_month: data
                    .sales
                    .iter()
                    .filter(|s| s.year_month() == Some(month))
                    .count(),
                customers: data.customer_count,
                vendors: data.vendor_count,
                stock_items: data.stocks.len(),
            },
            inventory: InventorySnapshot::of(&data.stocks),
            low_stock_items: data
                .stocks
                .iter()
                .filter(|item| item.status(threshold) == StockStatus::LowStock)
                .cloned()
                .collect(),
            recent_invoices: data
                .sales
                .iter()
                .take(settings.recent_invoice_count)
                .map(DocumentBalance::of)
                .collect(),
            trend: monthly_trend(today, settings.trend_months, &data.sales, &data.expenses),
        }
    }
}
