//! Request functions behind each screen.
//!
//! Each view fetches the resources it needs concurrently, normalizes them
//! and hands them to the core. A view either returns all of its data or a
//! single error.

use chrono::NaiveDate;
use ledgerdesk_core::dashboard::{DashboardData, DashboardView};
use ledgerdesk_core::expenses::{DateRange, ExpenseRecord, ExpenseReport, expense_report};
use ledgerdesk_core::payments::{LedgerDocument, RegisterRow, payment_register};
use ledgerdesk_core::reports::{CustomerStatement, ReportService, SalesSummary, StatementCustomer};
use ledgerdesk_core::words::caption;
use ledgerdesk_shared::AppConfig;
use ledgerdesk_shared::config::ReportConfig;
use ledgerdesk_shared::types::CustomerId;
use ledgerdesk_shared::types::envelope::decode_list;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::collector::{Collector, Resource, TenantContext};
use crate::error::ClientError;
use crate::http::HttpCollector;
use crate::normalize::purchase_expense;
use crate::wire::{
    CustomerWire, ExpenseWire, PurchaseWire, SaleWire, SalaryExpenseWire, StockWire, VendorWire,
};

/// Logs a failed view before its error is returned.
fn settle<T>(view: &'static str, result: Result<T, ClientError>) -> Result<T, ClientError> {
    result.inspect_err(|e| warn!(view, error = %e, "view failed, partial data discarded"))
}

/// Fetches, normalizes and reports over backend data.
pub struct LedgerService<C> {
    collector: C,
    ctx: TenantContext,
    settings: ReportConfig,
}

impl LedgerService<HttpCollector> {
    /// Creates a service talking to the configured backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Ok(Self::new(
            HttpCollector::new(&config.api)?,
            TenantContext::from(&config.tenant),
            config.report.clone(),
        ))
    }
}

impl<C: Collector> LedgerService<C> {
    /// Creates a new service.
    pub const fn new(collector: C, ctx: TenantContext, settings: ReportConfig) -> Self {
        Self {
            collector,
            ctx,
            settings,
        }
    }

    /// Amount in words with the configured currency suffix, as printed on
    /// invoices and statements.
    #[must_use]
    pub fn amount_caption(&self, amount: Decimal) -> String {
        caption(amount, &self.settings.currency_suffix)
    }

    async fn list<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>, ClientError> {
        let value = self.collector.fetch(resource, &self.ctx).await?;
        let records: Vec<T> = decode_list(value, resource.name());
        debug!(%resource, count = records.len(), "records fetched");
        Ok(records)
    }

    async fn sales(&self) -> Result<Vec<LedgerDocument>, ClientError> {
        let sales: Vec<SaleWire> = self.list(Resource::Sales).await?;
        Ok(sales.into_iter().map(LedgerDocument::from).collect())
    }

    async fn purchases(&self) -> Result<Vec<PurchaseWire>, ClientError> {
        self.list(Resource::Purchases).await
    }

    async fn general_expenses(&self) -> Result<Vec<ExpenseRecord>, ClientError> {
        let expenses: Vec<ExpenseWire> = self.list(Resource::Expenses).await?;
        Ok(expenses.into_iter().map(ExpenseRecord::from).collect())
    }

    async fn salary_expenses(&self) -> Result<Vec<ExpenseRecord>, ClientError> {
        let salaries: Vec<SalaryExpenseWire> = self.list(Resource::SalaryExpenses).await?;
        Ok(salaries.into_iter().map(ExpenseRecord::from).collect())
    }

    /// Payment register over all sales, newest payment first.
    ///
    /// # Errors
    ///
    /// Returns an error if the sales cannot be fetched.
    pub async fn sales_payments(&self) -> Result<Vec<RegisterRow>, ClientError> {
        let sales = settle("sales_payments", self.sales().await)?;
        Ok(payment_register(&sales))
    }

    /// Payment register over all purchases, newest payment first.
    ///
    /// # Errors
    ///
    /// Returns an error if the purchases cannot be fetched.
    pub async fn purchase_payments(&self) -> Result<Vec<RegisterRow>, ClientError> {
        let purchases = settle("purchase_payments", self.purchases().await)?;
        let documents: Vec<LedgerDocument> =
            purchases.into_iter().map(LedgerDocument::from).collect();
        Ok(payment_register(&documents))
    }

    /// Expense totals by source (general, salary, purchase) over `range`.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the three sources cannot be fetched.
    pub async fn expense_report(&self, range: DateRange) -> Result<ExpenseReport, ClientError> {
        let (general, salary, purchases) = settle(
            "expense_report",
            tokio::try_join!(
                self.general_expenses(),
                self.salary_expenses(),
                self.purchases()
            ),
        )?;

        let records: Vec<ExpenseRecord> = general
            .into_iter()
            .chain(salary)
            .chain(purchases.iter().map(purchase_expense))
            .collect();
        Ok(expense_report(&records, range))
    }

    /// Dashboard for the month containing `today`.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the six resources cannot be fetched.
    pub async fn dashboard(&self, today: NaiveDate) -> Result<DashboardView, ClientError> {
        let (sales, general, salary, stocks, customers, vendors) = settle(
            "dashboard",
            tokio::try_join!(
                self.sales(),
                self.general_expenses(),
                self.salary_expenses(),
                self.list::<StockWire>(Resource::Stocks),
                self.list::<CustomerWire>(Resource::Customers),
                self.list::<VendorWire>(Resource::Vendors),
            ),
        )?;

        let data = DashboardData {
            sales,
            expenses: general.into_iter().chain(salary).collect(),
            stocks: stocks.into_iter().map(Into::into).collect(),
            customer_count: customers.len(),
            vendor_count: vendors.len(),
        };
        Ok(DashboardView::build(today, &data, &self.settings))
    }

    /// Statement of one customer's invoices and payments.
    ///
    /// # Errors
    ///
    /// Returns an error if either resource cannot be fetched or the
    /// customer does not exist.
    pub async fn customer_statement(
        &self,
        customer_id: CustomerId,
    ) -> Result<CustomerStatement, ClientError> {
        let (customers, sales) = settle(
            "customer_statement",
            tokio::try_join!(self.list::<CustomerWire>(Resource::Customers), self.sales()),
        )?;

        let customer = customers
            .into_iter()
            .find(|c| c.id == customer_id.into_inner())
            .map(StatementCustomer::from)
            .ok_or(ClientError::NotFound {
                resource: Resource::Customers.name(),
                id: customer_id.into_inner(),
            });
        let customer = settle("customer_statement", customer)?;

        Ok(ReportService::customer_statement(customer, &sales))
    }

    /// Sales, paid and due totals over `range`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sales cannot be fetched.
    pub async fn sales_summary(&self, range: DateRange) -> Result<SalesSummary, ClientError> {
        let sales = settle("sales_summary", self.sales().await)?;
        Ok(ReportService::sales_summary(&sales, range))
    }
}
