//! Report generation service.

use chrono::{Datelike, NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use super::types::{
    CustomerStatement, ProfitLossInput, ProfitLossReport, SalesSummary, StatementCustomer,
    StatementRow, StatementRowKind, YearComparison,
};
use crate::expenses::{DateRange, ExpenseRecord, ExpenseSource, totals_by_category};
use crate::payments::{LedgerDocument, total_paid};

/// Percent change from `previous` to `current`, two decimal places.
///
/// With no previous amount the change is `100.00` for a positive current
/// amount and `0.00` otherwise.
#[must_use]
pub fn percent_change(current: Decimal, previous: Decimal) -> Decimal {
    if previous.is_zero() {
        return if current > Decimal::ZERO {
            Decimal::new(10000, 2)
        } else {
            Decimal::new(0, 2)
        };
    }
    (current - previous)
        .checked_div(previous)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
        .round_dp(2)
}

fn comparison(item: &str, current_year: Decimal, previous_year: Decimal) -> YearComparison {
    YearComparison {
        item: item.to_string(),
        current_year,
        previous_year,
        percent_change: percent_change(current_year, previous_year),
    }
}

/// Service for generating reports.
pub struct ReportService;

impl ReportService {
    /// Collects one year of Profit & Loss figures from sales and expense records.
    ///
    /// Sales are dated by document date, general expenses by expense date
    /// and salary by salary month. Records without a date are left out.
    /// Journal figures come from the accounts ledger and are passed in.
    #[must_use]
    pub fn profit_loss_input(
        year: i32,
        sales: &[LedgerDocument],
        expenses: &[ExpenseRecord],
        other_income: Decimal,
        journal_expense: Decimal,
    ) -> ProfitLossInput {
        let in_year = |date: Option<NaiveDate>| date.is_some_and(|d| d.year() == year);
        let sales_total = sales
            .iter()
            .filter(|s| in_year(s.document_date))
            .map(|s| s.total_payable_amount)
            .sum();

        let general: Vec<ExpenseRecord> = expenses
            .iter()
            .filter(|e| {
                e.source == ExpenseSource::General
                    && e.date.year_month().is_some_and(|m| m.year() == year)
            })
            .cloned()
            .collect();

        let salary = expenses
            .iter()
            .filter(|e| {
                e.source == ExpenseSource::Salary
                    && e.date.year_month().is_some_and(|m| m.year() == year)
            })
            .map(|e| e.amount)
            .sum();

        ProfitLossInput {
            sales: sales_total,
            other_income,
            expense_by_category: totals_by_category(&general, DateRange::unbounded()),
            salary,
            journal_expense,
        }
    }

    /// Builds the Profit & Loss for `year` against the year before.
    ///
    /// Expense rows follow the current year's categories; a category seen
    /// only in the previous year has no row.
    #[must_use]
    pub fn profit_loss(
        year: i32,
        current: &ProfitLossInput,
        previous: &ProfitLossInput,
    ) -> ProfitLossReport {
        let income = vec![
            comparison("Sales", current.sales, previous.sales),
            comparison("Other Income", current.other_income, previous.other_income),
        ];
        let income_current = current.sales + current.other_income;
        let income_previous = previous.sales + previous.other_income;

        let mut expenses: Vec<YearComparison> = current
            .expense_by_category
            .iter()
            .map(|row| {
                let prior = previous
                    .expense_by_category
                    .iter()
                    .find(|p| p.category == row.category)
                    .map_or(Decimal::ZERO, |p| p.total);
                comparison(&row.category, row.total, prior)
            })
            .collect();
        expenses.push(comparison("Salary Expense", current.salary, previous.salary));
        expenses.push(comparison(
            "Journal Expenses",
            current.journal_expense,
            previous.journal_expense,
        ));

        let expense_current: Decimal = expenses.iter().map(|e| e.current_year).sum();
        let expense_previous: Decimal = expenses.iter().map(|e| e.previous_year).sum();

        ProfitLossReport {
            year,
            income,
            expenses,
            gross_profit: comparison("Gross Profit", income_current, income_previous),
            total_expenses: comparison("Total Expenses", expense_current, expense_previous),
            net_profit: comparison(
                "Profit / Loss",
                income_current - expense_current,
                income_previous - expense_previous,
            ),
        }
    }

    /// Totals sales, payments and due over sales dated within `range`.
    #[must_use]
    pub fn sales_summary(sales: &[LedgerDocument], range: DateRange) -> SalesSummary {
        let in_range: Vec<&LedgerDocument> = sales
            .iter()
            .filter(|s| range.admits(s.document_date))
            .collect();

        let total_sales = in_range
            .iter()
            .map(|s| s.total_payable_amount)
            .fold(Decimal::ZERO, Decimal::saturating_add);
        let total_paid = in_range
            .iter()
            .map(|s| total_paid(&s.payments))
            .fold(Decimal::ZERO, Decimal::saturating_add);

        SalesSummary {
            range,
            count: in_range.len(),
            total_sales,
            total_paid,
            total_due: total_sales.saturating_sub(total_paid),
        }
    }

    /// Builds a customer statement from the customer's sales.
    ///
    /// Sales of other customers are ignored. Rows are ordered by date with
    /// the opening balance first; rows on the same date keep invoice then
    /// payment order.
    #[must_use]
    pub fn customer_statement(
        customer: StatementCustomer,
        sales: &[LedgerDocument],
    ) -> CustomerStatement {
        let opening = customer.previous_due;
        let mut keyed: Vec<(Option<chrono::NaiveDateTime>, StatementRow)> = Vec::new();

        if !opening.is_zero() {
            keyed.push((
                None,
                StatementRow {
                    kind: StatementRowKind::Opening,
                    date: None,
                    reference: "-".to_string(),
                    description: "Previous due balance".to_string(),
                    debit: opening.max(Decimal::ZERO),
                    credit: (-opening).max(Decimal::ZERO),
                    balance: Decimal::ZERO,
                },
            ));
        }

        let customer_id = customer.id.into_inner();
        let mut total_invoiced = Decimal::ZERO;
        let mut total_received = Decimal::ZERO;

        for sale in sales.iter().filter(|s| s.counterparty_id == Some(customer_id)) {
            total_invoiced += sale.total_payable_amount;
            keyed.push((
                sale.document_date.map(|d| d.and_time(NaiveTime::MIN)),
                StatementRow {
                    kind: StatementRowKind::Invoice,
                    date: sale.document_date,
                    reference: sale.invoice_no.clone().unwrap_or_else(|| "N/A".to_string()),
                    description: "Sale invoice".to_string(),
                    debit: sale.total_payable_amount,
                    credit: Decimal::ZERO,
                    balance: Decimal::ZERO,
                },
            ));

            for payment in sale.payments.iter().filter(|p| p.is_valid()) {
                total_received += payment.amount;
                let effective = sale.effective_payment_date(payment);
                keyed.push((
                    effective,
                    StatementRow {
                        kind: StatementRowKind::Payment,
                        date: effective.map(|d| d.date()),
                        reference: format!("PAY-{}", payment.id),
                        description: payment.mode.as_ref().map_or_else(
                            || "Payment received".to_string(),
                            |mode| format!("Payment ({mode})"),
                        ),
                        debit: Decimal::ZERO,
                        credit: payment.amount,
                        balance: Decimal::ZERO,
                    },
                ));
            }
        }

        // Stable: undated rows stay ahead of dated ones in push order.
        keyed.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut running = Decimal::ZERO;
        let rows: Vec<StatementRow> = keyed
            .into_iter()
            .map(|(_, mut row)| {
                running += row.debit - row.credit;
                row.balance = running;
                row
            })
            .collect();

        CustomerStatement {
            customer,
            rows,
            opening_balance: opening,
            total_invoiced,
            total_received,
            closing_balance: running,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_percent_change_from_zero() {
        assert_eq!(percent_change(dec!(500), dec!(0)), dec!(100.00));
        assert_eq!(percent_change(dec!(0), dec!(0)), dec!(0.00));
        assert_eq!(percent_change(dec!(-10), dec!(0)), dec!(0.00));
    }

    #[test]
    fn test_percent_change_rounds_to_two_places() {
        assert_eq!(percent_change(dec!(150), dec!(100)), dec!(50.00));
        assert_eq!(percent_change(dec!(50), dec!(200)), dec!(-75.00));
        assert_eq!(percent_change(dec!(100), dec!(300)), dec!(-66.67));
        assert_eq!(percent_change(dec!(-50), dec!(-100)), dec!(-50.00));
    }
}
