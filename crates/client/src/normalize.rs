//! Wire record to core record conversion.

use ledgerdesk_core::calendar::YearMonth;
use ledgerdesk_core::expenses::{ExpenseRecord, SalaryComponents};
use ledgerdesk_core::inventory::StockItem;
use ledgerdesk_core::payments::{DocumentKind, LedgerDocument, PaymentEntry, PaymentMode};
use ledgerdesk_core::reports::StatementCustomer;
use ledgerdesk_shared::types::{CustomerId, DocumentId, ExpenseId, PaymentId, StockId};
use tracing::warn;

use crate::wire::{
    CustomerWire, ExpenseWire, PaymentWire, PurchaseWire, SaleWire, SalaryExpenseWire, StockWire,
};

const CUSTOMER_LABELS: &[&str] = &["customer_name", "shop_name"];
const VENDOR_LABELS: &[&str] = &["vendor_name", "shop_name"];
const BANK_LABELS: &[&str] = &["name", "bank_name"];
const CATEGORY_LABELS: &[&str] = &["category_name", "name"];
const PRODUCT_LABELS: &[&str] = &["product_name", "name"];

impl From<PaymentWire> for PaymentEntry {
    fn from(wire: PaymentWire) -> Self {
        Self {
            id: PaymentId::new(wire.id),
            payment_date: wire.payment_date,
            mode: wire.payment_mode.as_deref().and_then(PaymentMode::parse),
            amount: wire.paid_amount,
            bank_name: wire.bank_name.and_then(|b| b.label(BANK_LABELS)),
            account_no: wire.account_no,
            cheque_no: wire.cheque_no,
        }
    }
}

impl From<SaleWire> for LedgerDocument {
    fn from(wire: SaleWire) -> Self {
        Self {
            id: DocumentId::new(wire.id),
            kind: DocumentKind::Sale,
            invoice_no: wire.invoice_no,
            document_date: wire.sale_date.map(|d| d.date()),
            counterparty_id: wire.customer.as_ref().and_then(|c| c.id()),
            counterparty_name: wire.customer.and_then(|c| c.label(CUSTOMER_LABELS)),
            total_payable_amount: wire.total_payable_amount,
            payments: wire.payments.into_iter().map(PaymentEntry::from).collect(),
        }
    }
}

impl From<PurchaseWire> for LedgerDocument {
    fn from(wire: PurchaseWire) -> Self {
        Self {
            id: DocumentId::new(wire.id),
            kind: DocumentKind::Purchase,
            invoice_no: wire.invoice_no,
            document_date: wire.purchase_date.map(|d| d.date()),
            counterparty_id: wire.supplier.as_ref().and_then(|s| s.id()),
            counterparty_name: wire.supplier.and_then(|s| s.label(VENDOR_LABELS)),
            total_payable_amount: wire.total_payable_amount,
            payments: wire.payments.into_iter().map(PaymentEntry::from).collect(),
        }
    }
}

impl From<ExpenseWire> for ExpenseRecord {
    fn from(wire: ExpenseWire) -> Self {
        let category = wire
            .cost_category_name
            .or_else(|| wire.cost_category.and_then(|c| c.label(CATEGORY_LABELS)));
        let date = wire.expense_date.or(wire.date).or(wire.created_at);

        Self::general(
            ExpenseId::new(wire.id),
            category,
            wire.amount,
            date.map(|d| d.date()),
        )
    }
}

impl From<SalaryExpenseWire> for ExpenseRecord {
    fn from(wire: SalaryExpenseWire) -> Self {
        let month = wire.salary_month.as_deref().and_then(|raw| {
            raw.parse::<YearMonth>()
                .inspect_err(|e| warn!(id = wire.id, error = %e, "unparsable salary month ignored"))
                .ok()
        });
        let components = SalaryComponents {
            total_salary: wire.total_salary,
            base_amount: wire.base_amount,
            amount: wire.amount,
            allowance: wire.allowance,
            bonus: wire.bonus,
        };

        Self::salary(ExpenseId::new(wire.id), &components, month)
    }
}

/// Purchase as an expense of its total payable, dated by its purchase date.
#[must_use]
pub fn purchase_expense(wire: &PurchaseWire) -> ExpenseRecord {
    ExpenseRecord::purchase(
        ExpenseId::new(wire.id),
        wire.total_payable_amount,
        wire.purchase_date.map(|d| d.date()),
    )
}

impl From<StockWire> for StockItem {
    fn from(wire: StockWire) -> Self {
        Self {
            id: StockId::new(wire.id),
            product_name: wire
                .product
                .and_then(|p| p.label(PRODUCT_LABELS))
                .unwrap_or_else(|| "N/A".to_string()),
            current_quantity: wire.current_stock_quantity,
            reorder_level: wire.reorder_level,
            damage_quantity: wire.damage_quantity,
            current_value: wire.current_stock_value,
        }
    }
}

impl From<CustomerWire> for StatementCustomer {
    fn from(wire: CustomerWire) -> Self {
        Self {
            id: CustomerId::new(wire.id),
            name: wire
                .customer_name
                .or(wire.shop_name)
                .unwrap_or_else(|| "N/A".to_string()),
            previous_due: wire.previous_due_amount,
        }
    }
}
