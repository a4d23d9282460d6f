//! Flattened payment register.
//!
//! Every valid payment of every document becomes one row carrying the
//! document it belongs to and the balance left on that document right
//! after it. Rows are listed newest first.

use chrono::{NaiveDate, NaiveDateTime};
use ledgerdesk_shared::types::{DocumentId, PaymentId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::allocator::allocate;
use super::types::{DocumentKind, LedgerDocument, PaymentMode};

/// One payment line of the register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRow {
    /// Payment ID.
    pub payment_id: PaymentId,
    /// Parent document ID.
    pub document_id: DocumentId,
    /// Sale or purchase.
    pub kind: DocumentKind,
    /// Invoice number (with fallback).
    pub invoice_no: String,
    /// Customer or vendor name (with fallback).
    pub counterparty_name: String,
    /// Document date.
    pub document_date: Option<NaiveDate>,
    /// Payment mode.
    pub mode: Option<PaymentMode>,
    /// Bank name.
    pub bank_name: Option<String>,
    /// Account number.
    pub account_no: Option<String>,
    /// Cheque number.
    pub cheque_no: Option<String>,
    /// Amount paid.
    pub amount: Decimal,
    /// Payment date, else document date.
    pub payment_date: Option<NaiveDateTime>,
    /// Balance left on the document after this payment.
    pub due_after: Decimal,
}

/// Builds the register for a set of documents, newest payment first.
#[must_use]
pub fn payment_register(documents: &[LedgerDocument]) -> Vec<RegisterRow> {
    let mut rows: Vec<RegisterRow> = documents
        .iter()
        .flat_map(|document| {
            let invoice_no = document.display_invoice_no();
            let counterparty_name = document.display_counterparty().to_string();
            allocate(document)
                .into_iter()
                .map(move |allocation| RegisterRow {
                    payment_id: allocation.entry.id,
                    document_id: document.id,
                    kind: document.kind,
                    invoice_no: invoice_no.clone(),
                    counterparty_name: counterparty_name.clone(),
                    document_date: document.document_date,
                    mode: allocation.entry.mode.clone(),
                    bank_name: allocation.entry.bank_name.clone(),
                    account_no: allocation.entry.account_no.clone(),
                    cheque_no: allocation.entry.cheque_no.clone(),
                    amount: allocation.entry.amount,
                    payment_date: allocation.effective_date,
                    due_after: allocation.due_after,
                })
        })
        .collect();

    rows.sort_by(|a, b| {
        b.payment_date
            .cmp(&a.payment_date)
            .then(b.payment_id.cmp(&a.payment_id))
    });
    rows
}

/// Sum of the amounts of the given rows.
#[must_use]
pub fn register_total<'a>(rows: impl IntoIterator<Item = &'a RegisterRow>) -> Decimal {
    rows.into_iter()
        .map(|row| row.amount)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Case-insensitive search over invoice number and counterparty name.
#[derive(Debug, Clone, Default)]
pub struct RegisterFilter {
    term: String,
}

impl RegisterFilter {
    /// Creates a filter. A blank term matches every row.
    #[must_use]
    pub fn new(term: &str) -> Self {
        Self {
            term: term.trim().to_lowercase(),
        }
    }

    /// Returns true if the row matches the search term.
    #[must_use]
    pub fn matches(&self, row: &RegisterRow) -> bool {
        self.term.is_empty()
            || row.invoice_no.to_lowercase().contains(&self.term)
            || row.counterparty_name.to_lowercase().contains(&self.term)
    }

    /// Returns the matching rows in register order.
    #[must_use]
    pub fn apply<'a>(&self, rows: &'a [RegisterRow]) -> Vec<&'a RegisterRow> {
        rows.iter().filter(|row| self.matches(row)).collect()
    }
}
