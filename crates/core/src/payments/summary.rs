//! Per-document balance summary.

use chrono::NaiveDate;
use ledgerdesk_shared::types::DocumentId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::allocator::{due_amount, total_paid};
use super::status::PaymentStatus;
use super::types::LedgerDocument;

/// Total, paid, due and status of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentBalance {
    /// Document ID.
    pub document_id: DocumentId,
    /// Invoice number (with fallback).
    pub invoice_no: String,
    /// Counterparty name (with fallback).
    pub counterparty_name: String,
    /// Document date.
    pub date: Option<NaiveDate>,
    /// Total payable.
    pub total: Decimal,
    /// Sum of valid payments.
    pub paid: Decimal,
    /// `max(0, total - paid)`.
    pub due: Decimal,
    /// Classified status.
    pub status: PaymentStatus,
}

impl DocumentBalance {
    /// Summarizes a document.
    #[must_use]
    pub fn of(document: &LedgerDocument) -> Self {
        let total = document.total_payable_amount;
        let paid = total_paid(&document.payments);
        Self {
            document_id: document.id,
            invoice_no: document.display_invoice_no(),
            counterparty_name: document.display_counterparty().to_string(),
            date: document.document_date,
            total,
            paid,
            due: due_amount(total, paid),
            status: PaymentStatus::classify(total, paid),
        }
    }
}
