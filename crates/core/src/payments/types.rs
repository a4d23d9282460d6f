//! Ledger document and payment types.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use ledgerdesk_shared::types::{DocumentId, PaymentId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of parent document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Sales invoice; the counterparty is a customer.
    Sale,
    /// Purchase invoice; the counterparty is a vendor.
    Purchase,
}

impl DocumentKind {
    /// Prefix used when a document has no invoice number.
    #[must_use]
    pub const fn invoice_prefix(self) -> &'static str {
        match self {
            Self::Sale => "SAL",
            Self::Purchase => "PUR",
        }
    }
}

/// How a payment was made.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMode {
    /// Cash.
    Cash,
    /// Bank transfer or deposit.
    Bank,
    /// Cheque.
    Cheque,
    /// Any other mode configured on the backend.
    Other(String),
}

impl PaymentMode {
    /// Parses a free-form mode label; unknown labels are kept verbatim.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(match trimmed.to_ascii_lowercase().as_str() {
            "cash" => Self::Cash,
            "bank" | "bank transfer" => Self::Bank,
            "cheque" | "check" => Self::Cheque,
            _ => Self::Other(trimmed.to_string()),
        })
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cash => write!(f, "Cash"),
            Self::Bank => write!(f, "Bank"),
            Self::Cheque => write!(f, "Cheque"),
            Self::Other(label) => write!(f, "{label}"),
        }
    }
}

/// A payment recorded against a [`LedgerDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentEntry {
    /// Payment ID.
    pub id: PaymentId,
    /// When the payment was made. Falls back to the document date.
    pub payment_date: Option<NaiveDateTime>,
    /// Payment mode.
    pub mode: Option<PaymentMode>,
    /// Amount paid. Only positive amounts count.
    pub amount: Decimal,
    /// Bank name for bank and cheque payments.
    pub bank_name: Option<String>,
    /// Account number.
    pub account_no: Option<String>,
    /// Cheque number.
    pub cheque_no: Option<String>,
}

impl PaymentEntry {
    /// Returns true if the entry takes part in allocation (`amount > 0`).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.amount > Decimal::ZERO
    }
}

/// A sale or purchase document with its payments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerDocument {
    /// Document ID.
    pub id: DocumentId,
    /// Sale or purchase.
    pub kind: DocumentKind,
    /// Invoice number, if assigned.
    pub invoice_no: Option<String>,
    /// Document date.
    pub document_date: Option<NaiveDate>,
    /// Customer or vendor ID.
    pub counterparty_id: Option<i64>,
    /// Customer or vendor display name.
    pub counterparty_name: Option<String>,
    /// Total payable after discounts.
    pub total_payable_amount: Decimal,
    /// Payments in backend order.
    pub payments: Vec<PaymentEntry>,
}

impl LedgerDocument {
    /// Invoice number, or `PREFIX-{id}` when none was assigned.
    #[must_use]
    pub fn display_invoice_no(&self) -> String {
        self.invoice_no
            .clone()
            .unwrap_or_else(|| format!("{}-{}", self.kind.invoice_prefix(), self.id))
    }

    /// Counterparty name, or `"N/A"`.
    #[must_use]
    pub fn display_counterparty(&self) -> &str {
        self.counterparty_name.as_deref().unwrap_or("N/A")
    }

    /// Document date as a timestamp at midnight.
    #[must_use]
    pub fn document_datetime(&self) -> Option<NaiveDateTime> {
        self.document_date.map(|d| d.and_time(NaiveTime::MIN))
    }

    /// Effective date of a payment: its own date, else the document date.
    #[must_use]
    pub fn effective_payment_date(&self, payment: &PaymentEntry) -> Option<NaiveDateTime> {
        payment.payment_date.or_else(|| self.document_datetime())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_mode_parse() {
        assert_eq!(PaymentMode::parse("cash"), Some(PaymentMode::Cash));
        assert_eq!(PaymentMode::parse(" Bank "), Some(PaymentMode::Bank));
        assert_eq!(PaymentMode::parse("CHEQUE"), Some(PaymentMode::Cheque));
        assert_eq!(
            PaymentMode::parse("bKash"),
            Some(PaymentMode::Other("bKash".to_string()))
        );
        assert_eq!(PaymentMode::parse(""), None);
    }

    #[test]
    fn test_display_invoice_fallback() {
        let doc = LedgerDocument {
            id: DocumentId::new(17),
            kind: DocumentKind::Purchase,
            invoice_no: None,
            document_date: None,
            counterparty_id: None,
            counterparty_name: None,
            total_payable_amount: Decimal::ZERO,
            payments: vec![],
        };
        assert_eq!(doc.display_invoice_no(), "PUR-17");
        assert_eq!(doc.display_counterparty(), "N/A");
    }
}
