//! Bank reconciliation types.

use std::fmt;

use chrono::NaiveDate;
use ledgerdesk_shared::types::LineId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which side of the reconciliation a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerSide {
    /// Recorded in the company's books.
    Book,
    /// Taken from the bank statement.
    Statement,
}

/// A book or bank statement line.
///
/// `reconciled` is a local flag toggled by the user; it is not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankLedgerLine {
    /// Line ID.
    pub id: LineId,
    /// Book or statement.
    pub side: LedgerSide,
    /// Transaction date.
    pub date: NaiveDate,
    /// Voucher or bank reference.
    pub ref_no: String,
    /// Narrative.
    pub description: String,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
    /// Whether the line has been matched.
    pub reconciled: bool,
}

impl BankLedgerLine {
    /// Signed effect on the balance: `debit - credit`.
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.debit - self.credit
    }
}

/// Manually entered statement line, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatementLineInput {
    /// Transaction date.
    pub date: Option<NaiveDate>,
    /// Bank reference.
    pub ref_no: String,
    /// Narrative.
    pub description: String,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
}

/// Headline reconciliation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReconciliationStatus {
    /// Book and statement agree.
    Balanced,
    /// Book balance exceeds the statement balance.
    #[serde(rename = "More in Books")]
    MoreInBooks,
    /// Statement balance exceeds the book balance.
    #[serde(rename = "More in Bank")]
    MoreInBank,
}

impl ReconciliationStatus {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Balanced => "Balanced",
            Self::MoreInBooks => "More in Books",
            Self::MoreInBank => "More in Bank",
        }
    }
}

impl fmt::Display for ReconciliationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Headline difference and outstanding items, reported side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationSummary {
    /// Book closing balance.
    pub book_closing: Decimal,
    /// Statement closing balance.
    pub statement_closing: Decimal,
    /// `book_closing - statement_closing`.
    pub difference: Decimal,
    /// Classification of `difference`.
    pub status: ReconciliationStatus,
    /// `Σ(debit - credit)` over unreconciled book lines.
    pub book_unreconciled: Decimal,
    /// `Σ(debit - credit)` over unreconciled statement lines.
    pub bank_unreconciled: Decimal,
    /// `book_unreconciled - bank_unreconciled`.
    pub net_unreconciled_impact: Decimal,
}

/// A saved reconciliation, kept in the session history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationRecord {
    /// Date the reconciliation was made as of.
    pub as_of: NaiveDate,
    /// Bank account reconciled.
    pub bank_account_name: String,
    /// Who prepared it.
    pub prepared_by: String,
    /// Book closing balance.
    pub book_closing: Decimal,
    /// Statement closing balance.
    pub statement_closing: Decimal,
    /// Headline difference.
    pub difference: Decimal,
    /// Headline status.
    pub status: ReconciliationStatus,
    /// Free-form remarks.
    pub remarks: Option<String>,
}
