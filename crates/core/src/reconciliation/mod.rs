//! Bank and cash reconciliation.
//!
//! Bank reconciliation compares the book closing balance with the bank
//! statement closing balance and, independently, totals the book and
//! statement lines not yet ticked off. Cash reconciliation compares a
//! physical denomination count with the system closing balance.

pub mod bank;
pub mod cash;
pub mod error;
pub mod types;

#[cfg(test)]
mod props;

pub use bank::{
    accept_statement_line, classify_difference, summarize, toggle_reconciled, unreconciled_total,
};
pub use cash::{CashCount, CashReconciliation, CashStatus, Denomination};
pub use error::ReconciliationError;
pub use types::{
    BankLedgerLine, LedgerSide, ReconciliationRecord, ReconciliationStatus, ReconciliationSummary,
    StatementLineInput,
};
