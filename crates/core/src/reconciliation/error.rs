//! Reconciliation input errors.

use ledgerdesk_shared::AppError;
use thiserror::Error;

/// Errors raised when a statement line or a saved reconciliation is entered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconciliationError {
    /// A required field is blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Neither debit nor credit is set.
    #[error("Either debit or credit must be set")]
    EmptyLine,

    /// Both debit and credit are set on one line.
    #[error("Debit and credit cannot both be set on one line")]
    DebitAndCredit,

    /// Debit or credit is negative.
    #[error("Debit and credit cannot be negative")]
    NegativeAmount,
}

impl From<ReconciliationError> for AppError {
    fn from(err: ReconciliationError) -> Self {
        Self::Validation(err.to_string())
    }
}
