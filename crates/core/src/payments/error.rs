//! Payment entry errors.

use ledgerdesk_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when a new payment is checked at the form boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// Amount is zero or negative.
    #[error("Paid amount must be greater than zero")]
    NonPositiveAmount,

    /// Amount is larger than the remaining balance.
    #[error("Paid amount {amount} cannot exceed due amount {due}")]
    ExceedsDue {
        /// Amount entered.
        amount: Decimal,
        /// Remaining balance on the document.
        due: Decimal,
    },
}

impl From<PaymentError> for AppError {
    fn from(err: PaymentError) -> Self {
        Self::Validation(err.to_string())
    }
}
