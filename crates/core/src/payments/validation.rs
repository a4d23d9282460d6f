//! Boundary validation for new payment entries.
//!
//! The allocator never rejects input; these checks run before a payment is
//! submitted. The backend performs the authoritative check.

use rust_decimal::Decimal;

use super::allocator::{due_amount, total_paid};
use super::error::PaymentError;
use super::types::LedgerDocument;

/// Checks that `amount` may be paid against `document`.
///
/// # Errors
///
/// Returns `PaymentError::NonPositiveAmount` if `amount <= 0`.
/// Returns `PaymentError::ExceedsDue` if `amount` is larger than the balance.
pub fn validate_new_payment(document: &LedgerDocument, amount: Decimal) -> Result<(), PaymentError> {
    if amount <= Decimal::ZERO {
        return Err(PaymentError::NonPositiveAmount);
    }

    let due = due_amount(
        document.total_payable_amount,
        total_paid(&document.payments),
    );
    if amount > due {
        return Err(PaymentError::ExceedsDue { amount, due });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payments::types::{DocumentKind, PaymentEntry};
    use ledgerdesk_shared::AppError;
    use ledgerdesk_shared::types::{DocumentId, PaymentId};
    use rust_decimal_macros::dec;

    fn document_with_paid(paid: Decimal) -> LedgerDocument {
        LedgerDocument {
            id: DocumentId::new(5),
            kind: DocumentKind::Purchase,
            invoice_no: None,
            document_date: None,
            counterparty_id: None,
            counterparty_name: None,
            total_payable_amount: dec!(1000),
            payments: vec![PaymentEntry {
                id: PaymentId::new(1),
                payment_date: None,
                mode: None,
                amount: paid,
                bank_name: None,
                account_no: None,
                cheque_no: None,
            }],
        }
    }

    #[test]
    fn test_accepts_amount_up_to_due() {
        let doc = document_with_paid(dec!(400));
        assert!(validate_new_payment(&doc, dec!(600)).is_ok());
        assert!(validate_new_payment(&doc, dec!(0.01)).is_ok());
    }

    #[test]
    fn test_rejects_non_positive() {
        let doc = document_with_paid(dec!(400));
        assert_eq!(
            validate_new_payment(&doc, dec!(0)),
            Err(PaymentError::NonPositiveAmount)
        );
        assert_eq!(
            validate_new_payment(&doc, dec!(-5)),
            Err(PaymentError::NonPositiveAmount)
        );
    }

    #[test]
    fn test_rejects_more_than_due() {
        let doc = document_with_paid(dec!(400));
        let err = validate_new_payment(&doc, dec!(600.01)).unwrap_err();
        assert_eq!(
            err,
            PaymentError::ExceedsDue {
                amount: dec!(600.01),
                due: dec!(600),
            }
        );
        assert!(matches!(AppError::from(err), AppError::Validation(_)));
    }

    #[test]
    fn test_settled_document_rejects_any_payment() {
        let doc = document_with_paid(dec!(1000));
        assert!(matches!(
            validate_new_payment(&doc, dec!(1)),
            Err(PaymentError::ExceedsDue { .. })
        ));
    }
}
