//! Running-balance allocation of payments against a document total.
//!
//! Payments are applied oldest first. The order key is the effective
//! payment date (the payment's own date, else the document date), ties
//! broken by ascending payment ID, so the "due after payment" column is
//! reproducible regardless of the order the backend returned them in.
//!
//! Entries with a zero or negative amount are invalid input and are left
//! out of both the output and the running sum.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use super::types::{LedgerDocument, PaymentEntry};

/// One payment after allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation<'a> {
    /// The allocated payment.
    pub entry: &'a PaymentEntry,
    /// Date the payment was ordered by.
    pub effective_date: Option<NaiveDateTime>,
    /// Sum of this and all earlier payments.
    pub cumulative_paid: Decimal,
    /// Remaining balance after this payment, never negative.
    pub due_after: Decimal,
}

/// Remaining balance: `max(0, total - paid)`, saturating at the `Decimal`
/// bounds.
#[must_use]
pub fn due_amount(total: Decimal, paid: Decimal) -> Decimal {
    total.saturating_sub(paid).max(Decimal::ZERO)
}

/// Sum of the valid (positive) payment amounts.
#[must_use]
pub fn total_paid(payments: &[PaymentEntry]) -> Decimal {
    payments
        .iter()
        .filter(|p| p.is_valid())
        .map(|p| p.amount)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Allocates payments against `total` in `(effective date, id)` order.
#[must_use]
pub fn allocate_payments(
    total: Decimal,
    document_date: Option<NaiveDate>,
    payments: &[PaymentEntry],
) -> Vec<Allocation<'_>> {
    let fallback = document_date.map(|d| d.and_time(NaiveTime::MIN));

    let mut ordered: Vec<(Option<NaiveDateTime>, &PaymentEntry)> = payments
        .iter()
        .filter(|p| p.is_valid())
        .map(|p| (p.payment_date.or(fallback), p))
        .collect();
    ordered.sort_by(|(a_date, a), (b_date, b)| a_date.cmp(b_date).then(a.id.cmp(&b.id)));

    let mut cumulative_paid = Decimal::ZERO;
    ordered
        .into_iter()
        .map(|(effective_date, entry)| {
            cumulative_paid = cumulative_paid.saturating_add(entry.amount);
            Allocation {
                entry,
                effective_date,
                cumulative_paid,
                due_after: due_amount(total, cumulative_paid),
            }
        })
        .collect()
}

/// Allocates a document's own payments against its total payable.
#[must_use]
pub fn allocate(document: &LedgerDocument) -> Vec<Allocation<'_>> {
    allocate_payments(
        document.total_payable_amount,
        document.document_date,
        &document.payments,
    )
}
