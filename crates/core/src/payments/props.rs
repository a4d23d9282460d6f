//! Property-based tests for payment allocation and status classification.
//!
//! - Allocation order is deterministic and independent of input order
//! - Cumulative paid is non-decreasing, due is non-increasing
//! - Due is never negative
//! - Classification is total, including at the `Decimal` bounds

use chrono::{Duration, NaiveDate, NaiveTime};
use ledgerdesk_shared::types::{DocumentId, PaymentId};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::allocator::{allocate, allocate_payments, due_amount};
use super::status::PaymentStatus;
use super::summary::DocumentBalance;
use super::types::{DocumentKind, LedgerDocument, PaymentEntry};

/// Strategy to generate signed amounts (-10,000.00 to 1,000,000.00).
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate payments with distinct IDs and optional dates.
fn payments_strategy() -> impl Strategy<Value = Vec<PaymentEntry>> {
    prop::collection::vec((any_amount(), prop::option::of(0i64..365)), 0..20).prop_map(|rows| {
        let base = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or(NaiveDate::MIN);
        rows.into_iter()
            .zip(1i64..)
            .map(|((amount, offset), id)| PaymentEntry {
                id: PaymentId::new(id),
                payment_date: offset.map(|days| (base + Duration::days(days)).and_time(NaiveTime::MIN)),
                mode: None,
                amount,
                bank_name: None,
                account_no: None,
                cheque_no: None,
            })
            .collect()
    })
}

/// Strategy mixing the `Decimal` bounds with ordinary amounts.
fn extreme_amount() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        Just(Decimal::MIN),
        Just(Decimal::MAX),
        Just(Decimal::ZERO),
        any_amount(),
    ]
}

fn document(total: Decimal, payments: Vec<PaymentEntry>) -> LedgerDocument {
    LedgerDocument {
        id: DocumentId::new(1),
        kind: DocumentKind::Sale,
        invoice_no: None,
        document_date: NaiveDate::from_ymd_opt(2025, 1, 1),
        counterparty_id: None,
        counterparty_name: None,
        total_payable_amount: total,
        payments,
    }
}

fn ids(rows: &[super::allocator::Allocation<'_>]) -> Vec<PaymentId> {
    rows.iter().map(|r| r.entry.id).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Allocation order does not depend on the order payments arrive in.
    #[test]
    fn prop_order_independent_of_input_order(
        (payments, shuffled) in payments_strategy()
            .prop_flat_map(|p| (Just(p.clone()), Just(p).prop_shuffle())),
        total in any_amount(),
    ) {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1);
        let first = allocate_payments(total, date, &payments);
        let second = allocate_payments(total, date, &shuffled);
        prop_assert_eq!(ids(&first), ids(&second));
        let first_dues: Vec<Decimal> = first.iter().map(|r| r.due_after).collect();
        let second_dues: Vec<Decimal> = second.iter().map(|r| r.due_after).collect();
        prop_assert_eq!(first_dues, second_dues);
    }

    /// Cumulative paid never decreases and due never increases.
    #[test]
    fn prop_running_totals_are_monotonic(
        payments in payments_strategy(),
        total in any_amount(),
    ) {
        let rows = allocate_payments(total, None, &payments);
        for pair in rows.windows(2) {
            prop_assert!(pair[0].cumulative_paid <= pair[1].cumulative_paid);
            prop_assert!(pair[0].due_after >= pair[1].due_after);
        }
    }

    /// Due after every payment is non-negative, even when overpaid.
    #[test]
    fn prop_due_is_never_negative(
        payments in payments_strategy(),
        total in any_amount(),
    ) {
        for row in allocate_payments(total, None, &payments) {
            prop_assert!(row.due_after >= Decimal::ZERO);
            prop_assert!(row.entry.amount > Decimal::ZERO);
        }
    }

    /// Every (total, paid) pair maps to exactly one status.
    #[test]
    fn prop_classification_is_total(
        total in any_amount(),
        paid in any_amount(),
    ) {
        let status = PaymentStatus::classify(total, paid);
        let due = (total - paid).max(Decimal::ZERO);
        let expected = if total <= Decimal::ZERO && paid <= Decimal::ZERO {
            PaymentStatus::NotApplicable
        } else if paid <= Decimal::ZERO {
            PaymentStatus::Unpaid
        } else if due <= Decimal::ZERO {
            PaymentStatus::Paid
        } else {
            PaymentStatus::PartiallyPaid
        };
        prop_assert_eq!(status, expected);
    }

    /// Classification and allocation never overflow, whatever the amounts.
    #[test]
    fn prop_extreme_amounts_do_not_overflow(
        total in extreme_amount(),
        paid in extreme_amount(),
        amounts in prop::collection::vec(extreme_amount(), 0..6),
    ) {
        let status = PaymentStatus::classify(total, paid);
        let due = due_amount(total, paid);
        prop_assert!(due >= Decimal::ZERO);
        if paid > Decimal::ZERO {
            prop_assert_eq!(status == PaymentStatus::Paid, due.is_zero());
        }

        let payments: Vec<PaymentEntry> = amounts
            .into_iter()
            .zip(1i64..)
            .map(|(amount, id)| PaymentEntry {
                id: PaymentId::new(id),
                payment_date: None,
                mode: None,
                amount,
                bank_name: None,
                account_no: None,
                cheque_no: None,
            })
            .collect();
        let balance = DocumentBalance::of(&document(total, payments.clone()));
        prop_assert!(balance.due >= Decimal::ZERO);
        for row in allocate_payments(total, None, &payments) {
            prop_assert!(row.due_after >= Decimal::ZERO);
        }
    }
}

mod scenario_tests {
    use super::*;

    fn paid_on(id: i64, amount: Decimal, day: u32) -> PaymentEntry {
        PaymentEntry {
            id: PaymentId::new(id),
            payment_date: NaiveDate::from_ymd_opt(2025, 1, day).map(|d| d.and_time(NaiveTime::MIN)),
            mode: None,
            amount,
            bank_name: None,
            account_no: None,
            cheque_no: None,
        }
    }

    #[test]
    fn test_two_payments_fully_settle() {
        let doc = document(dec!(1000), vec![paid_on(1, dec!(400), 5), paid_on(2, dec!(600), 9)]);
        let dues: Vec<Decimal> = allocate(&doc).iter().map(|r| r.due_after).collect();
        assert_eq!(dues, vec![dec!(600), dec!(0)]);
        assert_eq!(DocumentBalance::of(&doc).status, PaymentStatus::Paid);
    }

    #[test]
    fn test_no_payments_is_unpaid() {
        let doc = document(dec!(1000), vec![]);
        let balance = DocumentBalance::of(&doc);
        assert_eq!(balance.status, PaymentStatus::Unpaid);
        assert_eq!(balance.due, dec!(1000));
    }

    #[test]
    fn test_nothing_payable_is_not_applicable() {
        let doc = document(dec!(0), vec![]);
        assert_eq!(DocumentBalance::of(&doc).status, PaymentStatus::NotApplicable);
    }
}
