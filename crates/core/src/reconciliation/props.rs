//! Property-based tests for the reconciliation classifier.
//!
//! - Status sign agrees with the difference
//! - Unreconciled totals ignore reconciled lines

use chrono::NaiveDate;
use ledgerdesk_shared::types::LineId;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::bank::{classify_difference, summarize, unreconciled_total};
use super::types::{BankLedgerLine, LedgerSide, ReconciliationStatus};

/// Strategy to generate signed balances (-1,000,000.00 to 1,000,000.00).
fn balance_strategy() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn lines_strategy() -> impl Strategy<Value = Vec<BankLedgerLine>> {
    prop::collection::vec((0i64..1_000_000, 0i64..1_000_000, any::<bool>()), 0..15).prop_map(
        |rows| {
            let date = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap_or(NaiveDate::MIN);
            rows.into_iter()
                .zip(1i64..)
                .map(|((debit, credit, reconciled), id)| BankLedgerLine {
                    id: LineId::new(id),
                    side: LedgerSide::Book,
                    date,
                    ref_no: format!("REF-{id}"),
                    description: String::new(),
                    debit: Decimal::new(debit, 2),
                    credit: Decimal::new(credit, 2),
                    reconciled,
                })
                .collect()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Balanced iff zero, More in Books iff positive, else More in Bank.
    #[test]
    fn prop_status_matches_difference_sign(
        book in balance_strategy(),
        statement in balance_strategy(),
    ) {
        let (difference, status) = classify_difference(book, statement);
        prop_assert_eq!(difference, book - statement);
        prop_assert_eq!(status == ReconciliationStatus::Balanced, difference == Decimal::ZERO);
        prop_assert_eq!(status == ReconciliationStatus::MoreInBooks, difference > Decimal::ZERO);
        prop_assert_eq!(status == ReconciliationStatus::MoreInBank, difference < Decimal::ZERO);
    }

    /// Reconciling every line zeroes the unreconciled total.
    #[test]
    fn prop_fully_reconciled_has_no_impact(mut lines in lines_strategy()) {
        for line in &mut lines {
            line.reconciled = true;
        }
        prop_assert_eq!(unreconciled_total(&lines), Decimal::ZERO);
    }

    /// The headline difference does not depend on the line flags.
    #[test]
    fn prop_headline_independent_of_lines(
        book in balance_strategy(),
        statement in balance_strategy(),
        book_lines in lines_strategy(),
        statement_lines in lines_strategy(),
    ) {
        let with_lines = summarize(book, statement, &book_lines, &statement_lines);
        let bare = summarize(book, statement, &[], &[]);
        prop_assert_eq!(with_lines.difference, bare.difference);
        prop_assert_eq!(with_lines.status, bare.status);
        prop_assert_eq!(
            with_lines.net_unreconciled_impact,
            with_lines.book_unreconciled - with_lines.bank_unreconciled
        );
    }
}

mod scenario_tests {
    use super::*;

    #[test]
    fn test_equal_closings_are_balanced() {
        let (difference, status) = classify_difference(dec!(15000), dec!(15000));
        assert_eq!(status, ReconciliationStatus::Balanced);
        assert_eq!(difference, dec!(0));
    }

    #[test]
    fn test_higher_book_closing_is_more_in_books() {
        let (difference, status) = classify_difference(dec!(20000), dec!(12000));
        assert_eq!(status, ReconciliationStatus::MoreInBooks);
        assert_eq!(difference, dec!(8000));
        assert_eq!(status.to_string(), "More in Books");
    }
}
