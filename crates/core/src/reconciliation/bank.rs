//! Bank reconciliation calculations.

use chrono::NaiveDate;
use ledgerdesk_shared::types::LineId;
use rust_decimal::Decimal;

use super::error::ReconciliationError;
use super::types::{
    BankLedgerLine, LedgerSide, ReconciliationRecord, ReconciliationStatus, ReconciliationSummary,
    StatementLineInput,
};

/// Returns `book - statement` and its classification.
#[must_use]
pub fn classify_difference(
    book_closing: Decimal,
    statement_closing: Decimal,
) -> (Decimal, ReconciliationStatus) {
    let difference = book_closing - statement_closing;
    let status = match difference.cmp(&Decimal::ZERO) {
        std::cmp::Ordering::Greater => ReconciliationStatus::MoreInBooks,
        std::cmp::Ordering::Less => ReconciliationStatus::MoreInBank,
        std::cmp::Ordering::Equal => ReconciliationStatus::Balanced,
    };
    (difference, status)
}

/// `Σ(debit - credit)` over lines not yet reconciled.
#[must_use]
pub fn unreconciled_total(lines: &[BankLedgerLine]) -> Decimal {
    lines
        .iter()
        .filter(|line| !line.reconciled)
        .map(BankLedgerLine::net)
        .sum()
}

/// Builds the reconciliation summary.
///
/// The headline difference and the unreconciled impact are computed
/// independently and answer different questions.
#[must_use]
pub fn summarize(
    book_closing: Decimal,
    statement_closing: Decimal,
    book_lines: &[BankLedgerLine],
    statement_lines: &[BankLedgerLine],
) -> ReconciliationSummary {
    let (difference, status) = classify_difference(book_closing, statement_closing);
    let book_unreconciled = unreconciled_total(book_lines);
    let bank_unreconciled = unreconciled_total(statement_lines);

    ReconciliationSummary {
        book_closing,
        statement_closing,
        difference,
        status,
        book_unreconciled,
        bank_unreconciled,
        net_unreconciled_impact: book_unreconciled - bank_unreconciled,
    }
}

/// Validates a manually entered statement line and turns it into an
/// unreconciled statement line.
///
/// # Errors
///
/// Returns `ReconciliationError::MissingField` if date or reference is blank.
/// Returns `ReconciliationError::NegativeAmount` if debit or credit is negative.
/// Returns `ReconciliationError::EmptyLine` if both are zero.
/// Returns `ReconciliationError::DebitAndCredit` if both are set.
pub fn accept_statement_line(
    id: LineId,
    input: StatementLineInput,
) -> Result<BankLedgerLine, ReconciliationError> {
    let date = input.date.ok_or(ReconciliationError::MissingField("Date"))?;
    let ref_no = input.ref_no.trim();
    if ref_no.is_empty() {
        return Err(ReconciliationError::MissingField("Reference number"));
    }
    if input.debit < Decimal::ZERO || input.credit < Decimal::ZERO {
        return Err(ReconciliationError::NegativeAmount);
    }
    match (input.debit.is_zero(), input.credit.is_zero()) {
        (true, true) => return Err(ReconciliationError::EmptyLine),
        (false, false) => return Err(ReconciliationError::DebitAndCredit),
        _ => {}
    }

    Ok(BankLedgerLine {
        id,
        side: LedgerSide::Statement,
        date,
        ref_no: ref_no.to_string(),
        description: input.description.trim().to_string(),
        debit: input.debit,
        credit: input.credit,
        reconciled: false,
    })
}

/// Flips the reconciled flag of line `id`, returning its new value.
///
/// Returns `None` when no line has that ID.
pub fn toggle_reconciled(lines: &mut [BankLedgerLine], id: LineId) -> Option<bool> {
    lines.iter_mut().find(|line| line.id == id).map(|line| {
        line.reconciled = !line.reconciled;
        line.reconciled
    })
}

impl ReconciliationRecord {
    /// Snapshots a summary for the reconciliation history.
    ///
    /// # Errors
    ///
    /// Returns `ReconciliationError::MissingField` if the as-of date or
    /// preparer is missing.
    pub fn from_summary(
        summary: &ReconciliationSummary,
        as_of: Option<NaiveDate>,
        bank_account_name: &str,
        prepared_by: &str,
        remarks: Option<&str>,
    ) -> Result<Self, ReconciliationError> {
        let as_of = as_of.ok_or(ReconciliationError::MissingField("As-of date"))?;
        let prepared_by = prepared_by.trim();
        if prepared_by.is_empty() {
            return Err(ReconciliationError::MissingField("Prepared by"));
        }

        Ok(Self {
            as_of,
            bank_account_name: bank_account_name.to_string(),
            prepared_by: prepared_by.to_string(),
            book_closing: summary.book_closing,
            statement_closing: summary.statement_closing,
            difference: summary.difference,
            status: summary.status,
            remarks: remarks
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(str::to_string),
        })
    }
}
