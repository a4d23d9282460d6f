//! Payment application against sales and purchase documents.
//!
//! - Running-balance allocation of payments in a deterministic order
//! - Document status classification (Paid / Unpaid / Partially Paid)
//! - Per-document balance summaries
//! - The flattened payment register shown on the payments screens
//! - Boundary validation for new payment entries

pub mod allocator;
pub mod error;
pub mod register;
pub mod status;
pub mod summary;
pub mod types;
pub mod validation;

#[cfg(test)]
mod props;

pub use allocator::{Allocation, allocate, allocate_payments, due_amount, total_paid};
pub use error::PaymentError;
pub use register::{RegisterFilter, RegisterRow, payment_register, register_total};
pub use status::PaymentStatus;
pub use summary::DocumentBalance;
pub use types::{DocumentKind, LedgerDocument, PaymentEntry, PaymentMode};
pub use validation::validate_new_payment;
