//! Document payment status classification.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::allocator::due_amount;

/// Payment status of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Nothing payable and nothing paid.
    #[serde(rename = "N/A")]
    NotApplicable,
    /// Payable but nothing paid yet.
    Unpaid,
    /// Fully settled.
    Paid,
    /// Some payment received, balance still due.
    #[serde(rename = "Partially Paid")]
    PartiallyPaid,
}

impl PaymentStatus {
    /// Classifies a document from its total payable and the sum paid.
    ///
    /// Total over all inputs, including negative values.
    #[must_use]
    pub fn classify(total: Decimal, paid: Decimal) -> Self {
        if total <= Decimal::ZERO && paid <= Decimal::ZERO {
            Self::NotApplicable
        } else if paid <= Decimal::ZERO {
            Self::Unpaid
        } else if due_amount(total, paid).is_zero() {
            Self::Paid
        } else {
            Self::PartiallyPaid
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotApplicable => "N/A",
            Self::Unpaid => "Unpaid",
            Self::Paid => "Paid",
            Self::PartiallyPaid => "Partially Paid",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
