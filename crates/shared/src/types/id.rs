//! Typed IDs for backend record references.
//!
//! The backend keys every record by an integer primary key. Wrapping them
//! prevents passing a `CustomerId` where a `DocumentId` is expected.

use serde::{Deserialize, Serialize};

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Creates an ID from a raw backend key.
            #[must_use]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the raw backend key.
            #[must_use]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

typed_id!(DocumentId, "Identifier of a sale or purchase document.");
typed_id!(PaymentId, "Identifier of a payment entry.");
typed_id!(CustomerId, "Identifier of a customer.");
typed_id!(ExpenseId, "Identifier of an expense record.");
typed_id!(StockId, "Identifier of a stock item.");
typed_id!(LineId, "Identifier of a bank ledger line.");
typed_id!(BusinessCategoryId, "Identifier of a business category (tenant).");
