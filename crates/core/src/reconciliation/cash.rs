//! Cash drawer reconciliation.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Taka note and coin values, largest first.
pub const TAKA_DENOMINATIONS: [u32; 10] = [1000, 500, 200, 100, 50, 20, 10, 5, 2, 1];

/// A note or coin value and how many were counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Denomination {
    /// Face value.
    pub value: u32,
    /// Number counted.
    pub count: u32,
}

impl Denomination {
    /// `value * count`.
    #[must_use]
    pub fn total(&self) -> Decimal {
        Decimal::from(self.value) * Decimal::from(self.count)
    }
}

/// Physical count of the drawer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashCount {
    denominations: Vec<Denomination>,
}

impl Default for CashCount {
    fn default() -> Self {
        Self::new()
    }
}

impl CashCount {
    /// Empty count over the Taka denominations.
    #[must_use]
    pub fn new() -> Self {
        Self {
            denominations: TAKA_DENOMINATIONS
                .iter()
                .map(|&value| Denomination { value, count: 0 })
                .collect(),
        }
    }

    /// Sets the count for a face value, adding the value if it is not listed.
    pub fn set(&mut self, value: u32, count: u32) {
        match self.denominations.iter_mut().find(|d| d.value == value) {
            Some(d) => d.count = count,
            None => self.denominations.push(Denomination { value, count }),
        }
    }

    /// Builder form of [`CashCount::set`].
    #[must_use]
    pub fn with(mut self, value: u32, count: u32) -> Self {
        self.set(value, count);
        self
    }

    /// Counted denominations.
    #[must_use]
    pub fn denominations(&self) -> &[Denomination] {
        &self.denominations
    }

    /// Sum of every denomination's total.
    #[must_use]
    pub fn physical_total(&self) -> Decimal {
        self.denominations.iter().map(Denomination::total).sum()
    }
}

/// Outcome of a cash count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashStatus {
    /// Drawer matches the system.
    Balanced,
    /// Less cash than expected.
    Short,
    /// More cash than expected.
    Excess,
}

impl CashStatus {
    /// Classifies `physical - system`.
    #[must_use]
    pub fn classify(difference: Decimal) -> Self {
        match difference.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Less => Self::Short,
            std::cmp::Ordering::Greater => Self::Excess,
            std::cmp::Ordering::Equal => Self::Balanced,
        }
    }
}

impl fmt::Display for CashStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Balanced => "Balanced",
            Self::Short => "Short",
            Self::Excess => "Excess",
        })
    }
}

/// Result of reconciling the drawer against the system balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashReconciliation {
    /// Opening balance.
    pub opening: Decimal,
    /// Cash received during the day.
    pub receipts: Decimal,
    /// Cash paid out during the day.
    pub payments: Decimal,
    /// `opening + receipts - payments`.
    pub system_closing: Decimal,
    /// Counted cash.
    pub physical_total: Decimal,
    /// `physical_total - system_closing`.
    pub difference: Decimal,
    /// Classification of `difference`.
    pub status: CashStatus,
}

impl CashReconciliation {
    /// Reconciles a physical count against the day's movements.
    #[must_use]
    pub fn compute(opening: Decimal, receipts: Decimal, payments: Decimal, count: &CashCount) -> Self {
        let system_closing = opening + receipts - payments;
        let physical_total = count.physical_total();
        let difference = physical_total - system_closing;

        Self {
            opening,
            receipts,
            payments,
            system_closing,
            physical_total,
            difference,
            status: CashStatus::classify(difference),
        }
    }
}
