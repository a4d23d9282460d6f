//! Stock levels and the inventory snapshot.

use std::fmt;

use ledgerdesk_shared::types::StockId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A stock item as reported by the backend.
///
/// Usable and damaged quantities are maintained server side and are
/// taken as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    /// Stock ID.
    pub id: StockId,
    /// Product name.
    pub product_name: String,
    /// Quantity on hand.
    pub current_quantity: Decimal,
    /// Reorder level, if one was set.
    pub reorder_level: Option<Decimal>,
    /// Damaged quantity.
    pub damage_quantity: Decimal,
    /// Value of the quantity on hand.
    pub current_value: Decimal,
}

/// Stock level classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    /// At or below the reorder level.
    LowStock,
    /// Above the reorder level.
    Healthy,
}

impl StockStatus {
    /// `LowStock` when `current <= reorder_level`. Without a reorder level
    /// `default_threshold` is used instead.
    #[must_use]
    pub fn classify(
        current: Decimal,
        reorder_level: Option<Decimal>,
        default_threshold: Decimal,
    ) -> Self {
        if current <= reorder_level.unwrap_or(default_threshold) {
            Self::LowStock
        } else {
            Self::Healthy
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::LowStock => "Low Stock",
            Self::Healthy => "Healthy",
        })
    }
}

impl StockItem {
    /// Status against the item's own reorder level or `default_threshold`.
    #[must_use]
    pub fn status(&self, default_threshold: Decimal) -> StockStatus {
        StockStatus::classify(self.current_quantity, self.reorder_level, default_threshold)
    }
}

/// Inventory totals for the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    /// Number of stock items.
    pub item_count: usize,
    /// Total quantity on hand.
    pub total_on_hand: Decimal,
    /// Items at or below their own reorder level.
    pub low_stock_count: usize,
    /// Total damaged quantity.
    pub damaged_quantity: Decimal,
    /// Total value on hand.
    pub stock_value: Decimal,
}

impl InventorySnapshot {
    /// Totals over `items`.
    ///
    /// Only items with a reorder level count towards `low_stock_count`.
    #[must_use]
    pub fn of(items: &[StockItem]) -> Self {
        Self {
            item_count: items.len(),
            total_on_hand: items.iter().map(|i| i.current_quantity).sum(),
            low_stock_count: items
                .iter()
                .filter(|i| i.reorder_level.is_some_and(|level| i.current_quantity <= level))
                .count(),
            damaged_quantity: items.iter().map(|i| i.damage_quantity).sum(),
            stock_value: items.iter().map(|i| i.current_value).sum(),
        }
    }
}
