//! Dashboard view.
//!
//! Combines the month snapshot, counts, inventory totals, recent invoices
//! and the sales vs. expenses trend computed from already-fetched data.

pub mod types;

pub use types::*;
