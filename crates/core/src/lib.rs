//! Core business logic for Ledgerdesk.
//!
//! This crate contains pure business logic with ZERO web or I/O dependencies.
//! Every function here works on already-fetched, normalized records.
//!
//! # Modules
//!
//! - `payments` - Running-balance allocation, payment status, payment register
//! - `reconciliation` - Bank and cash reconciliation
//! - `expenses` - Expense totals by source and category over a date range
//! - `trend` - Monthly sales vs. expense buckets
//! - `words` - Amounts in words on the Crore/Lakh scale
//! - `reports` - Profit & Loss, sales summary, customer statement
//! - `inventory` - Stock status and inventory totals
//! - `dashboard` - Dashboard view

pub mod calendar;
pub mod dashboard;
pub mod expenses;
pub mod inventory;
pub mod payments;
pub mod reconciliation;
pub mod reports;
pub mod trend;
pub mod words;
