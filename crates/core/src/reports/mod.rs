//! Financial report generation.
//!
//! Pure calculations over already-fetched records:
//! - Profit & Loss with year-over-year comparison
//! - Sales summary
//! - Customer statement

pub mod service;
pub mod types;


pub use service::{ReportService, percent_change};
pub use types::*;
