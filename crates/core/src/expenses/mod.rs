//! Expense aggregation across general, salary and purchase records.
//!
//! Each source dates its records differently: general expenses and
//! purchases carry a calendar date, salary records carry a `YYYY-MM`
//! month that is compared as the first day of that month.

pub mod range;
pub mod report;
pub mod types;

pub use range::DateRange;
pub use report::{CategoryTotal, ExpenseReport, SourceTotal, expense_report, totals_by_category};
pub use types::{ExpenseDate, ExpenseRecord, ExpenseSource, SalaryComponents};
