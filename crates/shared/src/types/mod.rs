//! Common types used across the application.

pub mod coerce;
pub mod envelope;
pub mod id;

pub use envelope::normalize_list;
pub use id::*;
