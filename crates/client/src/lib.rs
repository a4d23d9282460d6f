//! Collector boundary for Ledgerdesk.
//!
//! Fetches list resources from the REST backend, normalizes the loosely
//! shaped responses into core records and hands them to the pure
//! calculations in `ledgerdesk-core`.
//!
//! # Modules
//!
//! - `collector` - Resources, tenant context and the `Collector` trait
//! - `http` - `reqwest` implementation of `Collector`
//! - `wire` - Response record shapes
//! - `normalize` - Wire record to core record conversion
//! - `service` - Request functions joining several fetches into one view

pub mod collector;
pub mod error;
pub mod http;
pub mod normalize;
pub mod service;
pub mod wire;

pub use collector::{Collector, Resource, TenantContext};
pub use error::ClientError;
pub use http::HttpCollector;
pub use service::LedgerService;
