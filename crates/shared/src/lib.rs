//! Shared types, errors, and configuration for Ledgerdesk.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for backend record references
//! - Lenient coercion of loosely-typed wire values
//! - List envelope normalization for list endpoints
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
