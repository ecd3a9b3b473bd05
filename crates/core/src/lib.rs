//! Coinfolio Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for Coinfolio: assets and their
//! ownership, users, and the valuation engine. It is database-agnostic and
//! defines repository traits that are implemented by the `storage-sqlite`
//! crate.

pub mod assets;
pub mod constants;
pub mod errors;
pub mod users;
pub mod valuation;

// Re-export common types
pub use assets::*;
pub use valuation::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
