//! Coinfolio Market Data Crate
//!
//! This crate turns asset tickers into prices for the valuation engine.
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |  Asset ticker    | --> |    Resolver      |  ("BTC" -> "bitcoin")
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   PriceFeed      |  (CoinGecko simple/price)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   PriceTable     |  (identifier -> vs -> price)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`PriceTable`] - Prices keyed by feed identifier and reference currency
//! - [`PriceFeed`] - Trait for price sources
//! - [`CoinGeckoProvider`] - The CoinGecko implementation
//! - [`MarketDataError`] - Errors with a [`Remediation`] classification

pub mod errors;
pub mod models;
pub mod provider;
pub mod resolver;

pub use errors::{MarketDataError, Remediation};
pub use models::PriceTable;
pub use provider::coingecko::CoinGeckoProvider;
pub use provider::PriceFeed;
pub use resolver::{resolve, resolve_all, supported_tickers};
