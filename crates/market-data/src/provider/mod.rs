//! Price feed abstractions and implementations.
//!
//! - The `PriceFeed` trait every price source implements
//! - `coingecko`: the CoinGecko `simple/price` client

mod traits;

pub mod coingecko;

pub use traits::PriceFeed;
