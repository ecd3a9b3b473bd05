//! Error types and remediation classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The error enum for ticker resolution and price lookups
//! - [`Remediation`]: Classification telling callers whether to fix data or retry the feed

mod remediation;

pub use remediation::Remediation;

use thiserror::Error;

/// Errors that can occur while resolving tickers or fetching prices.
///
/// Each variant maps to a [`Remediation`] via [`remediation`](Self::remediation).
/// None of them is recovered inside this crate.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The ticker is not part of the supported currency table.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Transport failure or non-2xx response from the price feed.
    #[error("Price feed error: {provider} - {message}")]
    PriceFeed {
        /// The provider that failed
        provider: String,
        /// Transport or status description
        message: String,
    },

    /// The price feed answered, but the body is not the expected JSON shape.
    #[error("Failed to decode {provider} response: {message}")]
    Decode {
        /// The provider whose response could not be decoded
        provider: String,
        /// The decoder's description of the problem
        message: String,
    },

    /// The decoded price table has no entry for the requested pair.
    #[error("No {vs_currency} price for {identifier}")]
    PriceNotFound {
        /// Long-form feed identifier, e.g. "bitcoin"
        identifier: String,
        /// Reference currency code, e.g. "usd"
        vs_currency: String,
    },
}

impl MarketDataError {
    /// Returns the remediation class for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use coinfolio_market_data::errors::{MarketDataError, Remediation};
    ///
    /// let error = MarketDataError::UnknownCurrency("DOGE".to_string());
    /// assert_eq!(error.remediation(), Remediation::FixAssetData);
    ///
    /// let error = MarketDataError::PriceNotFound {
    ///     identifier: "ethereum".to_string(),
    ///     vs_currency: "usd".to_string(),
    /// };
    /// assert_eq!(error.remediation(), Remediation::RetryFeed);
    /// ```
    pub fn remediation(&self) -> Remediation {
        match self {
            Self::UnknownCurrency(_) => Remediation::FixAssetData,
            Self::PriceFeed { .. } | Self::Decode { .. } | Self::PriceNotFound { .. } => {
                Remediation::RetryFeed
            }
        }
    }
}
