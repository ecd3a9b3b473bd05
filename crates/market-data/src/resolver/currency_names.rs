//! Ticker → price feed identifier mapping.

use std::collections::BTreeSet;

use crate::errors::MarketDataError;

/// Supported tickers and their long-form feed identifiers.
///
/// Extending the supported universe means adding a row here.
pub const CURRENCY_IDENTIFIERS: &[(&str, &str)] = &[
    ("BTC", "bitcoin"),
    ("ETH", "ethereum"),
    ("IOTA", "iota"),
];

/// Resolves a ticker (any case) to its feed identifier.
///
/// # Example
///
/// ```
/// use coinfolio_market_data::resolver::resolve;
///
/// assert_eq!(resolve("btc").unwrap(), "bitcoin");
/// assert!(resolve("DOGE").is_err());
/// ```
pub fn resolve(ticker: &str) -> Result<&'static str, MarketDataError> {
    let normalized = ticker.to_uppercase();
    CURRENCY_IDENTIFIERS
        .iter()
        .find(|(symbol, _)| *symbol == normalized)
        .map(|(_, identifier)| *identifier)
        .ok_or_else(|| MarketDataError::UnknownCurrency(ticker.to_string()))
}

/// Resolves every ticker and returns the distinct identifiers, sorted.
///
/// Fails on the first ticker that is not supported.
pub fn resolve_all<'a, I>(tickers: I) -> Result<BTreeSet<String>, MarketDataError>
where
    I: IntoIterator<Item = &'a str>,
{
    tickers
        .into_iter()
        .map(|ticker| resolve(ticker).map(str::to_string))
        .collect()
}

/// Tickers accepted by [`resolve`], in table order.
pub fn supported_tickers() -> impl Iterator<Item = &'static str> {
    CURRENCY_IDENTIFIERS.iter().map(|(symbol, _)| *symbol)
}
