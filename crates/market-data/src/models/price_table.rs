use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::MarketDataError;

/// Prices keyed by feed identifier, then by reference-currency code.
///
/// Mirrors the body of the `simple/price` endpoint:
/// `{ "bitcoin": { "usd": 50000.0 }, ... }`. A table is built for a single
/// valuation and dropped afterwards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable(HashMap<String, HashMap<String, f64>>);

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the price of `identifier` in `vs_currency`.
    pub fn insert(&mut self, identifier: &str, vs_currency: &str, price: f64) {
        self.0
            .entry(identifier.to_string())
            .or_default()
            .insert(vs_currency.to_string(), price);
    }

    /// Builder-style variant of [`insert`](Self::insert), handy for fixtures.
    pub fn with_price(mut self, identifier: &str, vs_currency: &str, price: f64) -> Self {
        self.insert(identifier, vs_currency, price);
        self
    }

    /// Looks up the unit price of `identifier` in `vs_currency`.
    ///
    /// A missing identifier and a missing currency code both fail with
    /// [`MarketDataError::PriceNotFound`].
    pub fn price(&self, identifier: &str, vs_currency: &str) -> Result<f64, MarketDataError> {
        self.0
            .get(identifier)
            .and_then(|prices| prices.get(vs_currency))
            .copied()
            .ok_or_else(|| MarketDataError::PriceNotFound {
                identifier: identifier.to_string(),
                vs_currency: vs_currency.to_string(),
            })
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.0.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, HashMap<String, f64>>> for PriceTable {
    fn from(prices: HashMap<String, HashMap<String, f64>>) -> Self {
        Self(prices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_lookup() {
        let table = PriceTable::new()
            .with_price("bitcoin", "usd", 50000.0)
            .with_price("bitcoin", "eur", 46000.0);

        assert_eq!(table.price("bitcoin", "usd").unwrap(), 50000.0);
        assert_eq!(table.price("bitcoin", "eur").unwrap(), 46000.0);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_missing_identifier_is_price_not_found() {
        let table = PriceTable::new().with_price("bitcoin", "usd", 50000.0);

        match table.price("ethereum", "usd") {
            Err(MarketDataError::PriceNotFound {
                identifier,
                vs_currency,
            }) => {
                assert_eq!(identifier, "ethereum");
                assert_eq!(vs_currency, "usd");
            }
            other => panic!("expected PriceNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_vs_currency_is_price_not_found() {
        let table = PriceTable::new().with_price("bitcoin", "eur", 46000.0);
        assert!(matches!(
            table.price("bitcoin", "usd"),
            Err(MarketDataError::PriceNotFound { .. })
        ));
    }

    #[test]
    fn test_deserializes_feed_shape() {
        let body = r#"{"bitcoin":{"usd":50000},"ethereum":{"usd":3000.5}}"#;
        let table: PriceTable = serde_json::from_str(body).unwrap();

        assert!(table.contains("bitcoin"));
        assert_eq!(table.price("ethereum", "usd").unwrap(), 3000.5);
    }
}
