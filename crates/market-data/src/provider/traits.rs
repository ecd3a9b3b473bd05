//! Price feed trait definition.

use async_trait::async_trait;
use std::collections::BTreeSet;

use crate::errors::MarketDataError;
use crate::models::PriceTable;

/// A source of spot prices.
///
/// One call is one outbound request: implementations must not batch across
/// calls, retry, or cache. Callers are expected to ask for every identifier
/// they need at once.
#[async_trait]
pub trait PriceFeed: Send + Sync {
    /// Unique identifier for this provider, used in errors and logs.
    fn id(&self) -> &'static str;

    /// Fetch prices for `identifiers` (feed identifiers such as "bitcoin")
    /// against a single reference currency code such as "usd".
    async fn fetch_prices(
        &self,
        identifiers: &BTreeSet<String>,
        vs_currency: &str,
    ) -> Result<PriceTable, MarketDataError>;
}
