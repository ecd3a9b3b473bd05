//! CoinGecko price feed.
//!
//! Fetches spot prices through the public `simple/price` endpoint:
//! `GET <base>/api/v3/simple/price?ids=bitcoin,ethereum&vs_currencies=usd`.
//! The response body is `{ "<id>": { "<vs>": <price> } }` and is decoded
//! verbatim into a [`PriceTable`].

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use std::collections::BTreeSet;

use crate::errors::MarketDataError;
use crate::models::PriceTable;
use crate::provider::PriceFeed;

/// Provider ID constant
const PROVIDER_ID: &str = "COINGECKO";

/// Public API host
pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com";

const SIMPLE_PRICE_PATH: &str = "/api/v3/simple/price";

/// CoinGecko-backed price feed.
///
/// # Example
///
/// ```ignore
/// use coinfolio_market_data::provider::coingecko::CoinGeckoProvider;
///
/// let provider = CoinGeckoProvider::new("https://api.coingecko.com")?;
/// ```
pub struct CoinGeckoProvider {
    client: Client,
    base: Url,
}

impl CoinGeckoProvider {
    /// Creates a provider against `base_url` (scheme and host, optionally a
    /// path prefix). The request path is appended to it.
    pub fn new(base_url: &str) -> Result<Self, MarketDataError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, MarketDataError> {
        let base = Url::parse(base_url).map_err(|e| MarketDataError::PriceFeed {
            provider: PROVIDER_ID.to_string(),
            message: format!("Invalid base URL '{}': {}", base_url, e),
        })?;
        Ok(Self { client, base })
    }

    /// Builds the request URL for one `simple/price` call.
    fn price_url(&self, identifiers: &BTreeSet<String>, vs_currency: &str) -> Url {
        let mut url = self.base.clone();
        let path = format!(
            "{}{}",
            self.base.path().trim_end_matches('/'),
            SIMPLE_PRICE_PATH
        );
        url.set_path(&path);
        // `ids` goes out as a literal comma-joined list.
        url.set_query(Some(&format!(
            "ids={}&vs_currencies={}",
            join_identifiers(identifiers),
            vs_currency
        )));
        url
    }

    fn feed_error(message: impl Into<String>) -> MarketDataError {
        MarketDataError::PriceFeed {
            provider: PROVIDER_ID.to_string(),
            message: message.into(),
        }
    }
}

fn join_identifiers(identifiers: &BTreeSet<String>) -> String {
    identifiers
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

/// Decodes a `simple/price` body. Only JSON well-formedness and the nested
/// object shape are checked.
pub fn parse_price_table(body: &[u8]) -> Result<PriceTable, MarketDataError> {
    serde_json::from_slice::<PriceTable>(body).map_err(|e| MarketDataError::Decode {
        provider: PROVIDER_ID.to_string(),
        message: e.to_string(),
    })
}

#[async_trait]
impl PriceFeed for CoinGeckoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_prices(
        &self,
        identifiers: &BTreeSet<String>,
        vs_currency: &str,
    ) -> Result<PriceTable, MarketDataError> {
        let url = self.price_url(identifiers, vs_currency);
        debug!("Requesting {} prices: {}", PROVIDER_ID, url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| Self::feed_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} returned HTTP {}", PROVIDER_ID, status);
            return Err(Self::feed_error(format!("HTTP {}", status)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Self::feed_error(e.to_string()))?;

        parse_price_table(&body)
    }
}
