use log::{debug, warn};
use std::sync::Arc;

use coinfolio_market_data::{PriceFeed, PriceTable};

use super::valuation_calculator::{required_identifiers, value_of};
use super::valuation_traits::ValuationServiceTrait;
use crate::assets::Asset;
use crate::errors::{Error, Result};

/// Values assets against prices fetched fresh from a [`PriceFeed`] on every call.
pub struct ValuationService {
    price_feed: Arc<dyn PriceFeed>,
}

impl ValuationService {
    pub fn new(price_feed: Arc<dyn PriceFeed>) -> Self {
        Self { price_feed }
    }

    async fn fetch_for(&self, assets: &[Asset], reference_currency: &str) -> Result<PriceTable> {
        // Resolve everything up front so a bad ticker never costs a network call.
        let identifiers = required_identifiers(assets)?;
        debug!(
            "Fetching {} prices in {} from {}",
            identifiers.len(),
            reference_currency,
            self.price_feed.id()
        );
        self.price_feed
            .fetch_prices(&identifiers, reference_currency)
            .await
            .map_err(|e| {
                warn!("Price fetch from {} failed: {}", self.price_feed.id(), e);
                Error::from(e)
            })
    }
}

#[async_trait::async_trait]
impl ValuationServiceTrait for ValuationService {
    async fn total_value_of(&self, assets: &[Asset], reference_currency: &str) -> Result<f64> {
        if assets.is_empty() {
            return Ok(0.0);
        }

        let prices = self.fetch_for(assets, reference_currency).await?;
        let mut total = 0.0;
        for asset in assets {
            total += value_of(asset, &prices, reference_currency)?;
        }
        Ok(total)
    }

    async fn asset_value(&self, asset: &Asset, reference_currency: &str) -> Result<f64> {
        let prices = self.fetch_for(std::slice::from_ref(asset), reference_currency).await?;
        value_of(asset, &prices, reference_currency)
    }
}
