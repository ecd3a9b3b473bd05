use crate::assets::Asset;
use crate::errors::Result;

/// Trait defining the contract for valuation operations.
///
/// Ownership is not checked here; callers pass only assets the user may see.
#[async_trait::async_trait]
pub trait ValuationServiceTrait: Send + Sync {
    /// Sum of all asset values, from a single price fetch. Empty input is 0.
    async fn total_value_of(&self, assets: &[Asset], reference_currency: &str) -> Result<f64>;

    /// Value of one asset, from a fresh price fetch.
    async fn asset_value(&self, asset: &Asset, reference_currency: &str) -> Result<f64>;
}
