//! Pure valuation math over an already fetched [`PriceTable`].

use std::collections::BTreeSet;

use coinfolio_market_data::{resolve, resolve_all, PriceTable};

use crate::assets::Asset;
use crate::errors::Result;

/// Value of a single asset in `reference_currency`.
///
/// Fails with `UnknownCurrency` when the ticker is unsupported and with
/// `PriceNotFound` when `prices` lacks the resolved pair.
pub fn value_of(asset: &Asset, prices: &PriceTable, reference_currency: &str) -> Result<f64> {
    let identifier = resolve(&asset.currency)?;
    let unit_price = prices.price(identifier, reference_currency)?;
    Ok(asset.amount * unit_price)
}

/// Distinct feed identifiers needed to value `assets`.
pub fn required_identifiers(assets: &[Asset]) -> Result<BTreeSet<String>> {
    Ok(resolve_all(assets.iter().map(|a| a.currency.as_str()))?)
}
