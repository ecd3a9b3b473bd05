/// Reference currency every valuation is expressed in
pub const REFERENCE_CURRENCY: &str = "usd";

/// Display suffix for values in the reference currency
pub const REFERENCE_CURRENCY_ICON: &str = "$";
