//! Currency name resolution for the price feed.
//!
//! Assets store short tickers ("BTC"); the price feed is keyed by long-form
//! identifiers ("bitcoin"). The mapping is a closed, compile-time table.

mod currency_names;

pub use currency_names::{resolve, resolve_all, supported_tickers, CURRENCY_IDENTIFIERS};
