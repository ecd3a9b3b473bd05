//! Market data models
//!
//! - `price_table` - Identifier → reference currency → price lookup table (PriceTable)

mod price_table;

pub use price_table::PriceTable;
