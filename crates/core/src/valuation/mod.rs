//! Valuation module - converts asset holdings into the reference currency.

mod valuation_calculator;
mod valuation_service;
mod valuation_traits;


pub use valuation_calculator::{required_identifiers, value_of};
pub use valuation_service::ValuationService;
pub use valuation_traits::ValuationServiceTrait;
