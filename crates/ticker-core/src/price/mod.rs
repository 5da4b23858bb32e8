//! Price Client
//!
//! A source of the current BTC price. Each implementation fixes its own
//! endpoint and quote currency; the contract only promises a number.

mod mock;

pub use mock::{StubPriceClient, STUB_PRICE};

use crate::error::Result;

/// Price source trait (Strategy pattern)
///
/// Implement this for each ticker: blockchain.com, Kraken, etc.
pub trait PriceClient: Send + Sync {
    /// Current BTC price in the implementation's quote currency
    fn get_current_price_in_currency(&self) -> Result<f64>;
}
