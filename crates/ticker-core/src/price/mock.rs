//! Stub price client

use super::PriceClient;
use crate::error::Result;

/// Price returned by [`StubPriceClient::default`]
pub const STUB_PRICE: f64 = 20000.0;

/// Always returns the same price
#[derive(Clone, Copy, Debug)]
pub struct StubPriceClient {
    price: f64,
}

impl Default for StubPriceClient {
    fn default() -> Self {
        Self::new(STUB_PRICE)
    }
}

impl StubPriceClient {
    pub const fn new(price: f64) -> Self {
        Self { price }
    }
}

impl PriceClient for StubPriceClient {
    fn get_current_price_in_currency(&self) -> Result<f64> {
        Ok(self.price)
    }
}
