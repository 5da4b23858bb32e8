//! Orchestrator
//!
//! Resolve a price client, fetch once, render the message. Nothing is kept
//! between runs and errors pass through untouched.

use std::sync::Arc;

use tracing::debug;

use ticker_core::{Environment, PRICE_CLIENT_ENV, PriceClient, Registry, Result};

/// Render the price line
///
/// Uses the `Debug` float form so whole numbers keep a decimal digit
/// (`20000.0`, not `20000`).
pub fn format_price_message(price: f64) -> String {
    format!("Current price of BTC is {price:?} EUR.")
}

pub struct Orchestrator {
    env: Arc<dyn Environment>,
    price_clients: Registry<dyn PriceClient>,
}

impl Orchestrator {
    pub fn new(env: Arc<dyn Environment>, price_clients: Registry<dyn PriceClient>) -> Self {
        Self { env, price_clients }
    }

    /// Wire the default registries to `env`
    pub fn from_env(env: Arc<dyn Environment>) -> Self {
        let price_clients = ticker_runtime::price_clients(env.clone());
        Self::new(env, price_clients)
    }

    pub fn run(&self) -> Result<String> {
        let client = self.price_clients.build(self.env.as_ref(), PRICE_CLIENT_ENV)?;
        let price = client.get_current_price_in_currency()?;
        debug!(price, "rendering price");
        Ok(format_price_message(price))
    }
}
