//! # ticker-runtime
//!
//! Concrete implementations for the btc-ticker contracts, and the default
//! registries that make them selectable by name.
//!
//! ## HTTP clients (`HTTP_CLIENT_MODULE`)
//!
//! - `http_client.reqwest.ReqwestHttpClient` - live transport (feature `reqwest`, default)
//! - `http_client.mock.StubHttpClient` - canned ticker body
//! - `http_client.mock.EchoHttpClient` - echoes the URL back
//!
//! ## Price clients (`BTC_API_CLIENT_MODULE`)
//!
//! - `btc_api_client.blockchain_com.BlockchainComClient` - blockchain.info ticker, EUR
//! - `btc_api_client.mock.StubPriceClient` - fixed price
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ticker_runtime::price_clients;
//! use ticker_core::{ProcessEnvironment, PRICE_CLIENT_ENV};
//!
//! let env = Arc::new(ProcessEnvironment);
//! let client = price_clients(env.clone()).build(env.as_ref(), PRICE_CLIENT_ENV)?;
//! let price = client.get_current_price_in_currency()?;
//! ```

pub mod blockchain_com;

#[cfg(feature = "reqwest")]
pub mod reqwest_client;

pub use blockchain_com::BlockchainComClient;

#[cfg(feature = "reqwest")]
pub use reqwest_client::ReqwestHttpClient;

use std::sync::Arc;

use ticker_core::http::{EchoHttpClient, StubHttpClient};
use ticker_core::price::StubPriceClient;
use ticker_core::{Environment, HttpClient, PriceClient, Registry};

// Re-export core types for convenience
pub use ticker_core::{
    ErrorKind, HTTP_CLIENT_ENV, HttpResponse, PRICE_CLIENT_ENV, ProcessEnvironment, Result,
    TickerError,
};

/// Every HTTP client this build knows about
pub fn http_clients() -> Registry<dyn HttpClient> {
    let mut registry: Registry<dyn HttpClient> = Registry::new();

    #[cfg(feature = "reqwest")]
    registry.register("http_client.reqwest.ReqwestHttpClient", || {
        Box::new(ReqwestHttpClient::new())
    });
    registry.register("http_client.mock.StubHttpClient", || {
        Box::new(StubHttpClient::default())
    });
    registry.register("http_client.mock.EchoHttpClient", || Box::new(EchoHttpClient));

    registry
}

/// Every price client this build knows about
///
/// Price clients that need an HTTP client resolve it from `env` when they
/// fetch, not when they are built.
pub fn price_clients(env: Arc<dyn Environment>) -> Registry<dyn PriceClient> {
    let mut registry: Registry<dyn PriceClient> = Registry::new();

    registry.register("btc_api_client.blockchain_com.BlockchainComClient", move || {
        Box::new(BlockchainComClient::new(env.clone()))
    });
    registry.register("btc_api_client.mock.StubPriceClient", || {
        Box::new(StubPriceClient::default())
    });

    registry
}
