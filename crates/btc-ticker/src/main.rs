//! btc-ticker
//!
//! Prints the current BTC price in EUR. The price source and HTTP transport
//! are chosen by `BTC_API_CLIENT_MODULE` and `HTTP_CLIENT_MODULE`, read from
//! the environment or a `.env` file:
//!
//! ```text
//! BTC_API_CLIENT_MODULE=btc_api_client.blockchain_com.BlockchainComClient
//! HTTP_CLIENT_MODULE=http_client.reqwest.ReqwestHttpClient
//! ```

mod orchestrator;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ticker_core::ProcessEnvironment;

use crate::orchestrator::Orchestrator;

fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Logs go to stderr, stdout carries only the price line
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let orchestrator = Orchestrator::from_env(Arc::new(ProcessEnvironment));
    println!("{}", orchestrator.run()?);

    Ok(())
}
