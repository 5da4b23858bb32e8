//! # ticker-core
//!
//! Capability contracts and plumbing for the BTC price ticker.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   resolve    ┌──────────────┐   resolve    ┌──────────────┐
//! │ Orchestrator │─────────────▶│ PriceClient  │─────────────▶│  HttpClient  │──▶ ticker API
//! └──────────────┘  (Registry)  └──────────────┘  (Registry)  └──────────────┘
//! ```
//!
//! Implementations are never hard-wired. Each role is selected at call time
//! by an identifier read from the [`Environment`] and looked up in a
//! [`Registry`] of statically known constructors, so swapping the live HTTP
//! client for a stub is a configuration change.

pub mod config;
pub mod error;
pub mod http;
pub mod price;
pub mod registry;

pub use config::{Environment, ProcessEnvironment};
pub use error::{ErrorKind, Result, TickerError};
pub use http::{HttpClient, HttpResponse};
pub use price::PriceClient;
pub use registry::{Factory, Registry};

/// Selects the [`PriceClient`] implementation
pub const PRICE_CLIENT_ENV: &str = "BTC_API_CLIENT_MODULE";

/// Selects the [`HttpClient`] implementation
pub const HTTP_CLIENT_ENV: &str = "HTTP_CLIENT_MODULE";
