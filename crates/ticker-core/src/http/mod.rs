//! HTTP Client
//!
//! The one verb the ticker needs. Implement [`HttpClient`] for each
//! transport: the live reqwest client, stubs for tests, and so on.

mod mock;

pub use mock::{EchoHttpClient, StubHttpClient, STUB_TICKER_BODY};

use serde::de::DeserializeOwned;

use crate::error::{Result, TickerError};

/// Status code and raw body of a completed request
///
/// Any status is kept as-is. A non-2xx reply is still a response, and callers
/// that need JSON find out through [`HttpResponse::parse`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    status_code: u16,
    body: Option<Vec<u8>>,
}

impl HttpResponse {
    pub fn new(status_code: u16, body: Option<Vec<u8>>) -> Self {
        Self { status_code, body }
    }

    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// 2xx status. Informational only, nothing rejects other codes
    pub const fn is_success(&self) -> bool {
        self.status_code >= 200 && self.status_code < 300
    }

    /// Parse the body as JSON
    ///
    /// Deferred until called, and repeated on every call.
    pub fn parse(&self) -> Result<serde_json::Value> {
        self.parse_as()
    }

    /// Parse the body as JSON into `T`
    pub fn parse_as<T: DeserializeOwned>(&self) -> Result<T> {
        let body = self.body.as_deref().ok_or(TickerError::EmptyBody)?;
        Ok(serde_json::from_slice(body)?)
    }
}

/// HTTP client trait (Strategy pattern)
pub trait HttpClient: Send + Sync {
    /// Issue a GET to `url`
    fn get(&self, url: &str) -> Result<HttpResponse>;
}
