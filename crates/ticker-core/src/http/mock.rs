//! Stand-in HTTP clients
//!
//! For tests and offline runs. Both are registered by the default registry so
//! they can be selected through `HTTP_CLIENT_MODULE` like the live client.

use super::{HttpClient, HttpResponse};
use crate::error::Result;

/// Ticker body served by [`StubHttpClient::default`]
pub const STUB_TICKER_BODY: &str = r#"{"EUR": {"last": 15000.0}}"#;

/// Returns the same canned response for every URL
#[derive(Clone, Debug)]
pub struct StubHttpClient {
    response: HttpResponse,
}

impl Default for StubHttpClient {
    fn default() -> Self {
        Self::new(200, STUB_TICKER_BODY)
    }
}

impl StubHttpClient {
    pub fn new(status_code: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            response: HttpResponse::new(status_code, Some(body.into())),
        }
    }

    /// Serve a fixed response, including one without a body
    pub const fn with_response(response: HttpResponse) -> Self {
        Self { response }
    }
}

impl HttpClient for StubHttpClient {
    fn get(&self, _url: &str) -> Result<HttpResponse> {
        Ok(self.response.clone())
    }
}

/// Echoes the requested URL back as `{"url": "<url>", "status": "ok"}`
#[derive(Clone, Copy, Debug, Default)]
pub struct EchoHttpClient;

impl HttpClient for EchoHttpClient {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        let body = serde_json::json!({ "url": url, "status": "ok" });
        Ok(HttpResponse::new(200, Some(serde_json::to_vec(&body)?)))
    }
}
