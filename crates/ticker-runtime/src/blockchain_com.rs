//! blockchain.com Ticker
//!
//! `GET https://blockchain.info/ticker` returns one entry per currency:
//!
//! ```text
//! {"EUR": {"15m": 61234.5, "last": 61234.5, "buy": 61234.5, "sell": 61234.5, "symbol": "€"}, ...}
//! ```

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use ticker_core::{Environment, HTTP_CLIENT_ENV, HttpClient, PriceClient, Result, TickerError};

use crate::http_clients;

/// Where the HTTP client comes from on each fetch
#[derive(Clone)]
enum HttpSource {
    /// Resolve `HTTP_CLIENT_MODULE` from the environment every time
    Configured(Arc<dyn Environment>),
    /// Use this client
    Injected(Arc<dyn HttpClient>),
}

/// Price client for the blockchain.info ticker, quoting EUR
#[derive(Clone)]
pub struct BlockchainComClient {
    http: HttpSource,
}

impl std::fmt::Debug for BlockchainComClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let http = match self.http {
            HttpSource::Configured(_) => "configured",
            HttpSource::Injected(_) => "injected",
        };
        f.debug_struct("BlockchainComClient").field("http", &http).finish()
    }
}

#[derive(Debug, Deserialize)]
struct TickerQuote {
    last: Option<serde_json::Value>,
}

impl BlockchainComClient {
    pub const API_URL: &'static str = "https://blockchain.info/ticker";
    pub const CURRENCY: &'static str = "EUR";

    /// Resolve the HTTP client from `env` on every fetch
    pub fn new(env: Arc<dyn Environment>) -> Self {
        Self {
            http: HttpSource::Configured(env),
        }
    }

    /// Always fetch through `client`
    pub fn with_http_client(client: Arc<dyn HttpClient>) -> Self {
        Self {
            http: HttpSource::Injected(client),
        }
    }

    fn http_client(&self) -> Result<Arc<dyn HttpClient>> {
        match &self.http {
            HttpSource::Configured(env) => {
                let client = http_clients().build(env.as_ref(), HTTP_CLIENT_ENV)?;
                Ok(Arc::from(client))
            }
            HttpSource::Injected(client) => Ok(client.clone()),
        }
    }
}

impl PriceClient for BlockchainComClient {
    fn get_current_price_in_currency(&self) -> Result<f64> {
        let http = self.http_client()?;

        debug!(url = Self::API_URL, "requesting ticker");
        let response = http.get(Self::API_URL)?;
        debug!(status = response.status_code(), "ticker responded");

        let ticker: serde_json::Map<String, serde_json::Value> = response.parse_as()?;
        let price = extract_last(&ticker, Self::CURRENCY)?;

        info!(currency = Self::CURRENCY, price, "BTC price fetched");
        Ok(price)
    }
}

/// Read `<currency>.last` as a float
fn extract_last(ticker: &serde_json::Map<String, serde_json::Value>, currency: &str) -> Result<f64> {
    let path = format!("{currency}.last");

    let entry = ticker
        .get(currency)
        .cloned()
        .ok_or_else(|| TickerError::MissingField(currency.to_string()))?;

    let quote: TickerQuote = serde_json::from_value(entry)?;
    let last = quote.last.ok_or_else(|| TickerError::MissingField(path.clone()))?;

    to_float(&last).ok_or_else(|| TickerError::NotNumeric {
        path,
        value: last.to_string(),
    })
}

/// Numbers, and strings holding a number, both convert
fn to_float(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use ticker_core::http::{EchoHttpClient, StubHttpClient};
    use ticker_core::{ErrorKind, HttpResponse};

    use super::*;

    fn client_with_body(body: &str) -> BlockchainComClient {
        BlockchainComClient::with_http_client(Arc::new(StubHttpClient::new(200, body)))
    }

    #[test]
    fn test_reads_eur_last() {
        let client = client_with_body(r#"{"EUR": {"last": 15000.0}}"#);
        assert_eq!(client.get_current_price_in_currency().unwrap(), 15000.0);
    }

    #[test]
    fn test_ignores_other_currencies_and_fields() {
        let client = client_with_body(
            r#"{"USD": {"last": 1}, "EUR": {"15m": 1.0, "last": 61234.56, "symbol": "€"}, "AAA": 3}"#,
        );
        assert_eq!(client.get_current_price_in_currency().unwrap(), 61234.56);
    }

    #[test]
    fn test_integer_and_string_prices() {
        assert_eq!(
            client_with_body(r#"{"EUR": {"last": 15000}}"#).get_current_price_in_currency().unwrap(),
            15000.0
        );
        assert_eq!(
            client_with_body(r#"{"EUR": {"last": "15000.5"}}"#)
                .get_current_price_in_currency()
                .unwrap(),
            15000.5
        );
    }

    #[test]
    fn test_idempotent_against_stub() {
        let client = client_with_body(r#"{"EUR": {"last": 15000.0}}"#);
        let first = client.get_current_price_in_currency().unwrap();
        let second = client.get_current_price_in_currency().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_currency() {
        let err = client_with_body(r#"{"USD": {"last": 1.0}}"#)
            .get_current_price_in_currency()
            .unwrap_err();
        assert!(matches!(err, TickerError::MissingField(ref f) if f == "EUR"));
    }

    #[test]
    fn test_missing_last() {
        let err = client_with_body(r#"{"EUR": {"buy": 1.0}}"#)
            .get_current_price_in_currency()
            .unwrap_err();
        assert!(matches!(err, TickerError::MissingField(ref f) if f == "EUR.last"));
    }

    #[test]
    fn test_non_numeric_last() {
        for (body, shown) in [
            (r#"{"EUR": {"last": "n/a"}}"#, r#""n/a""#),
            (r#"{"EUR": {"last": true}}"#, "true"),
            (r#"{"EUR": {"last": {"v": 1}}}"#, r#"{"v":1}"#),
        ] {
            let err = client_with_body(body).get_current_price_in_currency().unwrap_err();
            assert!(
                matches!(err, TickerError::NotNumeric { ref path, ref value } if path == "EUR.last" && value == shown),
                "{body}: {err:?}"
            );
        }
    }

    #[test]
    fn test_null_last_is_missing() {
        let err = client_with_body(r#"{"EUR": {"last": null}}"#)
            .get_current_price_in_currency()
            .unwrap_err();
        assert!(matches!(err, TickerError::MissingField(ref f) if f == "EUR.last"), "{err:?}");
    }

    #[test]
    fn test_invalid_json_surfaces_as_parse_error() {
        let err = client_with_body("").get_current_price_in_currency().unwrap_err();
        assert!(matches!(err, TickerError::InvalidJson(_)));

        let client = BlockchainComClient::with_http_client(Arc::new(
            StubHttpClient::with_response(HttpResponse::new(502, None)),
        ));
        let err = client.get_current_price_in_currency().unwrap_err();
        assert!(matches!(err, TickerError::EmptyBody));
    }

    #[derive(Default)]
    struct RecordingHttpClient {
        urls: Mutex<Vec<String>>,
    }

    impl HttpClient for RecordingHttpClient {
        fn get(&self, url: &str) -> Result<HttpResponse> {
            self.urls.lock().unwrap().push(url.to_string());
            EchoHttpClient.get(url)
        }
    }

    #[test]
    fn test_requests_ticker_url() {
        let recorder = Arc::new(RecordingHttpClient::default());
        let client = BlockchainComClient::with_http_client(recorder.clone());

        let err = client.get_current_price_in_currency().unwrap_err();
        assert!(matches!(err, TickerError::MissingField(_)));
        assert_eq!(*recorder.urls.lock().unwrap(), vec![BlockchainComClient::API_URL]);
    }

    #[test]
    fn test_resolves_http_client_per_call() {
        let env: Arc<dyn Environment> = Arc::new(HashMap::from([(
            HTTP_CLIENT_ENV.to_string(),
            "http_client.mock.Missing".to_string(),
        )]));
        let err = BlockchainComClient::new(env).get_current_price_in_currency().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Resolution);
    }
}
