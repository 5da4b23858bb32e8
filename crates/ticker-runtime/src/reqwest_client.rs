//! reqwest HTTP Client
//!
//! Implementation of `HttpClient` over `reqwest::blocking`. No extra headers,
//! no retry, no custom TLS, and no timeout: a silent server blocks the caller
//! until the connection is closed.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use ticker_core::{HttpClient, HttpResponse, Result, TickerError};

/// Live HTTP transport
#[derive(Clone, Copy, Debug, Default)]
pub struct ReqwestHttpClient;

impl ReqwestHttpClient {
    pub const fn new() -> Self {
        Self
    }

    // reqwest's blocking client defaults to a 30s total timeout
    fn client(url: &str) -> Result<Client> {
        Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| TickerError::transport(url, e))
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        debug!(url, "GET");

        let response = Self::client(url)?
            .get(url)
            .send()
            .map_err(|e| TickerError::transport(url, e))?;

        let status = response.status().as_u16();
        let body = response.bytes().map_err(|e| TickerError::transport(url, e))?;

        debug!(url, status, bytes = body.len(), "response received");
        Ok(HttpResponse::new(status, Some(body.to_vec())))
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    use ticker_core::ErrorKind;

    use super::*;

    #[test]
    fn test_connection_refused_is_transport_error() {
        let client = ReqwestHttpClient::new();
        let err = client.get("http://127.0.0.1:1/ticker").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(err.to_string().contains("127.0.0.1:1"));
    }

    #[test]
    fn test_malformed_url_is_transport_error() {
        let err = ReqwestHttpClient::new().get("example.com").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_silent_server_blocks_past_default_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/ticker", listener.local_addr().unwrap());

        // Accept and hold connections without ever replying
        thread::spawn(move || {
            let mut held = Vec::new();
            for stream in listener.incoming().flatten() {
                held.push(stream);
            }
        });

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let result = ReqwestHttpClient::new().get(&url).map(|r| r.status_code());
            let _ = tx.send(result.map_err(|e| e.to_string()));
        });

        let outcome = rx.recv_timeout(Duration::from_secs(40));
        assert!(
            matches!(outcome, Err(mpsc::RecvTimeoutError::Timeout)),
            "GET returned early: {outcome:?}"
        );
    }
}
