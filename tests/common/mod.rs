//! Shared test utilities: a minimal HTTP/1.1 server answering with canned
//! responses.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use ticker_panels::config::TickerConfig;

/// Path the mock serves tickers under.
pub const TICKER_PATH: &str = "/exchange/ticker";

/// One-element ticker array for XSN/BTC.
pub const XSN_BTC_ARRAY: &str = r#"[{"cur":"XSN","symbol":"XSN/BTC","last":0.0001,"high":0.00012,"low":0.000095,"volume":15234.5,"vwap":0.000105,"maxBid":0.000101,"minAsk":0.000099,"bestBid":0.0000995,"bestAsk":0.0001005,"usd":0.65}]"#;

/// Canned HTTP response.
#[derive(Clone)]
pub struct MockResponse {
    pub status: u16,
    pub reason: &'static str,
    pub body: String,
    /// Overrides `Content-Length`; a value above the body length makes the
    /// connection close mid-body.
    pub content_length: Option<usize>,
}

impl MockResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            reason: "OK",
            body: body.into(),
            content_length: None,
        }
    }

    pub fn status(status: u16, reason: &'static str, body: impl Into<String>) -> Self {
        Self {
            status,
            reason,
            body: body.into(),
            content_length: None,
        }
    }

    /// Announces `content_length` bytes but sends only `body`.
    pub fn truncated(
        status: u16,
        reason: &'static str,
        body: impl Into<String>,
        content_length: usize,
    ) -> Self {
        Self {
            content_length: Some(content_length),
            ..Self::status(status, reason, body)
        }
    }
}

/// Serves `responses` in order, one per connection; the last one repeats.
pub struct MockServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockServer {
    pub async fn start(responses: Vec<MockResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock server");
        let addr = listener.local_addr().expect("mock server has no address");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let seen = Arc::clone(&requests);
        tokio::spawn(async move {
            let mut served = 0usize;
            while let Ok((mut stream, _)) = listener.accept().await {
                let response = responses[served.min(responses.len() - 1)].clone();
                served += 1;

                let request_line = read_request_line(&mut stream).await;
                seen.lock().unwrap().push(request_line);

                let raw = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    response.status,
                    response.reason,
                    response.content_length.unwrap_or(response.body.len()),
                    response.body
                );
                let _ = stream.write_all(raw.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        Self { addr, requests }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn config(&self, currency_pair: &str) -> TickerConfig {
        TickerConfig::new(&self.url(TICKER_PATH), currency_pair).expect("valid mock config")
    }

    /// Request lines received so far, e.g. `GET /path?x=1 HTTP/1.1`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Reads the request head and returns its first line.
async fn read_request_line(stream: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    String::from_utf8_lossy(&buf)
        .lines()
        .next()
        .unwrap_or_default()
        .to_string()
}

/// A URL on which nothing is listening.
pub async fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind listener");
    let addr = listener.local_addr().expect("listener has no address");
    drop(listener);
    format!("http://{addr}{TICKER_PATH}")
}
