//! TickerPanel driven by a real TickerClient over HTTP.

mod common;

use ticker_panels::config::TickerConfig;
use ticker_panels::{FetchError, PanelState, TickerClient, TickerPanel};

use common::{MockResponse, MockServer, XSN_BTC_ARRAY};

#[tokio::test]
async fn activation_loads_records() {
    let server = MockServer::start(vec![MockResponse::ok(XSN_BTC_ARRAY)]).await;
    let client = TickerClient::new(&server.config("XSN/BTC")).unwrap();
    let mut panel = TickerPanel::new();

    panel.activate(&client).await;

    assert_eq!(panel.records().len(), 1);
    assert_eq!(panel.records()[0].symbol, "XSN/BTC");
    assert!(panel.error_message().is_none());
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn server_failure_becomes_error_string() {
    let server = MockServer::start(vec![MockResponse::status(
        500,
        "Internal Server Error",
        "upstream exploded",
    )])
    .await;
    let client = TickerClient::new(&server.config("XSN/BTC")).unwrap();
    let mut panel = TickerPanel::new();

    panel.activate(&client).await;

    let message = panel.error_message().unwrap();
    assert!(message.contains("500"));
    assert!(message.contains("upstream exploded"));
    assert!(panel.records().is_empty());
}

#[tokio::test]
async fn transport_failure_becomes_error_without_status() {
    let config = TickerConfig::new(&common::refused_url().await, "XSN/BTC").unwrap();
    let client = TickerClient::new(&config).unwrap();
    let mut panel = TickerPanel::new();

    panel.activate(&client).await;

    let error = panel.error().unwrap();
    assert!(matches!(error, FetchError::Transport(_)));
    assert_eq!(error.status(), None);
    assert!(panel.error_message().unwrap().starts_with("transport failure"));
}

#[tokio::test]
async fn second_activation_replaces_records() {
    let second = XSN_BTC_ARRAY.replace("XSN/BTC", "XSN/ETH");
    let server = MockServer::start(vec![
        MockResponse::ok(XSN_BTC_ARRAY),
        MockResponse::ok(second),
    ])
    .await;
    let client = TickerClient::new(&server.config("XSN/BTC")).unwrap();
    let mut panel = TickerPanel::new();

    panel.activate(&client).await;
    panel.activate(&client).await;

    assert_eq!(panel.records().len(), 1);
    assert_eq!(panel.records()[0].symbol, "XSN/ETH");
}

#[tokio::test]
async fn failure_after_success_keeps_stale_records() {
    let server = MockServer::start(vec![
        MockResponse::ok(XSN_BTC_ARRAY),
        MockResponse::status(503, "Service Unavailable", ""),
    ])
    .await;
    let client = TickerClient::new(&server.config("XSN/BTC")).unwrap();
    let mut panel = TickerPanel::new();

    panel.activate(&client).await;
    panel.activate(&client).await;

    assert!(matches!(panel.state(), PanelState::Failed { .. }));
    assert!(panel.is_stale());
    assert_eq!(panel.records()[0].symbol, "XSN/BTC");
    assert_eq!(panel.error().and_then(FetchError::status), Some(503));
}
