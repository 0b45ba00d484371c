//! HTTP client for the ticker REST endpoint.
//!
//! One [`TickerClient::fetch`] issues exactly one GET. There is no retry,
//! caching, or backoff: a failure is reported once as a [`FetchError`] and
//! it is up to the caller whether to ask again.

use reqwest::{StatusCode, Url};
use tracing::{debug, info, warn};

use crate::config::TickerConfig;
use crate::error::FetchError;
use crate::models::ticker::{ApiErrorResponse, TickerPayload, TickerRecord};
use crate::{Result, TickerError};

/// Query parameter naming the requested pair.
const CURRENCY_PAIR_PARAM: &str = "currencyPair";

/// Longest slice of a raw error body carried into a [`FetchError::Server`].
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Fetches ticker snapshots from a configured endpoint.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct TickerClient {
    http: reqwest::Client,
    endpoint: Url,
    currency_pair: String,
}

impl TickerClient {
    /// Builds a client with a rustls config from
    /// [`build_tls_config`](crate::tls::build_tls_config).
    ///
    /// # Errors
    ///
    /// Returns [`TickerError::Tls`] if the TLS config or the HTTP client
    /// cannot be built.
    pub fn new(config: &TickerConfig) -> Result<Self> {
        let tls_config = crate::tls::build_tls_config(config.ca_file.as_deref())?;
        let http = reqwest::Client::builder()
            .use_preconfigured_tls(tls_config)
            .build()
            .map_err(|e| TickerError::Tls(format!("failed to build HTTP client: {e}")))?;

        Ok(Self::with_http_client(http, config))
    }

    /// Builds a client around an existing [`reqwest::Client`].
    pub fn with_http_client(http: reqwest::Client, config: &TickerConfig) -> Self {
        Self {
            http,
            endpoint: config.endpoint.clone(),
            currency_pair: config.currency_pair.clone(),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn currency_pair(&self) -> &str {
        &self.currency_pair
    }

    /// Fetches the current ticker for the configured pair.
    ///
    /// The body may be a single object or an array; either way the records
    /// come back as a sequence in response order.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Transport`] if no response was received
    /// - [`FetchError::Server`] for a non-success status
    /// - [`FetchError::Decode`] if a success body is not a valid payload or
    ///   holds a record with a negative numeric field
    pub async fn fetch(&self) -> std::result::Result<Vec<TickerRecord>, FetchError> {
        debug!(url = %self.endpoint, pair = %self.currency_pair, "Fetching ticker");

        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[(CURRENCY_PAIR_PARAM, self.currency_pair.as_str())])
            .send()
            .await
            .map_err(|e| {
                let err = FetchError::transport(e);
                warn!(error = %err, "Ticker request failed");
                err
            })?;

        let status = response.status();

        if !status.is_success() {
            // The status alone classifies the failure; a truncated body only
            // costs the detail text.
            let body = response.text().await.unwrap_or_else(|e| {
                debug!(error = %e, "Error body could not be read");
                String::new()
            });
            let err = FetchError::Server {
                status: status.as_u16(),
                message: server_message(status, &body),
            };
            warn!(error = %err, "Ticker endpoint returned an error status");
            return Err(err);
        }

        let body = response.text().await.map_err(FetchError::transport)?;
        let records = decode_records(&body)?;
        info!(count = records.len(), pair = %self.currency_pair, "Fetched ticker");
        Ok(records)
    }
}

/// Parses and validates a success body.
fn decode_records(body: &str) -> std::result::Result<Vec<TickerRecord>, FetchError> {
    let payload: TickerPayload = match serde_json::from_str(body) {
        Ok(payload) => payload,
        Err(e) => {
            let err = match api_error_message(body) {
                Some(message) => FetchError::Decode(format!("api rejected request: {message}")),
                None => FetchError::Decode(e.to_string()),
            };
            warn!(error = %err, "Ticker body could not be decoded");
            return Err(err);
        }
    };

    let records = payload.into_records();
    for record in &records {
        record.validate().map_err(FetchError::Decode)?;
    }
    Ok(records)
}

/// Picks the most useful human-readable text for an error response.
fn server_message(status: StatusCode, body: &str) -> String {
    if let Some(message) = api_error_message(body) {
        return message;
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return status.canonical_reason().unwrap_or("unknown status").to_string();
    }

    trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect()
}

/// Extracts `errorMessage` (or `message`) from a JSON error envelope.
fn api_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorResponse>(body)
        .ok()
        .filter(|envelope| !envelope.success)
        .and_then(|envelope| envelope.error_message)
        .filter(|message| !message.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_prefers_api_error_text() {
        let body = r#"{"success":false,"errorCode":1,"errorMessage":"Unknown currency pair"}"#;
        assert_eq!(
            server_message(StatusCode::BAD_REQUEST, body),
            "Unknown currency pair"
        );
    }

    #[test]
    fn server_message_falls_back_to_reason_for_empty_body() {
        assert_eq!(
            server_message(StatusCode::INTERNAL_SERVER_ERROR, "  "),
            "Internal Server Error"
        );
    }

    #[test]
    fn server_message_truncates_raw_body() {
        let body = "x".repeat(500);
        assert_eq!(
            server_message(StatusCode::BAD_GATEWAY, &body).len(),
            MAX_ERROR_BODY_CHARS
        );
    }

    #[test]
    fn decode_reports_api_envelope() {
        let body = r#"{"success":false,"errorMessage":"Unknown currency pair"}"#;
        let err = decode_records(body).unwrap_err();
        assert_eq!(
            err,
            FetchError::Decode("api rejected request: Unknown currency pair".into())
        );
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(
            decode_records("<html>"),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn decode_accepts_empty_array() {
        assert!(decode_records("[]").unwrap().is_empty());
    }
}
