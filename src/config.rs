//! Application configuration loaded from environment variables.
//!
//! - `TICKER_URL` — ticker endpoint, defaults to the Livecoin ticker API
//! - `TICKER_CURRENCY_PAIR` — pair sent as the `currencyPair` query value
//! - `TICKER_CA_FILE` — optional PEM bundle trusted in addition to the
//!   webpki roots
//!
//! The library never reads the environment on its own: the binary calls
//! [`fetch_config`] and hands the result to [`TickerClient`](crate::TickerClient).

use std::path::PathBuf;

use reqwest::Url;

use crate::TickerError;

/// Default public ticker endpoint.
pub const DEFAULT_TICKER_URL: &str = "https://api.livecoin.net/exchange/ticker";

/// Default currency pair.
pub const DEFAULT_CURRENCY_PAIR: &str = "XSN/BTC";

/// Top-level application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub ticker: TickerConfig,
}

/// Endpoint settings for [`TickerClient`](crate::TickerClient).
#[derive(Clone, Debug)]
pub struct TickerConfig {
    pub endpoint: Url,
    pub currency_pair: String,
    pub ca_file: Option<PathBuf>,
}

impl TickerConfig {
    /// Builds a config for `endpoint` and `currency_pair` with no extra CA.
    ///
    /// # Errors
    ///
    /// Returns [`TickerError::Config`] if the endpoint is not an http(s)
    /// URL or the currency pair is blank.
    pub fn new(endpoint: &str, currency_pair: impl Into<String>) -> crate::Result<Self> {
        let currency_pair = currency_pair.into();
        if currency_pair.trim().is_empty() {
            return Err(TickerError::Config("currency pair must not be empty".to_string()));
        }

        Ok(Self {
            endpoint: parse_endpoint(endpoint)?,
            currency_pair,
            ca_file: None,
        })
    }

    /// Adds a PEM bundle to trust in addition to the webpki roots.
    pub fn with_ca_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.ca_file = Some(path.into());
        self
    }
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`TickerError::Config`] if `TICKER_URL` is not a valid http(s)
/// URL.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let endpoint = non_empty_var("TICKER_URL").unwrap_or_else(|| DEFAULT_TICKER_URL.to_string());
    let currency_pair =
        non_empty_var("TICKER_CURRENCY_PAIR").unwrap_or_else(|| DEFAULT_CURRENCY_PAIR.to_string());

    let mut ticker = TickerConfig::new(&endpoint, currency_pair)?;
    if let Some(path) = non_empty_var("TICKER_CA_FILE") {
        ticker = ticker.with_ca_file(path);
    }

    Ok(AppConfig { ticker })
}

fn parse_endpoint(raw: &str) -> crate::Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| TickerError::Config(format!("invalid ticker URL {raw:?}: {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(TickerError::Config(format!(
            "unsupported ticker URL scheme {other:?}, expected http or https"
        ))),
    }
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
