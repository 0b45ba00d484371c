//! Ticker panels for a single exchange currency pair.
//!
//! Fetches a ticker snapshot (price, volume, bid/ask spread) from a REST
//! endpoint once per activation and renders one terminal panel per record.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod panel;
pub mod tls;
pub mod tui;

pub use client::TickerClient;
pub use error::{FetchError, Result, TickerError};
pub use models::ticker::TickerRecord;
pub use panel::{PanelState, TickerPanel, TickerSource};
