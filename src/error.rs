//! Crate-level error types.
//!
//! [`FetchError`] describes why a single ticker fetch failed and is what the
//! panel stores and renders. [`TickerError`] wraps it together with the
//! setup failures (configuration, TLS, terminal I/O) so callers can use the
//! `?` operator end to end.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TickerError>;

/// Top-level error type returned by setup and run APIs.
#[derive(Debug, thiserror::Error)]
pub enum TickerError {
    /// Configuration values were missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The TLS root store or HTTP client could not be built.
    #[error("tls error: {0}")]
    Tls(String),

    /// Terminal setup, teardown, or drawing failed.
    #[error("io error: {0}")]
    Io(String),

    /// A ticker fetch failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Failure of one ticker fetch.
///
/// Consumers branch on the variant instead of parsing the message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// No HTTP response was received (connect refused, DNS, reset).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered with a non-success status code.
    #[error("server failure: {status} {message}")]
    Server { status: u16, message: String },

    /// A success response whose body is not a valid ticker payload.
    #[error("malformed ticker payload: {0}")]
    Decode(String),
}

impl FetchError {
    /// Returns the HTTP status code for [`FetchError::Server`].
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Builds a [`FetchError::Transport`] from a reqwest error, keeping the
    /// underlying cause chain in the message.
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        FetchError::Transport(message)
    }
}
