//! Display state for the ticker panels.
//!
//! [`TickerPanel`] owns what the view shows: the last fetched records, or
//! the error of the last fetch. It never fetches on its own; each
//! [`activate`](TickerPanel::activate) asks a [`TickerSource`] exactly once.
//!
//! When a fetch fails after an earlier success the previous records are
//! kept as stale data next to the error instead of being cleared.

use std::future::Future;
use std::time::Instant;

use tracing::{info, warn};

use crate::client::TickerClient;
use crate::error::FetchError;
use crate::models::ticker::TickerRecord;

/// Anything that can produce a ticker snapshot.
pub trait TickerSource {
    fn fetch(
        &self,
    ) -> impl Future<Output = Result<Vec<TickerRecord>, FetchError>> + Send;
}

impl TickerSource for TickerClient {
    fn fetch(
        &self,
    ) -> impl Future<Output = Result<Vec<TickerRecord>, FetchError>> + Send {
        TickerClient::fetch(self)
    }
}

/// Lifecycle of the panel's data.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PanelState {
    /// Not activated yet.
    #[default]
    Idle,
    /// A fetch is in flight. `previous` is what was shown before it;
    /// `stale` is set when those records already outlived a failed fetch.
    Loading {
        previous: Vec<TickerRecord>,
        stale: bool,
    },
    /// The last fetch succeeded.
    Loaded(Vec<TickerRecord>),
    /// The last fetch failed. `stale` holds the records of an earlier
    /// success, if any.
    Failed {
        error: FetchError,
        stale: Vec<TickerRecord>,
    },
}

/// Display state of the ticker panels.
#[derive(Debug, Default)]
pub struct TickerPanel {
    state: PanelState,
    last_updated: Option<Instant>,
}

impl TickerPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one activation: enter loading, fetch once, store the outcome.
    pub async fn activate<S: TickerSource>(&mut self, source: &S) {
        self.begin_loading();
        let result = source.fetch().await;
        self.complete(result);
    }

    /// Moves to [`PanelState::Loading`], carrying the visible records along.
    pub fn begin_loading(&mut self) {
        let stale = self.is_stale();
        let previous = self.take_records();
        self.state = PanelState::Loading { previous, stale };
    }

    /// Stores the outcome of a fetch.
    ///
    /// Success replaces the records wholesale. Failure keeps whatever was
    /// visible as stale data.
    pub fn complete(&mut self, result: Result<Vec<TickerRecord>, FetchError>) {
        self.state = match result {
            Ok(records) => {
                info!(count = records.len(), "Ticker panel loaded");
                self.last_updated = Some(Instant::now());
                PanelState::Loaded(records)
            }
            Err(error) => {
                let stale = self.take_records();
                warn!(%error, stale = stale.len(), "Ticker panel fetch failed");
                PanelState::Failed { error, stale }
            }
        };
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Records to display, including stale ones after a failure.
    pub fn records(&self) -> &[TickerRecord] {
        match &self.state {
            PanelState::Idle => &[],
            PanelState::Loading { previous, .. } => previous,
            PanelState::Loaded(records) => records,
            PanelState::Failed { stale, .. } => stale,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.state {
            PanelState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// The error as the string the view renders.
    pub fn error_message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, PanelState::Loading { .. })
    }

    /// True when the displayed records predate a failed fetch, including
    /// while a later fetch is still in flight.
    pub fn is_stale(&self) -> bool {
        match &self.state {
            PanelState::Failed { stale, .. } => !stale.is_empty(),
            PanelState::Loading { previous, stale } => *stale && !previous.is_empty(),
            _ => false,
        }
    }

    /// When the displayed records were fetched.
    pub fn last_updated(&self) -> Option<Instant> {
        self.last_updated
    }

    fn take_records(&mut self) -> Vec<TickerRecord> {
        match std::mem::take(&mut self.state) {
            PanelState::Idle => Vec::new(),
            PanelState::Loading { previous, .. } => previous,
            PanelState::Loaded(records) => records,
            PanelState::Failed { stale, .. } => stale,
        }
    }
}
