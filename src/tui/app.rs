//! Application state for the TUI.

use crate::panel::TickerPanel;

/// Spinner frames shown while a fetch is in flight.
const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Central application state container.
pub struct App {
    /// Ticker display state.
    pub panel: TickerPanel,
    /// Pair requested from the endpoint.
    pub currency_pair: String,
    /// Endpoint shown in the status bar.
    pub endpoint: String,
    /// Index of the highlighted card.
    pub selected: usize,
    /// Tick counter driving the spinner.
    pub ticks: usize,
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    pub fn new(currency_pair: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            panel: TickerPanel::new(),
            currency_pair: currency_pair.into(),
            endpoint: endpoint.into(),
            selected: 0,
            ticks: 0,
            should_quit: false,
        }
    }

    /// Highlights the next card, stopping at the last one.
    pub fn select_next(&mut self) {
        let count = self.panel.records().len();
        if self.selected + 1 < count {
            self.selected += 1;
        }
    }

    /// Highlights the previous card.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Selected index clamped to the records currently shown.
    pub fn selected_index(&self) -> usize {
        self.selected
            .min(self.panel.records().len().saturating_sub(1))
    }

    pub fn on_tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.ticks % SPINNER_FRAMES.len()]
    }
}
