//! Terminal user interface for the ticker panels.
//!
//! One bordered card per ticker record, a status bar with the fetch state,
//! and a key help line. State changes flow through [`Message`]s into
//! [`update`](event::update) on a single loop.

pub mod app;
pub mod components;
pub mod event;
pub mod terminal;
pub mod ui;

use tokio::sync::mpsc;

pub use app::App;
pub use event::{Event, Message};
pub use terminal::{Tui, install_panic_hook, restore_terminal, setup_terminal};
pub use ui::render;

use crate::panel::TickerSource;
use crate::{Result, TickerError};

/// Interval between UI ticks (spinner frames).
const TICK_INTERVAL_MS: u64 = 250;

/// Runs the TUI until the user quits.
///
/// The panel is activated once on start; there is no refresh afterwards.
///
/// # Errors
///
/// Returns [`TickerError::Io`] if the terminal cannot be set up, drawn to,
/// or restored.
pub async fn run<S>(source: S, currency_pair: String, endpoint: String) -> Result<()>
where
    S: TickerSource + Send + Sync + 'static,
{
    let mut terminal = setup_terminal()?;
    install_panic_hook();

    let result = run_loop(&mut terminal, source, App::new(currency_pair, endpoint)).await;

    restore_terminal(&mut terminal)?;
    result
}

async fn run_loop<S>(terminal: &mut Tui, source: S, mut app: App) -> Result<()>
where
    S: TickerSource + Send + Sync + 'static,
{
    let (tx, mut rx) = mpsc::unbounded_channel();
    event::spawn_event_reader(tx.clone());
    event::spawn_tick_timer(tx.clone(), TICK_INTERVAL_MS);
    event::activate(&mut app, source, tx);

    while !app.should_quit {
        terminal
            .draw(|frame| render(frame, &app))
            .map_err(|e| TickerError::Io(format!("failed to draw frame: {e}")))?;

        match rx.recv().await {
            Some(message) => event::update(&mut app, message),
            None => break,
        }
    }

    Ok(())
}
