//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;
use tracing::debug;

use crate::error::FetchError;
use crate::models::ticker::TickerRecord;
use crate::panel::TickerSource;

use super::app::App;

/// Events that can occur in the application.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI updates.
    Tick,
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),
    /// Outcome of the activation fetch.
    TickerFetched(Result<Vec<TickerRecord>, FetchError>),
    /// Request to quit the application.
    Quit,
}

/// Spawns a task that polls for terminal events and sends them to a channel.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            // Poll for events with a 50ms timeout
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(CrosstermEvent::Key(key))) => {
                    if tx.send(Message::Input(Event::Key(key))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(w, h))) => {
                    if tx.send(Message::Input(Event::Resize(w, h))).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

/// Spawns a task that sends periodic tick events.
pub fn spawn_tick_timer(tx: mpsc::UnboundedSender<Message>, interval_ms: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
        loop {
            interval.tick().await;
            if tx.send(Message::Input(Event::Tick)).is_err() {
                break;
            }
        }
    });
}

/// Puts the panel into loading and fetches once in the background.
///
/// The result comes back as [`Message::TickerFetched`]. If the UI has
/// already shut down the result is dropped.
pub fn activate<S>(app: &mut App, source: S, tx: mpsc::UnboundedSender<Message>)
where
    S: TickerSource + Send + Sync + 'static,
{
    app.panel.begin_loading();
    tokio::spawn(async move {
        let result = source.fetch().await;
        if tx.send(Message::TickerFetched(result)).is_err() {
            debug!("UI closed before ticker fetch completed");
        }
    });
}

/// Updates application state based on a message.
///
/// Input may produce a follow-up message (e.g. [`Message::Quit`]), which is
/// applied before returning.
pub fn update(app: &mut App, message: Message) {
    let follow_up = match message {
        Message::Input(event) => handle_input(app, event),
        Message::TickerFetched(result) => {
            app.panel.complete(result);
            None
        }
        Message::Quit => {
            app.should_quit = true;
            None
        }
    };

    if let Some(message) = follow_up {
        update(app, message);
    }
}

fn handle_input(app: &mut App, event: Event) -> Option<Message> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Resize(_, _) => None,
        Event::Tick => {
            app.on_tick();
            None
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Message::Quit),
        KeyCode::Char('l') | KeyCode::Char('j') | KeyCode::Right | KeyCode::Down => {
            app.select_next();
            None
        }
        KeyCode::Char('h') | KeyCode::Char('k') | KeyCode::Left | KeyCode::Up => {
            app.select_previous();
            None
        }
        _ => None,
    }
}
