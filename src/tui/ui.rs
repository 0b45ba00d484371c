//! Main UI rendering coordinator.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app::App;
use super::components::ticker_card::{self, CARD_HEIGHT, CARD_WIDTH};
use super::components::status_bar;
use crate::panel::PanelState;

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Min(3),    // Ticker cards
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    status_bar::render(frame, main_layout[0], app);

    if app.panel.records().is_empty() {
        render_placeholder(frame, main_layout[1], app);
    } else {
        render_cards(frame, main_layout[1], app);
    }

    render_keybindings(frame, main_layout[2]);
}

/// Lays the cards out in a grid, scrolled so the selected card is visible.
fn render_cards(frame: &mut Frame, area: Rect, app: &App) {
    let records = app.panel.records();
    let stale = app.panel.is_stale();
    let selected = app.selected_index();

    let columns = usize::from((area.width / CARD_WIDTH).max(1));
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let first_row = (selected / columns).saturating_sub(visible_rows - 1);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(area);

    for (row_offset, row_area) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);

        for (column, cell) in cells.iter().enumerate() {
            let index = (first_row + row_offset) * columns + column;
            if let Some(record) = records.get(index) {
                ticker_card::render(frame, *cell, record, index == selected, stale);
            }
        }
    }
}

/// Shown while there are no records: before the first load, during it, or
/// after a failure with nothing to fall back to.
fn render_placeholder(frame: &mut Frame, area: Rect, app: &App) {
    let (text, color) = match app.panel.state() {
        PanelState::Idle => ("Waiting to load".to_string(), Color::DarkGray),
        PanelState::Loading { .. } => (
            format!("Loading {} {}", app.currency_pair, app.spinner()),
            Color::Yellow,
        ),
        PanelState::Loaded(_) => ("No ticker data".to_string(), Color::DarkGray),
        // The status bar carries the error text.
        PanelState::Failed { .. } => ("No data".to_string(), Color::Red),
    };

    let para = Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color))))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Ticker "));
    frame.render_widget(para, area);
}

fn render_keybindings(frame: &mut Frame, area: Rect) {
    let help = Line::from(vec![
        Span::styled(" q", Style::default().fg(Color::Cyan)),
        Span::raw(" quit  "),
        Span::styled("←/→", Style::default().fg(Color::Cyan)),
        Span::raw(" select"),
    ]);
    frame.render_widget(Paragraph::new(help), area);
}
