//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::panel::PanelState;
use crate::tui::app::App;

/// Renders the status bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (label, color) = match app.panel.state() {
        PanelState::Idle => ("Idle".to_string(), Color::Gray),
        PanelState::Loading { .. } => (format!("Loading {}", app.spinner()), Color::Yellow),
        PanelState::Loaded(_) => ("Loaded".to_string(), Color::Green),
        PanelState::Failed { .. } => ("Error".to_string(), Color::Red),
    };

    let detail = match (app.panel.error_message(), app.panel.last_updated()) {
        (Some(message), _) => Span::styled(format!(" {message} "), Style::default().fg(Color::Red)),
        (None, Some(at)) => Span::raw(format!(" updated {}s ago ", at.elapsed().as_secs())),
        (None, None) => Span::raw(format!(" {} ", app.endpoint)),
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", app.currency_pair),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("│"),
        Span::styled(format!(" {label} "), Style::default().fg(color)),
        Span::raw("│"),
        detail,
    ]);

    let para = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
