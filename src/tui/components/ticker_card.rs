//! Ticker card component: one bordered panel per record.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rust_decimal::Decimal;

use crate::models::ticker::TickerRecord;

/// Rows of content plus the two border rows.
pub const CARD_HEIGHT: u16 = 14;

/// Minimum width that fits the label column and an 8-decimal price.
pub const CARD_WIDTH: u16 = 34;

/// Renders one record as a card.
pub fn render(frame: &mut Frame, area: Rect, record: &TickerRecord, selected: bool, stale: bool) {
    let title = if stale {
        format!(" {} [STALE] ", record.symbol)
    } else {
        format!(" {} ", record.symbol)
    };

    let border_style = if selected {
        Style::default().fg(Color::Cyan)
    } else if stale {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .border_style(border_style);

    let spread = record.spread();
    let spread_color = if spread >= Decimal::ZERO {
        Color::White
    } else {
        Color::Magenta
    };

    let lines = vec![
        row("Currency", record.currency.clone(), Color::White),
        row("Last", price(record.last), Color::White).patch_style(Modifier::BOLD),
        row("High", price(record.high), Color::White),
        row("Low", price(record.low), Color::White),
        row("Volume", price(record.volume), Color::White),
        row("VWAP", price(record.vwap), Color::White),
        row("Max bid", price(record.max_bid), Color::Green),
        row("Min ask", price(record.min_ask), Color::Red),
        row("Best bid", price(record.best_bid), Color::Green),
        row("Best ask", price(record.best_ask), Color::Red),
        row("Spread", price(spread), spread_color),
        row("USD", format!("${:.2}", record.usd), Color::Cyan),
    ];

    let para = Paragraph::new(lines).block(block);
    frame.render_widget(para, area);
}

fn row(label: &'static str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {label:<10}"), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

fn price(value: Decimal) -> String {
    value.normalize().to_string()
}
