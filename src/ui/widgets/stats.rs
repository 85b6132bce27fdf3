//! Buy/sell counter widget.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::Store;

/// Snapshot-wide buy and sell signal counters.
pub struct StatsPanel;

impl StatsPanel {
    /// Render the counters.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        render_counter(
            frame,
            halves[0],
            "BUY SIGNALS",
            store.board.buys,
            Color::Green,
        );
        render_counter(
            frame,
            halves[1],
            "SELL SIGNALS",
            store.board.sells,
            Color::Red,
        );
    }
}

fn render_counter(frame: &mut Frame, area: Rect, label: &str, count: usize, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        Line::from(Span::styled(
            count.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(label, Style::default().fg(Color::DarkGray))),
    ];

    let counter = Paragraph::new(lines)
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(counter, area);
}
