//! Symbol heatmap widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::state::Store;

/// Per-symbol buy/sell pressure chips.
pub struct Heatmap;

impl Heatmap {
    /// Render the heatmap.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let block = Block::default()
            .title(" Symbol Heatmap ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if store.board.heatmap.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No symbols yet",
                Style::default().fg(Color::DarkGray),
            )));
            frame.render_widget(empty, inner);
            return;
        }

        let mut spans = Vec::new();
        for entry in &store.board.heatmap {
            let color = match entry.score.cmp(&0) {
                std::cmp::Ordering::Greater => Color::Green,
                std::cmp::Ordering::Less => Color::Red,
                std::cmp::Ordering::Equal => Color::Gray,
            };
            spans.push(Span::styled(
                format!(" {} ", entry.symbol),
                Style::default()
                    .fg(color)
                    .bg(Color::Rgb(25, 30, 45))
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }

        let chips = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true });
        frame.render_widget(chips, inner);
    }
}
