//! Alpha picks widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::board::AlphaRegion;
use crate::state::Store;

/// High-confidence signal list.
pub struct AlphaList;

impl AlphaList {
    /// Render the alpha picks region.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let block = Block::default()
            .title(" Alpha Picks ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match &store.board.alpha {
            AlphaRegion::Placeholder => {
                let placeholder = Paragraph::new(Line::from(Span::styled(
                    "Waiting for high confidence signals...",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )))
                .wrap(Wrap { trim: true });
                frame.render_widget(placeholder, inner);
            }
            AlphaRegion::Picks(picks) => {
                let mut lines = Vec::new();
                for pick in picks {
                    let side_color = if pick.buy_side {
                        Color::Green
                    } else {
                        Color::Red
                    };
                    lines.push(Line::from(vec![
                        Span::styled(
                            pick.symbol.clone(),
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::raw("  "),
                        Span::styled(pick.label.clone(), Style::default().fg(side_color)),
                    ]));
                    lines.push(Line::from(Span::styled(
                        pick.advice.clone(),
                        Style::default().fg(Color::Gray),
                    )));
                    lines.push(Line::from(""));
                }

                let list = Paragraph::new(lines).wrap(Wrap { trim: false });
                frame.render_widget(list, inner);
            }
        }
    }
}
