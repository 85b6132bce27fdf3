//! News feed widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::board::Card;
use crate::state::{SignalBucket, Store};

/// Scrolling list of news cards.
pub struct NewsFeed;

impl NewsFeed {
    /// Render the news feed.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let block = Block::default()
            .title(format!(" Live Intel ({}) ", store.board.card_count()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if store.app.scanning {
            let scanning = Paragraph::new(Line::from(Span::styled(
                "Scanning feeds...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )));
            frame.render_widget(scanning, inner);
            return;
        }

        let mut y = inner.y;
        for card in store.board.cards_in_order().skip(store.app.scroll_offset) {
            let height = card_height(card);
            if y + height > inner.y + inner.height {
                break;
            }
            let card_area = Rect {
                x: inner.x,
                y,
                width: inner.width,
                height,
            };
            render_card(frame, card_area, card);
            y += height + 1;
        }
    }
}

fn card_height(card: &Card) -> u16 {
    // Meta line + title, plus the AI block when present.
    if card.content.ai.is_some() { 5 } else { 2 }
}

fn render_card(frame: &mut Frame, area: Rect, card: &Card) {
    let edge_color = match card.bucket {
        Some(SignalBucket::Buy) => Color::Green,
        Some(SignalBucket::Sell) => Color::Red,
        Some(SignalBucket::Caution) => Color::Yellow,
        None => Color::DarkGray,
    };

    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(edge_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content = &card.content;
    let mut meta = format!(" {} • {}", content.time_label, content.source);
    if content.final_score != 0.0 {
        meta.push_str(&format!(" • {:+.2}", content.final_score));
    }

    let mut lines = vec![
        Line::from(vec![
            Span::styled(meta, Style::default().fg(Color::DarkGray)),
            Span::raw("  "),
            Span::styled(
                content.symbol.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        // Feed text is rendered as raw spans only; nothing from the
        // backend is ever interpreted as markup.
        Line::from(Span::raw(format!(" {}", content.title))),
    ];

    if let Some(ai) = &content.ai {
        lines.push(Line::from(Span::styled(
            " 🤖 AI Analysis",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!(" {}", ai.analysis),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(Span::styled(
            format!(" 💡 {}", ai.advice),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let style = if card.is_flashing() {
        Style::default().bg(Color::Rgb(40, 55, 40))
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(lines).style(style).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}
