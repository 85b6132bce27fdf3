//! Help panel widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::super::layout::centered_rect;

/// Help panel showing keybindings.
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel.
    pub fn render(frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(50, 60, area);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let help_text = vec![
            Line::from(vec![Span::styled(
                "Navigation",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("  j/↓  ", Style::default().fg(Color::Cyan)),
                Span::raw("Scroll feed down"),
            ]),
            Line::from(vec![
                Span::styled("  k/↑  ", Style::default().fg(Color::Cyan)),
                Span::raw("Scroll feed up"),
            ]),
            Line::from(vec![
                Span::styled("  g    ", Style::default().fg(Color::Cyan)),
                Span::raw("Jump to newest"),
            ]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Actions",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("  a    ", Style::default().fg(Color::Cyan)),
                Span::raw("Toggle audio alerts"),
            ]),
            Line::from(vec![
                Span::styled("  r    ", Style::default().fg(Color::Cyan)),
                Span::raw("Refresh now"),
            ]),
            Line::from(vec![
                Span::styled("  ?    ", Style::default().fg(Color::Cyan)),
                Span::raw("Toggle help"),
            ]),
            Line::from(vec![
                Span::styled("  q    ", Style::default().fg(Color::Cyan)),
                Span::raw("Quit"),
            ]),
        ];

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().fg(Color::White));

        frame.render_widget(help, popup_area);
    }
}
