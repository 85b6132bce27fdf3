//! Status bar widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{MoodTone, Store};

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let connection_status = if store.app.connected {
            Span::styled("● Connected", Style::default().fg(Color::Green))
        } else {
            Span::styled("○ Disconnected", Style::default().fg(Color::Red))
        };

        let mood_color = match store.board.mood.tone {
            MoodTone::Positive => Color::Green,
            MoodTone::Negative => Color::Red,
            MoodTone::Neutral => Color::Gray,
        };
        let mood = Span::styled(
            format!("● {}", store.board.mood.label),
            Style::default().fg(mood_color),
        );

        let audio = if store.audio_enabled() {
            Span::styled("♪ alerts on", Style::default().fg(Color::Yellow))
        } else {
            Span::styled("♪ alerts off", Style::default().fg(Color::DarkGray))
        };

        let help_hint = Span::styled(" Press ? for help ", Style::default().fg(Color::DarkGray));

        // Create the status line
        let left_content = vec![
            Span::styled(
                " ⚡ coindeck ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            connection_status,
            Span::raw(" | "),
            mood,
            Span::raw(" | "),
            audio,
        ];

        let status_line = Line::from(left_content);

        // Calculate padding for right-aligned help hint
        let left_len: usize = status_line.spans.iter().map(|s| s.content.len()).sum();
        let right_len = help_hint.content.len();
        let padding = area
            .width
            .saturating_sub(left_len as u16 + right_len as u16);

        let mut full_line = status_line.spans;
        full_line.push(Span::raw(" ".repeat(padding as usize)));
        full_line.push(help_hint);

        let paragraph =
            Paragraph::new(Line::from(full_line)).style(Style::default().bg(Color::DarkGray));

        frame.render_widget(paragraph, area);
    }
}
