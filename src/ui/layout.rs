//! Layout management for the TUI.

use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// UI layout areas.
pub struct Layout {
    /// Status bar area (top).
    pub status_area: Rect,
    /// News feed area (left column).
    pub feed_area: Rect,
    /// Buy/sell counter area (right column, top).
    pub stats_area: Rect,
    /// Heatmap area (right column, middle).
    pub heatmap_area: Rect,
    /// Alpha picks area (right column, bottom).
    pub alpha_area: Rect,
}

impl Layout {
    /// Create a new layout from the terminal area.
    pub fn new(area: Rect) -> Self {
        let rows = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Status bar
                Constraint::Min(0),    // Main content
            ])
            .split(area);

        let columns = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(62), // News feed
                Constraint::Percentage(38), // Aggregates
            ])
            .split(rows[1]);

        let side = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),      // Counters
                Constraint::Percentage(40), // Heatmap
                Constraint::Min(0),         // Alpha picks
            ])
            .split(columns[1]);

        Self {
            status_area: rows[0],
            feed_area: columns[0],
            stats_area: side[0],
            heatmap_area: side[1],
            alpha_area: side[2],
        }
    }
}

/// Create a centered popup area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
