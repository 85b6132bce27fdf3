//! Application-level state.

/// Global application state.
#[derive(Debug)]
pub struct AppState {
    /// Whether to show the help overlay.
    pub show_help: bool,
    /// Whether any poll has succeeded against the backend yet.
    pub connected: bool,
    /// Whether the feed is still waiting for its first non-empty snapshot.
    pub scanning: bool,
    /// Scroll offset into the news feed, in cards from the top.
    pub scroll_offset: usize,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            show_help: false,
            connected: false,
            scanning: true,
            scroll_offset: 0,
            should_quit: false,
        }
    }
}

impl AppState {
    /// Create a new application state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll the feed up by one card.
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll the feed down by one card, clamped to the card count.
    pub fn scroll_down(&mut self, card_count: usize) {
        let max = card_count.saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + 1).min(max);
    }

    /// Jump back to the top of the feed.
    pub fn scroll_top(&mut self) {
        self.scroll_offset = 0;
    }
}
