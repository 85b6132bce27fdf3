//! UI rendering using ratatui.
//!
//! All widgets render from the board and never mutate it.

mod layout;
mod widgets;

pub use layout::Layout;
pub use widgets::{AlphaList, Heatmap, HelpPanel, NewsFeed, StatsPanel, StatusBar};

use crate::state::Store;
use ratatui::Frame;

/// Main UI renderer.
pub struct Ui;

impl Ui {
    /// Render the entire UI.
    pub fn render(frame: &mut Frame, store: &Store) {
        let layout = Layout::new(frame.area());

        StatusBar::render(frame, layout.status_area, store);
        NewsFeed::render(frame, layout.feed_area, store);
        StatsPanel::render(frame, layout.stats_area, store);
        Heatmap::render(frame, layout.heatmap_area, store);
        AlphaList::render(frame, layout.alpha_area, store);

        // Render help panel if visible
        if store.app.show_help {
            HelpPanel::render(frame, frame.area());
        }
    }
}
