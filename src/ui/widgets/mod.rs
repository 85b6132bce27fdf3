//! TUI widgets.

mod alpha_list;
mod heatmap;
mod help;
mod news_feed;
mod stats;
mod status_bar;

pub use alpha_list::AlphaList;
pub use heatmap::Heatmap;
pub use help::HelpPanel;
pub use news_feed::NewsFeed;
pub use stats::StatsPanel;
pub use status_bar::StatusBar;
