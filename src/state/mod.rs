//! State management for coindeck.
//!
//! This module provides centralized state management with a unidirectional
//! data flow pattern: every mutation is an `Action` applied by the single
//! reducer on the reaction thread, so no state needs locking.

mod app_state;
mod feed_state;
mod mood_state;

pub use app_state::AppState;
pub use feed_state::{AiInsight, FeedState, NewsItem, SignalBucket, TradingSignal};
pub use mood_state::{Mood, MoodState, MoodTone};

use crate::audio::AudioSink;
use crate::board::Board;
use crate::config::UiConfig;
use crate::error::Result;
use crate::sync::{AlertTrigger, Reconciler, aggregates};
use std::time::Instant;
use tokio::sync::mpsc;

/// Which poll a fetch result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedSource {
    News,
    Mood,
}

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone)]
pub enum Action {
    // Poll results
    NewsFetched { seq: u64, items: Vec<NewsItem> },
    MoodFetched { seq: u64, mood: Mood },
    FetchFailed(FeedSource),

    // Immediate refresh (handled by the app, which spawns the fetch)
    RefreshNews,
    RefreshMood,

    // UI actions
    ToggleAudio,
    ToggleHelp,
    ScrollUp,
    ScrollDown,
    GoToTop,
    Tick,

    // Quit
    Quit,
}

/// The global state store.
pub struct Store {
    /// Application state.
    pub app: AppState,
    /// News feed state.
    pub feed: FeedState,
    /// Market mood state.
    pub mood: MoodState,
    /// The presentation board.
    pub board: Board,
    /// Card reconciler.
    reconciler: Reconciler,
    /// Alert trigger.
    alert: AlertTrigger,
    /// Audio capability.
    audio: Box<dyn AudioSink>,
    /// Action sender for dispatching actions.
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Store {
    /// Create a new store with the given action sender and audio sink.
    pub fn new(
        ui: &UiConfig,
        action_tx: mpsc::UnboundedSender<Action>,
        audio: Box<dyn AudioSink>,
    ) -> Self {
        Self {
            app: AppState::new(),
            feed: FeedState::default(),
            mood: MoodState::default(),
            board: Board::new(),
            reconciler: Reconciler::new(ui.flash_duration()),
            alert: AlertTrigger::new(ui.audio_enabled),
            audio,
            action_tx,
        }
    }

    /// Dispatch an action to the store.
    pub fn dispatch(&self, action: Action) -> Result<()> {
        self.action_tx
            .send(action)
            .map_err(|e| crate::Error::channel(e.to_string()))
    }

    /// Whether audio alerts are currently enabled.
    pub fn audio_enabled(&self) -> bool {
        self.alert.audio_enabled()
    }

    /// Apply an action to update state.
    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::NewsFetched { seq, items } => self.apply_news(seq, items),
            Action::MoodFetched { seq, mood } => self.apply_mood(seq, mood),
            Action::FetchFailed(source) => {
                tracing::debug!(?source, "poll failed, skipping cycle");
                self.app.connected = false;
            }

            // The app intercepts refresh actions before the reducer;
            // seeing one here means there is nothing to do.
            Action::RefreshNews | Action::RefreshMood => {}

            Action::ToggleAudio => {
                if let Some(cue) = self.alert.toggle_audio() {
                    self.play(cue);
                }
            }
            Action::ToggleHelp => self.app.show_help = !self.app.show_help,
            Action::ScrollUp => self.app.scroll_up(),
            Action::ScrollDown => {
                let card_count = self.board.card_count();
                self.app.scroll_down(card_count);
            }
            Action::GoToTop => self.app.scroll_top(),
            Action::Tick => self.board.tick(Instant::now()),

            Action::Quit => self.app.should_quit = true,
        }
    }

    /// Apply a news snapshot: alert check, reconcile, recompute aggregates.
    fn apply_news(&mut self, seq: u64, items: Vec<NewsItem>) {
        if !self.feed.apply_snapshot(seq, items) {
            tracing::debug!(seq, "discarding stale news response");
            return;
        }
        self.app.connected = true;
        if !self.feed.items.is_empty() {
            self.app.scanning = false;
        }

        if let Some(cue) = self.alert.observe(&self.feed.items) {
            self.play(cue);
        }

        self.reconciler
            .apply(&mut self.board, &self.feed.items, Instant::now());

        self.board.set_heatmap(aggregates::heatmap(&self.feed.items));
        let totals = aggregates::signal_totals(&self.feed.items);
        self.board.set_counters(totals.buys, totals.sells);

        let picks = aggregates::alpha_picks(&self.feed.items);
        if picks.is_empty() {
            self.board.show_alpha_placeholder();
        } else {
            self.board.set_alpha_picks(picks);
        }
    }

    fn apply_mood(&mut self, seq: u64, mood: Mood) {
        if !self.mood.apply(seq, mood) {
            tracing::debug!(seq, "discarding stale mood response");
            return;
        }
        self.app.connected = true;
        self.board.set_mood(mood.tone(), mood.label());
    }

    fn play(&mut self, cue: crate::audio::Cue) {
        if let Err(e) = self.audio.play(cue) {
            tracing::warn!("audio cue failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{Cue, MockAudioSink};
    use crate::board::AlphaRegion;
    use pretty_assertions::assert_eq;

    fn item(id: &str, signal: TradingSignal, impact: f64) -> NewsItem {
        NewsItem {
            id: id.to_string(),
            title: format!("Headline {id}"),
            source: "Wire".to_string(),
            timestamp: None,
            asset: "BTC".to_string(),
            coin_symbol: Some("BTC".to_string()),
            signal,
            impact,
            final_score: 0.0,
            ai: None,
        }
    }

    fn store_with_sink(audio_enabled: bool, sink: MockAudioSink) -> Store {
        let (tx, _rx) = mpsc::unbounded_channel();
        let ui = UiConfig {
            audio_enabled,
            ..UiConfig::default()
        };
        Store::new(&ui, tx, Box::new(sink))
    }

    fn quiet_store() -> Store {
        let mut sink = MockAudioSink::new();
        sink.expect_play().never();
        store_with_sink(false, sink)
    }

    #[test]
    fn test_news_fetched_reconciles_and_aggregates() {
        let mut store = quiet_store();
        store.reduce(Action::NewsFetched {
            seq: 1,
            items: vec![
                item("b", TradingSignal::Buy, 0.2),
                item("a", TradingSignal::Sell, 0.2),
            ],
        });

        assert!(store.app.connected);
        assert!(!store.app.scanning);
        assert_eq!(store.board.card_count(), 2);
        assert_eq!(store.board.buys, 1);
        assert_eq!(store.board.sells, 1);
        assert_eq!(store.board.heatmap.len(), 1);
        assert_eq!(store.board.alpha, AlphaRegion::Placeholder);
    }

    #[test]
    fn test_stale_news_response_is_inert() {
        let mut store = quiet_store();
        store.reduce(Action::NewsFetched {
            seq: 2,
            items: vec![item("a", TradingSignal::Buy, 0.2)],
        });
        // A slow response from an earlier poll completes late.
        store.reduce(Action::NewsFetched {
            seq: 1,
            items: vec![
                item("b", TradingSignal::Buy, 0.2),
                item("a", TradingSignal::Buy, 0.2),
            ],
        });

        assert_eq!(store.feed.items.len(), 1);
        assert_eq!(store.board.card_count(), 1);
        assert_eq!(store.board.buys, 1);
    }

    #[test]
    fn test_alert_fires_once_through_reducer() {
        let mut sink = MockAudioSink::new();
        sink.expect_play()
            .withf(|cue| *cue == Cue::Alert)
            .times(1)
            .returning(|_| Ok(()));
        let mut store = store_with_sink(true, sink);

        let snapshot = vec![item("a", TradingSignal::Neutral, 0.8)];
        store.reduce(Action::NewsFetched {
            seq: 1,
            items: snapshot.clone(),
        });
        store.reduce(Action::NewsFetched {
            seq: 2,
            items: snapshot,
        });
    }

    #[test]
    fn test_audio_toggle_plays_confirmation() {
        let mut sink = MockAudioSink::new();
        sink.expect_play()
            .withf(|cue| *cue == Cue::Ping)
            .times(1)
            .returning(|_| Ok(()));
        let mut store = store_with_sink(false, sink);

        store.reduce(Action::ToggleAudio);
        assert!(store.audio_enabled());
        // Toggling off plays nothing.
        store.reduce(Action::ToggleAudio);
        assert!(!store.audio_enabled());
    }

    #[test]
    fn test_audio_failure_is_swallowed() {
        let mut sink = MockAudioSink::new();
        sink.expect_play()
            .returning(|_| Err(crate::Error::application("autoplay blocked")));
        let mut store = store_with_sink(false, sink);
        store.reduce(Action::ToggleAudio);
        assert!(store.audio_enabled());
    }

    #[test]
    fn test_mood_fetched_updates_indicator() {
        let mut store = quiet_store();
        store.reduce(Action::MoodFetched {
            seq: 1,
            mood: Mood::Bullish,
        });
        assert_eq!(store.board.mood.tone, MoodTone::Positive);
        assert_eq!(store.board.mood.label, "BULLISH");

        // Stale mood response is discarded.
        store.reduce(Action::MoodFetched {
            seq: 1,
            mood: Mood::Bearish,
        });
        assert_eq!(store.board.mood.label, "BULLISH");
    }

    #[test]
    fn test_alpha_region_follows_snapshot() {
        let mut store = quiet_store();
        store.reduce(Action::NewsFetched {
            seq: 1,
            items: vec![item("a", TradingSignal::StrongBuy, 0.2)],
        });
        assert!(matches!(store.board.alpha, AlphaRegion::Picks(_)));

        store.reduce(Action::NewsFetched {
            seq: 2,
            items: vec![item("a", TradingSignal::Buy, 0.2)],
        });
        assert_eq!(store.board.alpha, AlphaRegion::Placeholder);
    }

    #[test]
    fn test_scroll_and_quit() {
        let mut store = quiet_store();
        store.reduce(Action::NewsFetched {
            seq: 1,
            items: vec![
                item("b", TradingSignal::Neutral, 0.1),
                item("a", TradingSignal::Neutral, 0.1),
            ],
        });

        store.reduce(Action::ScrollDown);
        assert_eq!(store.app.scroll_offset, 1);
        store.reduce(Action::ScrollDown);
        assert_eq!(store.app.scroll_offset, 1);
        store.reduce(Action::GoToTop);
        assert_eq!(store.app.scroll_offset, 0);

        store.reduce(Action::Quit);
        assert!(store.app.should_quit);
    }
}
