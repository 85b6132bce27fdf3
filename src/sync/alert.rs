//! New-item alert trigger.

use crate::audio::Cue;
use crate::state::NewsItem;

/// Impact above which a new top item warrants a cue even without a
/// strong signal.
const IMPACT_THRESHOLD: f64 = 0.6;

/// Watches the top of the feed and decides when to fire an audio cue.
///
/// Fires at most once per genuinely new top item; updates to an already
/// seen top item (AI enrichment included) never re-fire.
#[derive(Debug, Default)]
pub struct AlertTrigger {
    last_seen_top_id: Option<String>,
    audio_enabled: bool,
}

impl AlertTrigger {
    /// Create a trigger with the given initial audio setting.
    pub fn new(audio_enabled: bool) -> Self {
        Self {
            last_seen_top_id: None,
            audio_enabled,
        }
    }

    /// Observe a snapshot. Returns the cue to play, if any.
    ///
    /// The top id is tracked regardless of the audio setting so that
    /// enabling audio later does not retroactively fire for items that
    /// arrived while it was off.
    pub fn observe(&mut self, items: &[NewsItem]) -> Option<Cue> {
        let top = items.first()?;
        if self.last_seen_top_id.as_deref() == Some(top.id.as_str()) {
            return None;
        }
        self.last_seen_top_id = Some(top.id.clone());

        if self.audio_enabled && (top.signal.is_strong() || top.impact > IMPACT_THRESHOLD) {
            Some(Cue::Alert)
        } else {
            None
        }
    }

    /// Toggle audio alerts. Returns the confirmation cue when switching on.
    pub fn toggle_audio(&mut self) -> Option<Cue> {
        self.audio_enabled = !self.audio_enabled;
        self.audio_enabled.then_some(Cue::Ping)
    }

    /// Whether audio alerts are currently enabled.
    pub fn audio_enabled(&self) -> bool {
        self.audio_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AiInsight, TradingSignal};

    fn item(id: &str, signal: TradingSignal, impact: f64) -> NewsItem {
        NewsItem {
            id: id.to_string(),
            title: "Headline".to_string(),
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

    #[test]
    fn test_single_fire_per_new_top() {
        let mut trigger = AlertTrigger::new(true);
        let snapshot = vec![item("a", TradingSignal::Neutral, 0.8)];

        // High impact fires exactly once.
        assert_eq!(trigger.observe(&snapshot), Some(Cue::Alert));
        // Identical re-poll fires nothing.
        assert_eq!(trigger.observe(&snapshot), None);

        // AI-only update to the same top item fires nothing.
        let mut enriched = snapshot.clone();
        enriched[0].ai = Some(AiInsight {
            analysis: "Major".to_string(),
            advice: "Act".to_string(),
        });
        assert_eq!(trigger.observe(&enriched), None);
    }

    #[test]
    fn test_strong_signal_fires_at_low_impact() {
        let mut trigger = AlertTrigger::new(true);
        let snapshot = vec![item("a", TradingSignal::StrongSell, 0.1)];
        assert_eq!(trigger.observe(&snapshot), Some(Cue::Alert));
    }

    #[test]
    fn test_weak_new_top_is_silent() {
        let mut trigger = AlertTrigger::new(true);
        let snapshot = vec![item("a", TradingSignal::Buy, 0.6)];
        // Impact exactly at the threshold does not qualify.
        assert_eq!(trigger.observe(&snapshot), None);
    }

    #[test]
    fn test_disabled_audio_still_tracks_top() {
        let mut trigger = AlertTrigger::new(false);
        let snapshot = vec![item("a", TradingSignal::StrongBuy, 0.9)];
        assert_eq!(trigger.observe(&snapshot), None);

        // Enabling afterwards must not fire for the already seen item.
        assert_eq!(trigger.toggle_audio(), Some(Cue::Ping));
        assert_eq!(trigger.observe(&snapshot), None);

        // But a genuinely new top fires.
        let next = vec![item("b", TradingSignal::StrongBuy, 0.9)];
        assert_eq!(trigger.observe(&next), Some(Cue::Alert));
    }

    #[test]
    fn test_toggle_cues() {
        let mut trigger = AlertTrigger::new(false);
        assert_eq!(trigger.toggle_audio(), Some(Cue::Ping));
        assert!(trigger.audio_enabled());
        assert_eq!(trigger.toggle_audio(), None);
        assert!(!trigger.audio_enabled());
    }

    #[test]
    fn test_empty_snapshot_observes_nothing() {
        let mut trigger = AlertTrigger::new(true);
        assert_eq!(trigger.observe(&[]), None);
    }
}
