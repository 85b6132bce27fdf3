//! Card reconciliation.
//!
//! Applies a full feed snapshot to the board with a minimal set of
//! create/update operations. Cards are identified by feed id and keep
//! their handle for the whole session; re-applying an unchanged snapshot
//! is a no-op.

use crate::board::{Board, CardContent, CardHandle};
use crate::state::NewsItem;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Reconciles feed snapshots against the board.
#[derive(Debug)]
pub struct Reconciler {
    /// Feed id to card handle, grown on first sight and never evicted.
    rendered: HashMap<String, CardHandle>,
    /// How long the "updated" flash stays on a card.
    flash: Duration,
}

impl Reconciler {
    /// Create a reconciler with the given flash duration.
    pub fn new(flash: Duration) -> Self {
        Self {
            rendered: HashMap::new(),
            flash,
        }
    }

    /// Apply a snapshot (newest-first) to the board.
    ///
    /// The snapshot is walked in reverse so that repeated front insertion
    /// leaves the board in the snapshot's newest-first order, with new
    /// items landing above everything already rendered.
    pub fn apply(&mut self, board: &mut Board, items: &[NewsItem], now: Instant) {
        for item in items.iter().rev() {
            match self.rendered.get(&item.id) {
                Some(&handle) => self.update_existing(board, handle, item, now),
                None => {
                    let handle =
                        board.create_card(&item.id, build_card(item), item.signal.bucket());
                    board.insert_at_front(handle);
                    self.rendered.insert(item.id.clone(), handle);
                }
            }
        }
    }

    /// Number of identities rendered so far.
    pub fn rendered_count(&self) -> usize {
        self.rendered.len()
    }

    /// An already-rendered item only changes when AI enrichment arrives:
    /// the card content is rebuilt wholesale and flashed. Once the card
    /// carries an AI block it never changes again.
    fn update_existing(
        &self,
        board: &mut Board,
        handle: CardHandle,
        item: &NewsItem,
        now: Instant,
    ) {
        let has_ai = board
            .card(handle)
            .map(|card| card.content.ai.is_some())
            .unwrap_or(false);

        if !has_ai && item.ai.is_some() {
            tracing::debug!(id = %item.id, "AI enrichment arrived, rebuilding card");
            board.replace_content(handle, build_card(item));
            board.flash(handle, now + self.flash);
        }
    }
}

/// Generate card content for an item. Every field is carried as literal
/// text; nothing from the feed is ever interpreted as markup.
pub fn build_card(item: &NewsItem) -> CardContent {
    CardContent {
        time_label: item.time_label(),
        source: item.source.clone(),
        symbol: item.display_symbol().to_string(),
        title: item.title.clone(),
        final_score: item.final_score,
        ai: item.ai.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AiInsight, SignalBucket, TradingSignal};
    use pretty_assertions::assert_eq;

    fn item(id: &str, signal: TradingSignal) -> NewsItem {
        NewsItem {
            id: id.to_string(),
            title: format!("Headline {id}"),
            source: "CoinDesk".to_string(),
            timestamp: None,
            asset: "BTC".to_string(),
            coin_symbol: Some("BTC".to_string()),
            signal,
            impact: 0.5,
            final_score: 0.0,
            ai: None,
        }
    }

    fn with_ai(mut base: NewsItem) -> NewsItem {
        base.ai = Some(AiInsight {
            analysis: "Momentum is building".to_string(),
            advice: "Watch resistance".to_string(),
        });
        base
    }

    fn reconciler() -> Reconciler {
        Reconciler::new(Duration::from_millis(1000))
    }

    #[test]
    fn test_order_preservation() {
        // Snapshot [C, B, A] newest-first renders C topmost.
        let mut board = Board::new();
        let mut rec = reconciler();
        let snapshot = vec![
            item("c", TradingSignal::Neutral),
            item("b", TradingSignal::Neutral),
            item("a", TradingSignal::Neutral),
        ];

        rec.apply(&mut board, &snapshot, Instant::now());

        let ids: Vec<&str> = board.cards_in_order().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_new_items_land_on_top_of_old_ones() {
        let mut board = Board::new();
        let mut rec = reconciler();
        let now = Instant::now();

        rec.apply(&mut board, &[item("a", TradingSignal::Neutral)], now);
        rec.apply(
            &mut board,
            &[
                item("c", TradingSignal::Neutral),
                item("b", TradingSignal::Neutral),
                item("a", TradingSignal::Neutral),
            ],
            now,
        );

        let ids: Vec<&str> = board.cards_in_order().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_identity_stability_across_polls() {
        let mut board = Board::new();
        let mut rec = reconciler();
        let now = Instant::now();

        rec.apply(&mut board, &[item("a", TradingSignal::Neutral)], now);
        let first = board.find_card("a").unwrap();

        rec.apply(&mut board, &[item("a", TradingSignal::Neutral)], now);
        assert_eq!(board.find_card("a"), Some(first));
        assert_eq!(board.card_count(), 1);
    }

    #[test]
    fn test_ai_arrival_replaces_exactly_once() {
        let mut board = Board::new();
        let mut rec = reconciler();
        let now = Instant::now();

        // First poll: no AI yet.
        rec.apply(&mut board, &[item("a", TradingSignal::Neutral)], now);
        let handle = board.find_card("a").unwrap();
        assert!(board.card(handle).unwrap().content.ai.is_none());
        assert!(!board.card(handle).unwrap().is_flashing());

        // Second poll: AI arrived, card rebuilt and flashed.
        rec.apply(
            &mut board,
            &[with_ai(item("a", TradingSignal::Neutral))],
            now,
        );
        assert!(board.card(handle).unwrap().content.ai.is_some());
        assert!(board.card(handle).unwrap().is_flashing());

        // Third poll: unchanged AI, no further replacement or flash.
        board.tick(now + Duration::from_millis(1500));
        rec.apply(
            &mut board,
            &[with_ai(item("a", TradingSignal::Neutral))],
            now + Duration::from_millis(1500),
        );
        assert!(!board.card(handle).unwrap().is_flashing());
        assert_eq!(board.find_card("a"), Some(handle));
    }

    #[test]
    fn test_bucket_classification_on_create() {
        let mut board = Board::new();
        let mut rec = reconciler();
        let snapshot = vec![
            item("buy", TradingSignal::StrongBuy),
            item("sell", TradingSignal::Sell),
            item("caution", TradingSignal::Caution),
            item("plain", TradingSignal::Neutral),
        ];

        rec.apply(&mut board, &snapshot, Instant::now());

        let bucket = |id: &str| board.card(board.find_card(id).unwrap()).unwrap().bucket;
        assert_eq!(bucket("buy"), Some(SignalBucket::Buy));
        assert_eq!(bucket("sell"), Some(SignalBucket::Sell));
        assert_eq!(bucket("caution"), Some(SignalBucket::Caution));
        assert_eq!(bucket("plain"), None);
    }

    #[test]
    fn test_unrelated_cards_untouched_by_shrunk_snapshot() {
        // The feed window can slide; items that fell out stay rendered.
        let mut board = Board::new();
        let mut rec = reconciler();
        let now = Instant::now();

        rec.apply(
            &mut board,
            &[
                item("b", TradingSignal::Neutral),
                item("a", TradingSignal::Neutral),
            ],
            now,
        );
        rec.apply(&mut board, &[item("c", TradingSignal::Neutral)], now);

        let ids: Vec<&str> = board.cards_in_order().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
        assert_eq!(rec.rendered_count(), 3);
    }

    #[test]
    fn test_empty_snapshot_is_a_no_op() {
        let mut board = Board::new();
        let mut rec = reconciler();
        rec.apply(&mut board, &[], Instant::now());
        assert_eq!(board.card_count(), 0);
    }

    #[test]
    fn test_build_card_symbol_fallback() {
        let mut general = item("a", TradingSignal::Neutral);
        general.coin_symbol = Some("GENERAL".to_string());
        general.asset = "ETH".to_string();
        assert_eq!(build_card(&general).symbol, "ETH");
        assert_eq!(build_card(&general).time_label, "Now");
    }
}
