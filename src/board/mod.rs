//! The presentation board.
//!
//! An in-memory document of everything currently on screen: the ordered
//! card list, the aggregate regions (heatmap, counters, alpha picks), and
//! the mood indicator. The sync layer mutates the board through a small
//! set of operations; the UI renders it each frame and never mutates it.

use crate::state::{AiInsight, MoodTone, SignalBucket};
use std::collections::HashMap;
use std::time::Instant;

/// Opaque handle to a rendered card. Stable for the card's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardHandle(u64);

/// Renderable content of a news card. All fields are literal text; the
/// UI renders them as raw spans, never as markup.
#[derive(Debug, Clone, PartialEq)]
pub struct CardContent {
    /// Time-of-day label ("14:32" or "Now").
    pub time_label: String,
    /// Publishing source.
    pub source: String,
    /// Display symbol.
    pub symbol: String,
    /// Headline.
    pub title: String,
    /// Backend composite score; hidden when zero.
    pub final_score: f64,
    /// AI block, present once enrichment has arrived.
    pub ai: Option<AiInsight>,
}

/// A card on the board.
#[derive(Debug, Clone)]
pub struct Card {
    /// Feed identity this card renders.
    pub id: String,
    /// Current content.
    pub content: CardContent,
    /// Style bucket from the trading signal.
    pub bucket: Option<SignalBucket>,
    /// Deadline of the transient "updated" flash, if active.
    pub flash_until: Option<Instant>,
}

impl Card {
    /// Whether the updated-flash is currently active.
    pub fn is_flashing(&self) -> bool {
        self.flash_until.is_some()
    }
}

/// One heatmap chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatmapEntry {
    /// Symbol the chip represents.
    pub symbol: String,
    /// Signed buy/sell pressure score.
    pub score: i32,
}

/// One alpha-pick entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphaEntry {
    /// Symbol of the pick.
    pub symbol: String,
    /// Humanized signal label.
    pub label: String,
    /// AI advice text.
    pub advice: String,
    /// Whether this pick is on the buy side (for tinting).
    pub buy_side: bool,
}

/// The alpha region: a persistent placeholder until picks exist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AlphaRegion {
    #[default]
    Placeholder,
    Picks(Vec<AlphaEntry>),
}

/// The mood indicator region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodIndicator {
    /// Color tone of the mood dot.
    pub tone: MoodTone,
    /// Indicator label.
    pub label: &'static str,
}

impl Default for MoodIndicator {
    fn default() -> Self {
        Self {
            tone: MoodTone::Neutral,
            label: "NEUTRAL",
        }
    }
}

/// The full presentation document.
#[derive(Debug, Default)]
pub struct Board {
    next_handle: u64,
    cards: HashMap<CardHandle, Card>,
    by_id: HashMap<String, CardHandle>,
    /// Display order, front (newest) first.
    order: Vec<CardHandle>,
    /// Heatmap region, replaced wholesale each poll.
    pub heatmap: Vec<HeatmapEntry>,
    /// Buy counter.
    pub buys: usize,
    /// Sell counter.
    pub sells: usize,
    /// Alpha region.
    pub alpha: AlphaRegion,
    /// Mood indicator.
    pub mood: MoodIndicator,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the card rendering the given feed identity.
    pub fn find_card(&self, id: &str) -> Option<CardHandle> {
        self.by_id.get(id).copied()
    }

    /// Create a card for a feed identity. The card exists but is not yet
    /// placed; follow with [`Board::insert_at_front`].
    pub fn create_card(
        &mut self,
        id: &str,
        content: CardContent,
        bucket: Option<SignalBucket>,
    ) -> CardHandle {
        let handle = CardHandle(self.next_handle);
        self.next_handle += 1;
        self.cards.insert(
            handle,
            Card {
                id: id.to_string(),
                content,
                bucket,
                flash_until: None,
            },
        );
        self.by_id.insert(id.to_string(), handle);
        handle
    }

    /// Place a card at the current front of the board.
    pub fn insert_at_front(&mut self, handle: CardHandle) {
        self.order.insert(0, handle);
    }

    /// Replace a card's content wholesale.
    pub fn replace_content(&mut self, handle: CardHandle, content: CardContent) {
        if let Some(card) = self.cards.get_mut(&handle) {
            card.content = content;
        }
    }

    /// Mark a card with the transient "updated" flash until `deadline`.
    pub fn flash(&mut self, handle: CardHandle, deadline: Instant) {
        if let Some(card) = self.cards.get_mut(&handle) {
            card.flash_until = Some(deadline);
        }
    }

    /// Clear expired flashes. Driven by the UI tick.
    pub fn tick(&mut self, now: Instant) {
        for card in self.cards.values_mut() {
            if let Some(deadline) = card.flash_until
                && deadline <= now
            {
                card.flash_until = None;
            }
        }
    }

    /// Get a card by handle.
    pub fn card(&self, handle: CardHandle) -> Option<&Card> {
        self.cards.get(&handle)
    }

    /// Cards in display order, front first.
    pub fn cards_in_order(&self) -> impl Iterator<Item = &Card> {
        self.order.iter().filter_map(|h| self.cards.get(h))
    }

    /// Number of cards on the board.
    pub fn card_count(&self) -> usize {
        self.order.len()
    }

    /// Replace the heatmap region.
    pub fn set_heatmap(&mut self, entries: Vec<HeatmapEntry>) {
        self.heatmap = entries;
    }

    /// Replace the buy/sell counters.
    pub fn set_counters(&mut self, buys: usize, sells: usize) {
        self.buys = buys;
        self.sells = sells;
    }

    /// Replace the alpha region with picks.
    pub fn set_alpha_picks(&mut self, picks: Vec<AlphaEntry>) {
        self.alpha = AlphaRegion::Picks(picks);
    }

    /// Show the alpha placeholder, unless it is already showing.
    pub fn show_alpha_placeholder(&mut self) {
        if !matches!(self.alpha, AlphaRegion::Placeholder) {
            self.alpha = AlphaRegion::Placeholder;
        }
    }

    /// Replace the mood indicator.
    pub fn set_mood(&mut self, tone: MoodTone, label: &'static str) {
        self.mood = MoodIndicator { tone, label };
    }
}
