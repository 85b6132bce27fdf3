//! News feed state and domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Trading signal attached to a news item.
///
/// Derived once at ingestion from the backend's free-form signal string;
/// all classification downstream operates on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TradingSignal {
    StrongBuy,
    Buy,
    StrongSell,
    Sell,
    Caution,
    #[default]
    Neutral,
}

impl TradingSignal {
    /// Classify a raw signal string from the feed.
    ///
    /// Exact high-confidence values first, then substring fallbacks in
    /// fixed precedence: BUY, SELL, CAUTION.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "STRONG_BUY" => Self::StrongBuy,
            "STRONG_SELL" => Self::StrongSell,
            _ if raw.contains("BUY") => Self::Buy,
            _ if raw.contains("SELL") => Self::Sell,
            _ if raw.contains("CAUTION") => Self::Caution,
            _ => Self::Neutral,
        }
    }

    /// Whether this signal contributes buy pressure to aggregates.
    pub fn is_buy_pressure(&self) -> bool {
        matches!(self, Self::StrongBuy | Self::Buy)
    }

    /// Whether this signal contributes sell pressure to aggregates.
    pub fn is_sell_pressure(&self) -> bool {
        matches!(self, Self::StrongSell | Self::Sell)
    }

    /// Whether this is a high-confidence signal.
    pub fn is_strong(&self) -> bool {
        matches!(self, Self::StrongBuy | Self::StrongSell)
    }

    /// Style bucket for card rendering. Buy wins over sell wins over caution.
    pub fn bucket(&self) -> Option<SignalBucket> {
        if self.is_buy_pressure() {
            Some(SignalBucket::Buy)
        } else if self.is_sell_pressure() {
            Some(SignalBucket::Sell)
        } else if matches!(self, Self::Caution) {
            Some(SignalBucket::Caution)
        } else {
            None
        }
    }

    /// Humanized display label (underscores become spaces).
    pub fn label(&self) -> &'static str {
        match self {
            Self::StrongBuy => "STRONG BUY",
            Self::Buy => "BUY",
            Self::StrongSell => "STRONG SELL",
            Self::Sell => "SELL",
            Self::Caution => "CAUTION",
            Self::Neutral => "NEUTRAL",
        }
    }
}

impl std::fmt::Display for TradingSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Card style bucket derived from the trading signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalBucket {
    Buy,
    Sell,
    Caution,
}

/// AI enrichment attached to a news item, possibly after first sight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiInsight {
    /// Analysis paragraph.
    pub analysis: String,
    /// Short actionable recommendation.
    pub advice: String,
}

/// A single news item from the intelligence feed.
///
/// `id` is the permanent identity; every other field may change in place
/// on a later poll. AI enrichment arrives at most once and never
/// disappears again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    /// Stable identity key.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Publishing source.
    pub source: String,
    /// Publication instant; `None` when the feed timestamp failed to parse.
    pub timestamp: Option<DateTime<Utc>>,
    /// Coarse asset classification.
    pub asset: String,
    /// Concrete coin symbol; may hold the sentinels GENERAL/MARKET/ALT.
    pub coin_symbol: Option<String>,
    /// Classified trading signal.
    pub signal: TradingSignal,
    /// Severity, 0.0 to 1.0.
    pub impact: f64,
    /// Backend composite score.
    pub final_score: f64,
    /// AI enrichment, populated asynchronously by the backend.
    pub ai: Option<AiInsight>,
}

impl NewsItem {
    /// Symbol shown on the item's card.
    ///
    /// `coin_symbol` unless absent or a GENERAL/MARKET sentinel, then
    /// `asset`, then the literal "GEN".
    pub fn display_symbol(&self) -> &str {
        if let Some(sym) = self.coin_symbol.as_deref()
            && !sym.is_empty()
            && sym != "GENERAL"
            && sym != "MARKET"
        {
            return sym;
        }
        if self.asset.is_empty() {
            "GEN"
        } else {
            &self.asset
        }
    }

    /// Symbol this item is tallied under in the heatmap, if any.
    ///
    /// `coin_symbol` unless absent or a GENERAL/MARKET/ALT sentinel, then
    /// `asset` unless that is itself ALT or ALL (the item carries no
    /// attributable symbol and is skipped).
    pub fn heat_symbol(&self) -> Option<&str> {
        if let Some(sym) = self.coin_symbol.as_deref()
            && !sym.is_empty()
            && !matches!(sym, "GENERAL" | "MARKET" | "ALT")
        {
            return Some(sym);
        }
        match self.asset.as_str() {
            "" | "ALT" | "ALL" => None,
            asset => Some(asset),
        }
    }

    /// Time-of-day label for the card meta line, falling back to "Now"
    /// when the feed timestamp did not parse.
    pub fn time_label(&self) -> String {
        match self.timestamp {
            Some(ts) => ts.with_timezone(&chrono::Local).format("%H:%M").to_string(),
            None => "Now".to_string(),
        }
    }
}

/// State for the news feed.
#[derive(Debug, Default)]
pub struct FeedState {
    /// Latest snapshot, newest-first as delivered.
    pub items: Vec<NewsItem>,
    /// Sequence number of the last applied snapshot.
    pub last_seq: u64,
    /// Last update timestamp.
    pub last_updated: Option<DateTime<Utc>>,
}

impl FeedState {
    /// Apply a fresh snapshot. Returns false when the snapshot is stale
    /// (its sequence number is not newer than the last applied one).
    pub fn apply_snapshot(&mut self, seq: u64, items: Vec<NewsItem>) -> bool {
        if seq <= self.last_seq {
            return false;
        }
        self.last_seq = seq;
        self.items = items;
        self.last_updated = Some(Utc::now());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(coin_symbol: Option<&str>, asset: &str) -> NewsItem {
        NewsItem {
            id: "n1".to_string(),
            title: "Title".to_string(),
            source: "Wire".to_string(),
            timestamp: None,
            asset: asset.to_string(),
            coin_symbol: coin_symbol.map(str::to_string),
            signal: TradingSignal::Neutral,
            impact: 0.0,
            final_score: 0.0,
            ai: None,
        }
    }

    #[test]
    fn test_signal_parse_exact_strong() {
        assert_eq!(TradingSignal::parse("STRONG_BUY"), TradingSignal::StrongBuy);
        assert_eq!(
            TradingSignal::parse("STRONG_SELL"),
            TradingSignal::StrongSell
        );
    }

    #[test]
    fn test_signal_parse_substring_precedence() {
        assert_eq!(TradingSignal::parse("BUY"), TradingSignal::Buy);
        assert_eq!(TradingSignal::parse("SELL_NOW"), TradingSignal::Sell);
        assert_eq!(TradingSignal::parse("CAUTION"), TradingSignal::Caution);
        // Buy wins when a raw string names both directions.
        assert_eq!(TradingSignal::parse("BUY_OR_SELL"), TradingSignal::Buy);
        assert_eq!(TradingSignal::parse(""), TradingSignal::Neutral);
        assert_eq!(TradingSignal::parse("WAIT"), TradingSignal::Neutral);
    }

    #[test]
    fn test_signal_pressure_and_strength() {
        assert!(TradingSignal::StrongBuy.is_buy_pressure());
        assert!(TradingSignal::Buy.is_buy_pressure());
        assert!(!TradingSignal::Sell.is_buy_pressure());
        assert!(TradingSignal::StrongSell.is_sell_pressure());
        assert!(TradingSignal::StrongBuy.is_strong());
        assert!(!TradingSignal::Buy.is_strong());
    }

    #[test]
    fn test_signal_bucket_precedence() {
        assert_eq!(TradingSignal::StrongBuy.bucket(), Some(SignalBucket::Buy));
        assert_eq!(TradingSignal::Sell.bucket(), Some(SignalBucket::Sell));
        assert_eq!(
            TradingSignal::Caution.bucket(),
            Some(SignalBucket::Caution)
        );
        assert_eq!(TradingSignal::Neutral.bucket(), None);
    }

    #[test]
    fn test_display_symbol_fallbacks() {
        assert_eq!(item(Some("BTC"), "ETH").display_symbol(), "BTC");
        assert_eq!(item(Some("GENERAL"), "ETH").display_symbol(), "ETH");
        assert_eq!(item(Some("MARKET"), "ETH").display_symbol(), "ETH");
        // ALT is a concrete display symbol, unlike in the heatmap.
        assert_eq!(item(Some("ALT"), "ETH").display_symbol(), "ALT");
        assert_eq!(item(None, "").display_symbol(), "GEN");
        assert_eq!(item(Some(""), "").display_symbol(), "GEN");
    }

    #[test]
    fn test_heat_symbol_fallbacks() {
        assert_eq!(item(Some("BTC"), "ETH").heat_symbol(), Some("BTC"));
        assert_eq!(item(Some("GENERAL"), "ETH").heat_symbol(), Some("ETH"));
        assert_eq!(item(Some("ALT"), "ETH").heat_symbol(), Some("ETH"));
        assert_eq!(item(Some("ALT"), "ALT").heat_symbol(), None);
        assert_eq!(item(None, "ALL").heat_symbol(), None);
        assert_eq!(item(None, "").heat_symbol(), None);
    }

    #[test]
    fn test_time_label_fallback() {
        assert_eq!(item(None, "BTC").time_label(), "Now");
        let mut with_ts = item(None, "BTC");
        with_ts.timestamp = Some(Utc::now());
        assert_ne!(with_ts.time_label(), "Now");
    }

    #[test]
    fn test_feed_state_discards_stale_snapshots() {
        let mut feed = FeedState::default();
        assert!(feed.apply_snapshot(2, vec![item(None, "BTC")]));
        assert_eq!(feed.items.len(), 1);

        // A late completion from an earlier poll must not overwrite.
        assert!(!feed.apply_snapshot(1, vec![]));
        assert_eq!(feed.items.len(), 1);
        assert_eq!(feed.last_seq, 2);

        assert!(feed.apply_snapshot(3, vec![]));
        assert!(feed.items.is_empty());
    }
}
