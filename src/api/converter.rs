//! Data conversion utilities for API responses.

use crate::state::{AiInsight, Mood, NewsItem, TradingSignal};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A news item as emitted by the backend. Field names match the Go
/// server's JSON verbatim; everything optional defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireNewsItem {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Asset")]
    pub asset: String,
    #[serde(rename = "CoinSymbol")]
    pub coin_symbol: String,
    #[serde(rename = "TradingSignal")]
    pub trading_signal: String,
    #[serde(rename = "Impact")]
    pub impact: f64,
    #[serde(rename = "FinalScore")]
    pub final_score: f64,
    #[serde(rename = "AIAnalysis")]
    pub ai_analysis: String,
    #[serde(rename = "AIAdvice")]
    pub ai_advice: String,
}

/// The market mood record as emitted by the backend.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireMarketState {
    #[serde(rename = "Mood")]
    pub mood: String,
}

/// Converts API responses to internal state types.
pub struct DataConverter;

impl DataConverter {
    /// Convert a wire news item to the internal type.
    ///
    /// The trading signal variant is derived here, once; an unparseable
    /// timestamp becomes `None` (display falls back to "Now"); an empty
    /// coin symbol becomes absent; the AI block exists only when the
    /// analysis text is non-empty.
    pub fn convert_item(wire: WireNewsItem) -> NewsItem {
        let timestamp = DateTime::parse_from_rfc3339(&wire.timestamp)
            .ok()
            .map(|ts| ts.with_timezone(&Utc));

        let ai = (!wire.ai_analysis.is_empty()).then(|| AiInsight {
            analysis: wire.ai_analysis,
            advice: wire.ai_advice,
        });

        NewsItem {
            id: wire.id,
            title: wire.title,
            source: wire.source,
            timestamp,
            asset: wire.asset,
            coin_symbol: (!wire.coin_symbol.is_empty()).then_some(wire.coin_symbol),
            signal: TradingSignal::parse(&wire.trading_signal),
            impact: wire.impact,
            final_score: wire.final_score,
            ai,
        }
    }

    /// Convert a wire market state to the internal mood.
    pub fn convert_mood(wire: WireMarketState) -> Mood {
        Mood::parse(&wire.mood)
    }
}
