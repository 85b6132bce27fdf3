//! Aggregate views over the feed snapshot.
//!
//! Pure full recomputes; none carry state or touch the rendered card set.

use crate::board::{AlphaEntry, HeatmapEntry};
use crate::state::NewsItem;
use std::collections::HashMap;

/// Snapshot-wide buy/sell counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignalTotals {
    pub buys: usize,
    pub sells: usize,
}

/// Per-symbol signed pressure score, in first-appearance order.
///
/// Items without an attributable symbol (sentinel coin symbol with an
/// ALT/ALL asset) are skipped entirely.
pub fn heatmap(items: &[NewsItem]) -> Vec<HeatmapEntry> {
    let mut entries: Vec<HeatmapEntry> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for item in items {
        let Some(symbol) = item.heat_symbol() else {
            continue;
        };

        let slot = *index.entry(symbol).or_insert_with(|| {
            entries.push(HeatmapEntry {
                symbol: symbol.to_string(),
                score: 0,
            });
            entries.len() - 1
        });

        if item.signal.is_buy_pressure() {
            entries[slot].score += 1;
        }
        if item.signal.is_sell_pressure() {
            entries[slot].score -= 1;
        }
    }

    entries
}

/// Count buy-pressure and sell-pressure items across the whole snapshot.
pub fn signal_totals(items: &[NewsItem]) -> SignalTotals {
    let mut totals = SignalTotals::default();
    for item in items {
        if item.signal.is_buy_pressure() {
            totals.buys += 1;
        }
        if item.signal.is_sell_pressure() {
            totals.sells += 1;
        }
    }
    totals
}

/// Filter the snapshot down to high-confidence picks.
///
/// Only exact strong signals qualify; a plain buy or sell never does.
pub fn alpha_picks(items: &[NewsItem]) -> Vec<AlphaEntry> {
    items
        .iter()
        .filter(|item| item.signal.is_strong())
        .map(|item| AlphaEntry {
            symbol: alpha_symbol(item).to_string(),
            label: item.signal.label().to_string(),
            advice: item
                .ai
                .as_ref()
                .map(|ai| ai.advice.clone())
                .unwrap_or_default(),
            buy_side: item.signal.is_buy_pressure(),
        })
        .collect()
}

// Alpha picks prefer the coin symbol verbatim, sentinels included.
fn alpha_symbol(item: &NewsItem) -> &str {
    match item.coin_symbol.as_deref() {
        Some(sym) if !sym.is_empty() => sym,
        _ => &item.asset,
    }
}
