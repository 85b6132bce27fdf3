//! Market mood state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Overall market mood as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mood {
    Bullish,
    Bearish,
    #[default]
    Neutral,
}

impl Mood {
    /// Parse a raw mood string; anything unrecognized (including absent)
    /// collapses to neutral.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "BULLISH" => Self::Bullish,
            "BEARISH" => Self::Bearish,
            _ => Self::Neutral,
        }
    }

    /// Display tone for the mood indicator.
    pub fn tone(&self) -> MoodTone {
        match self {
            Self::Bullish => MoodTone::Positive,
            Self::Bearish => MoodTone::Negative,
            Self::Neutral => MoodTone::Neutral,
        }
    }

    /// Display label for the mood indicator.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bullish => "BULLISH",
            Self::Bearish => "BEARISH",
            Self::Neutral => "NEUTRAL",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Color tone bucket for the mood indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodTone {
    Positive,
    Negative,
    Neutral,
}

/// State for the market mood poll.
#[derive(Debug, Default)]
pub struct MoodState {
    /// Latest mood.
    pub current: Mood,
    /// Sequence number of the last applied mood response.
    pub last_seq: u64,
    /// Last update timestamp.
    pub last_updated: Option<DateTime<Utc>>,
}

impl MoodState {
    /// Apply a fresh mood reading. Returns false when the response is stale.
    pub fn apply(&mut self, seq: u64, mood: Mood) -> bool {
        if seq <= self.last_seq {
            return false;
        }
        self.last_seq = seq;
        self.current = mood;
        self.last_updated = Some(Utc::now());
        true
    }
}
