//! # coindeck - Crypto News Intelligence Terminal
//!
//! A terminal client for a crypto news intelligence backend. Polls the
//! news and market mood feeds, reconciles each snapshot against the
//! rendered board without losing card identity, and derives live
//! aggregates (symbol heatmap, buy/sell counters, alpha picks) plus an
//! audio alert for high-impact arrivals.
//!
//! ## Architecture
//!
//! The application follows a clean architecture pattern:
//!
//! - **App**: Poll timers, event loop, and lifecycle management
//! - **State**: Centralized store with a single-reducer data flow
//! - **Sync**: Snapshot reconciliation, aggregates, and the alert trigger
//! - **Board**: The in-memory presentation document the UI renders
//! - **API**: Intelligence backend integration layer
//! - **UI**: Layout and rendering logic
//! - **Events**: Input handling
//! - **Config**: Configuration management

pub mod api;
pub mod app;
pub mod audio;
pub mod board;
pub mod config;
pub mod error;
pub mod events;
pub mod state;
pub mod sync;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
pub use state::{Mood, NewsItem, TradingSignal};
