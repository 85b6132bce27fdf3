//! Intelligence backend API integration.
//!
//! This module provides a thin client for the news and market mood
//! endpoints, plus conversion from the backend's wire shapes to the
//! internal state types.

mod client;
mod converter;

pub use client::ApiClient;
pub use converter::{DataConverter, WireMarketState, WireNewsItem};
