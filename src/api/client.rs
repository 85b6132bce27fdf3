//! Intelligence backend API client.

use crate::config::ApiConfig;
use crate::error::Result;
use crate::state::{Mood, NewsItem};
use std::time::Duration;

use super::converter::{DataConverter, WireMarketState, WireNewsItem};

/// Client for the news and market mood endpoints.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    news_url: String,
    mood_url: String,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            news_url: config.news_url(),
            mood_url: config.mood_url(),
        })
    }

    /// Fetch the latest news snapshot (newest-first).
    ///
    /// An absent/null payload is treated as an empty snapshot.
    pub async fn fetch_news(&self) -> Result<Vec<NewsItem>> {
        let wire: Option<Vec<WireNewsItem>> = self
            .http
            .get(&self.news_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(wire
            .unwrap_or_default()
            .into_iter()
            .map(DataConverter::convert_item)
            .collect())
    }

    /// Fetch the current market mood.
    pub async fn fetch_mood(&self) -> Result<Mood> {
        let wire: WireMarketState = self
            .http
            .get(&self.mood_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(DataConverter::convert_mood(wire))
    }
}
