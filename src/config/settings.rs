//! Configuration settings for coindeck.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API configuration.
    pub api: ApiConfig,
    /// UI configuration.
    pub ui: UiConfig,
    /// Key bindings.
    pub keybindings: KeyBindings,
    /// Theme configuration.
    pub theme: ThemeConfig,
}

impl Config {
    /// Load configuration from file, returning default if file doesn't exist or fails.
    pub fn load_or_default() -> crate::Result<Self> {
        Self::load(None)
    }

    /// Load configuration from file.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(|| {
            super::config_dir()
                .map(|p| p.join("config.toml"))
                .unwrap_or_else(|_| PathBuf::from("config.toml"))
        });

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<()> {
        let config_path = path.unwrap_or_else(|| {
            super::config_dir()
                .map(|p| p.join("config.toml"))
                .unwrap_or_else(|_| PathBuf::from("config.toml"))
        });

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

/// API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Intelligence backend base URL.
    pub base_url: String,
    /// News feed path.
    pub news_path: String,
    /// Market mood path.
    pub mood_path: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8081".to_string(),
            news_path: "/api/news".to_string(),
            mood_path: "/api/market".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    /// Full URL of the news feed endpoint.
    pub fn news_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.news_path)
    }

    /// Full URL of the market mood endpoint.
    pub fn mood_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.mood_path)
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// News feed poll interval in milliseconds.
    pub news_poll_ms: u64,
    /// Market mood poll interval in milliseconds.
    pub mood_poll_ms: u64,
    /// Duration of the "updated" card flash in milliseconds.
    pub flash_ms: u64,
    /// Whether audio cues start enabled.
    pub audio_enabled: bool,
    /// Show status bar.
    pub show_status_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            news_poll_ms: 2_000,
            mood_poll_ms: 10_000,
            flash_ms: 1_000,
            audio_enabled: false,
            show_status_bar: true,
        }
    }
}

impl UiConfig {
    /// News poll interval as a Duration.
    pub fn news_poll_interval(&self) -> Duration {
        Duration::from_millis(self.news_poll_ms.max(1))
    }

    /// Mood poll interval as a Duration.
    pub fn mood_poll_interval(&self) -> Duration {
        Duration::from_millis(self.mood_poll_ms.max(1))
    }

    /// Card flash duration as a Duration.
    pub fn flash_duration(&self) -> Duration {
        Duration::from_millis(self.flash_ms)
    }
}

/// Key bindings configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Quit the application.
    pub quit: String,
    /// Show help.
    pub help: String,
    /// Navigate up.
    pub up: String,
    /// Navigate down.
    pub down: String,
    /// Jump back to the top of the feed.
    pub top: String,
    /// Refresh data immediately.
    pub refresh: String,
    /// Toggle audio alerts.
    pub audio: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            help: "?".to_string(),
            up: "k".to_string(),
            down: "j".to_string(),
            top: "g".to_string(),
            refresh: "r".to_string(),
            audio: "a".to_string(),
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Accent color (hex).
    pub accent: String,
    /// Bullish/buy color (hex).
    pub bullish: String,
    /// Bearish/sell color (hex).
    pub bearish: String,
    /// Caution color (hex).
    pub caution: String,
    /// Background color (hex).
    pub background: String,
    /// Foreground/text color (hex).
    pub foreground: String,
    /// Border color (hex).
    pub border: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: "#38bdf8".to_string(),
            bullish: "#4ade80".to_string(),
            bearish: "#f87171".to_string(),
            caution: "#facc15".to_string(),
            background: "#0b1020".to_string(),
            foreground: "#e2e8f0".to_string(),
            border: "#334155".to_string(),
        }
    }
}
