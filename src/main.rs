//! coindeck - A Terminal UI for live crypto news intelligence
//!
//! Polls a news intelligence backend and renders the feed, aggregates,
//! and market mood in the terminal, built with ratatui and reqwest.

use coindeck::{App, Config, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Log to a file; stdout belongs to the TUI.
    let log_dir = coindeck::config::log_dir().unwrap_or_else(|_| "logs".into());
    let file_appender = tracing_appender::rolling::daily(log_dir, "coindeck.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coindeck=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false),
        )
        .init();

    tracing::info!("coindeck starting");

    // Load configuration
    let config = Config::load_or_default()?;

    // Run the application
    let mut app = App::new(config)?;
    app.run().await?;

    Ok(())
}
