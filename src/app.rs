//! Main application module.
//!
//! This module contains the main `App` struct that coordinates the poll
//! timers, the event loop, state management, and rendering.

use crate::api::ApiClient;
use crate::audio::TerminalBell;
use crate::config::Config;
use crate::error::Result;
use crate::events::EventHandler;
use crate::state::{Action, FeedSource, Store};
use crate::ui::Ui;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tokio::sync::mpsc;

/// The main application.
pub struct App {
    /// Terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application store.
    store: Store,
    /// Event handler.
    event_handler: EventHandler,
    /// Action sender handed to spawned fetch tasks.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// API client.
    api_client: Option<ApiClient>,
    /// Sequence number of the last issued news fetch.
    news_seq: u64,
    /// Sequence number of the last issued mood fetch.
    mood_seq: u64,
    /// Configuration.
    config: Config,
}

impl App {
    /// Create a new application.
    pub fn new(config: Config) -> Result<Self> {
        // Set up terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        // Create action channel
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        // Create store
        let store = Store::new(&config.ui, action_tx.clone(), Box::new(TerminalBell));

        // Create event handler
        let event_handler = EventHandler::new(config.keybindings.clone());

        // Try to create API client
        let api_client = match ApiClient::new(&config.api) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::warn!("Failed to create API client: {}", e);
                None
            }
        };

        Ok(Self {
            terminal,
            store,
            event_handler,
            action_tx,
            action_rx,
            api_client,
            news_seq: 0,
            mood_seq: 0,
            config,
        })
    }

    /// Run the application event loop.
    pub async fn run(&mut self) -> Result<()> {
        // Independent poll timers; the first tick of each fires
        // immediately, so both feeds load on startup.
        let mut news_timer = tokio::time::interval(self.config.ui.news_poll_interval());
        let mut mood_timer = tokio::time::interval(self.config.ui.mood_poll_interval());

        // Main event loop
        loop {
            // Expire card flashes before drawing
            self.store.reduce(Action::Tick);

            // Render UI
            self.terminal.draw(|frame| {
                Ui::render(frame, &self.store);
            })?;

            // Handle timers, events, and fetch results
            tokio::select! {
                _ = news_timer.tick() => {
                    self.spawn_news_fetch();
                }

                _ = mood_timer.tick() => {
                    self.spawn_mood_fetch();
                }

                // Handle terminal events
                result = self.event_handler.next() => {
                    if let Some(action) = result? {
                        self.handle_action(action);
                    }
                }

                // Handle actions from spawned tasks
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                }
            }

            // Check if we should quit
            if self.store.app.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle an action.
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::RefreshNews => self.spawn_news_fetch(),
            Action::RefreshMood => self.spawn_mood_fetch(),
            other => self.store.reduce(other),
        }
    }

    /// Spawn a news fetch tagged with the next sequence number.
    ///
    /// The task reports back through the action channel; a response that
    /// completes after a newer one has been applied is discarded by the
    /// reducer, so slow responses can never overwrite fresh state.
    fn spawn_news_fetch(&mut self) {
        let Some(client) = self.api_client.clone() else {
            return;
        };
        self.news_seq += 1;
        let seq = self.news_seq;
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            match client.fetch_news().await {
                Ok(items) => {
                    let _ = tx.send(Action::NewsFetched { seq, items });
                }
                Err(e) => {
                    tracing::debug!("news poll failed: {e}");
                    let _ = tx.send(Action::FetchFailed(FeedSource::News));
                }
            }
        });
    }

    /// Spawn a mood fetch tagged with the next sequence number.
    fn spawn_mood_fetch(&mut self) {
        let Some(client) = self.api_client.clone() else {
            return;
        };
        self.mood_seq += 1;
        let seq = self.mood_seq;
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            match client.fetch_mood().await {
                Ok(mood) => {
                    let _ = tx.send(Action::MoodFetched { seq, mood });
                }
                Err(e) => {
                    tracing::debug!("mood poll failed: {e}");
                    let _ = tx.send(Action::FetchFailed(FeedSource::Mood));
                }
            }
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}
