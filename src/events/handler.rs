//! Event handler for processing input events.

use crate::config::KeyBindings;
use crate::error::Result;
use crate::state::Action;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Handles input events and produces actions.
pub struct EventHandler {
    /// Key bindings.
    keybindings: KeyBindings,
}

impl EventHandler {
    /// Create a new event handler with the given key bindings.
    pub fn new(keybindings: KeyBindings) -> Self {
        Self { keybindings }
    }

    /// Get the next action from user input.
    ///
    /// Returns `Ok(None)` when no actionable input arrived within the
    /// poll window; the app loop uses that as its redraw heartbeat.
    pub async fn next(&mut self) -> Result<Option<Action>> {
        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            match event {
                CrosstermEvent::Key(key) => {
                    if let Some(action) = self.handle_key(key) {
                        return Ok(Some(action));
                    }
                }
                CrosstermEvent::Mouse(mouse) => {
                    if let Some(action) = self.handle_mouse(mouse) {
                        return Ok(Some(action));
                    }
                }
                CrosstermEvent::Resize(_, _) => {
                    // Terminal will automatically redraw
                }
                _ => {}
            }
        }
        Ok(None)
    }

    /// Handle a key event and return an optional action.
    fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        // Only process key press events
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let input = super::InputEvent::from(key);

        if input.matches(&self.keybindings.quit) {
            return Some(Action::Quit);
        }
        if input.matches(&self.keybindings.help) {
            return Some(Action::ToggleHelp);
        }
        if input.matches(&self.keybindings.audio) {
            return Some(Action::ToggleAudio);
        }
        if input.matches(&self.keybindings.refresh) {
            return Some(Action::RefreshNews);
        }
        if input.matches(&self.keybindings.top) || key.code == KeyCode::Home {
            return Some(Action::GoToTop);
        }
        if input.matches(&self.keybindings.up) || key.code == KeyCode::Up {
            return Some(Action::ScrollUp);
        }
        if input.matches(&self.keybindings.down) || key.code == KeyCode::Down {
            return Some(Action::ScrollDown);
        }

        None
    }

    /// Handle a mouse event and return an optional action.
    fn handle_mouse(&self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            _ => None,
        }
    }
}
