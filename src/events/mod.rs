//! Event handling for coindeck.
//!
//! Input events are polled from the terminal and mapped to actions; the
//! poll timers live in the app loop, not here.

mod handler;
mod input;

pub use handler::EventHandler;
pub use input::{InputEvent, Key, Modifiers};
