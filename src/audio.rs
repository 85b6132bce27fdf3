//! Audio cue capability.
//!
//! Playback is best-effort everywhere: a failing sink is logged and
//! swallowed, never surfaced.

use crate::error::Result;
use std::io::Write;

/// Named audio cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Confirmation chirp when audio alerts are switched on.
    Ping,
    /// High-impact news alert.
    Alert,
}

/// Something that can play a cue.
#[cfg_attr(test, mockall::automock)]
pub trait AudioSink: Send {
    /// Play a cue. Failure is non-fatal to the caller.
    fn play(&mut self, cue: Cue) -> Result<()>;
}

/// Sink that rings the terminal bell. The terminal may map this to a
/// sound, a visual flash, or nothing at all.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl AudioSink for TerminalBell {
    fn play(&mut self, _cue: Cue) -> Result<()> {
        let mut stdout = std::io::stdout();
        stdout.write_all(b"\x07")?;
        stdout.flush()?;
        Ok(())
    }
}

/// Sink that discards every cue. Used when audio is unavailable.
#[derive(Debug, Default)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn play(&mut self, _cue: Cue) -> Result<()> {
        Ok(())
    }
}
