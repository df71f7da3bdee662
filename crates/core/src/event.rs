//! Terminal input for the arbor event loop.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent};

/// Input the event loop reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// New terminal size (columns, rows)
    Resize(u16, u16),
    /// No input within the tick interval; background refresh results are
    /// collected on ticks.
    Tick,
}

impl Event {
    /// Map a raw crossterm event. Key releases and repeats are dropped.
    pub fn from_terminal(raw: CrosstermEvent) -> Option<Self> {
        match raw {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
            CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
            CrosstermEvent::Resize(cols, rows) => Some(Event::Resize(cols, rows)),
            _ => None,
        }
    }
}

/// Blocking reader with a tick timeout.
#[derive(Debug, Clone, Copy)]
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Wait up to one tick for input. Ignored terminal events count as a tick.
    pub fn next(&self) -> Result<Event> {
        if !event::poll(self.tick_rate)? {
            return Ok(Event::Tick);
        }
        Ok(Event::from_terminal(event::read()?).unwrap_or(Event::Tick))
    }
}
