use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

use crate::error::Result;

/// Input events the main loop reacts to.
#[derive(Debug)]
pub enum Event {
    /// A key press event.
    Key(KeyEvent),
    /// Terminal resize; the next draw picks up the new size.
    Resize(u16, u16),
}

/// Blocking reader over crossterm events.
///
/// One `next()` call per loop iteration. There is no tick and no background
/// thread; between key presses the process sleeps in the OS read.
pub struct EventReader;

impl Default for EventReader {
    fn default() -> Self {
        Self::new()
    }
}

impl EventReader {
    pub fn new() -> Self {
        Self
    }

    /// Block until the next key press or resize event.
    ///
    /// Key release/repeat and mouse events are skipped.
    pub fn next(&mut self) -> Result<Event> {
        loop {
            match event::read()? {
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(Event::Key(key));
                }
                CrosstermEvent::Resize(w, h) => return Ok(Event::Resize(w, h)),
                _ => {}
            }
        }
    }
}
