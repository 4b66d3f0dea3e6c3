use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event;

/// Events the loop hands to the application.
#[derive(Debug, Clone, derive_more::From)]
pub(super) enum TuiEvent {
    /// Time-driven update (the countdown granularity).
    Tick,
    /// Redraw timing; emitted after state may have changed.
    Render,
    /// Terminal input.
    Crossterm(event::Event),
}

/// Single-threaded, cooperative event source.
///
/// One pending tick and one pending input event at a time: `next()` blocks
/// until the tick interval elapses or input arrives, and interleaves renders
/// whenever state may have changed. There is no second control path that
/// could run a transition concurrently.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Duration,
    last_tick: Instant,
    dirty: bool,
}

impl EventLoop {
    pub(super) fn new(tick_interval: Duration) -> Self {
        Self {
            tick_interval,
            last_tick: Instant::now(),
            // The first frame must render.
            dirty: true,
        }
    }

    pub(super) fn set_tick_interval(&mut self, tick_interval: Duration) {
        self.tick_interval = tick_interval;
    }

    /// Returns the next event, blocking until one is due.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if now.duration_since(self.last_tick) >= self.tick_interval {
                self.last_tick = now;
                self.dirty = true;
                return Ok(TuiEvent::Tick);
            }

            if self.dirty {
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }

            let next_tick_at = self.last_tick + self.tick_interval;
            let timeout = next_tick_at.saturating_duration_since(now);
            if !event::poll(timeout)? {
                continue;
            }

            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }
}
