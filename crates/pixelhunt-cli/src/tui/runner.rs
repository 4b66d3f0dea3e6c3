use std::{io, time::Duration};

use crate::tui::{
    app::App,
    event_loop::{EventLoop, TuiEvent},
};

const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// TUI runner: owns the event loop and executes an [`App`] under the
/// raw-mode terminal provided by `ratatui::run`.
#[derive(Debug)]
pub struct Tui {
    events: EventLoop,
}

impl Tui {
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: EventLoop::new(DEFAULT_TICK_INTERVAL),
        }
    }

    pub fn set_tick_interval(&mut self, interval: Duration) {
        self.events.set_tick_interval(interval);
    }

    /// Runs `app` until it asks to exit.
    ///
    /// 1. Calls `app.init()` once
    /// 2. `Tick` -> `app.update()`, `Render` -> `app.draw()`,
    ///    input -> `app.handle_event()`
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Tick => app.update(&mut self),
                    TuiEvent::Render => {
                        terminal.draw(|frame| app.draw(frame))?;
                    }
                    TuiEvent::Crossterm(event) => app.handle_event(&mut self, event),
                }
            }
            Ok(())
        })
    }
}

impl Default for Tui {
    fn default() -> Self {
        Self::new()
    }
}
