use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::Tui;

/// Application run by [`Tui::run`](crate::tui::Tui::run).
pub trait App {
    /// Called once before the loop starts; configure the tick interval here.
    fn init(&mut self, tui: &mut Tui);

    /// Whether the loop should stop.
    fn should_exit(&self) -> bool;

    /// Handles one terminal event (key input, resize, ...).
    fn handle_event(&mut self, tui: &mut Tui, event: Event);

    /// Advances time-driven state; called once per tick interval.
    fn update(&mut self, tui: &mut Tui);

    /// Renders the current state.
    fn draw(&self, frame: &mut Frame);
}
