use crossterm::event::KeyEvent;
use pixelhunt_engine::{Presentation, ScreenSlot, Submission};
use ratatui::Frame;

use crate::command::play::app::ResultsPanel;

pub(super) use self::{
    greeting::GreetingScreen, intro::IntroScreen, results::ResultsScreen, round::RoundScreen,
    rules::RulesScreen,
};

mod greeting;
mod intro;
mod results;
mod round;
mod rules;

/// What the player asked for, translated from raw input.
///
/// Views never touch the session; the app maps these onto dispatcher events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ViewAction {
    /// Continue past the current untimed screen.
    Continue,
    /// Confirm the player name on the rules screen.
    SubmitName(String),
    /// Answer the current round.
    Submit(Submission),
    /// Back navigation: destructive session restart.
    Back,
    /// Leave the program.
    Quit,
}

/// The active screen's input state, rebuilt whenever the dispatcher moves to
/// a different slot.
#[derive(Debug)]
pub(super) enum ScreenView {
    Intro(IntroScreen),
    Greeting(GreetingScreen),
    Rules(RulesScreen),
    Round(RoundScreen),
    Results(ResultsScreen),
}

impl ScreenView {
    pub(super) fn for_slot(slot: ScreenSlot) -> Self {
        match slot {
            ScreenSlot::Intro => Self::Intro(IntroScreen),
            ScreenSlot::Greeting => Self::Greeting(GreetingScreen),
            ScreenSlot::Rules => Self::Rules(RulesScreen::new()),
            ScreenSlot::Round(_) => Self::Round(RoundScreen::new()),
            ScreenSlot::Results => Self::Results(ResultsScreen),
        }
    }

    pub(super) fn handle_key(
        &mut self,
        key: KeyEvent,
        presentation: &Presentation<'_>,
    ) -> Option<ViewAction> {
        match self {
            Self::Intro(screen) => screen.handle_key(key),
            Self::Greeting(screen) => screen.handle_key(key),
            Self::Rules(screen) => screen.handle_key(key),
            Self::Round(screen) => screen.handle_key(key, presentation),
            Self::Results(screen) => screen.handle_key(key),
        }
    }

    pub(super) fn draw(
        &self,
        frame: &mut Frame<'_>,
        presentation: &Presentation<'_>,
        results: Option<&ResultsPanel>,
    ) {
        match self {
            Self::Intro(screen) => screen.draw(frame, presentation),
            Self::Greeting(screen) => screen.draw(frame),
            Self::Rules(screen) => screen.draw(frame),
            Self::Round(screen) => screen.draw(frame, presentation),
            Self::Results(screen) => screen.draw(frame, presentation, results),
        }
    }
}
