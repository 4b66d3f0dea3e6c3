use crate::{
    MalformedSubmission,
    core::{evaluate, RoundDescriptor, Submission},
};

use super::{
    scoring::compute_score,
    session::{ScreenSlot, SessionState},
    timer::{RoundTimer, TimerTick, LOW_TIME_SECS, ROUND_SECONDS},
};

/// External input driving the session state machine.
#[derive(Debug, Clone, PartialEq, derive_more::IsVariant)]
pub enum GameEvent {
    /// Continue past the intro or greeting screen.
    Advance,
    /// A submission for the current round, already evaluated.
    Answered { correct: bool, elapsed_secs: u32 },
    /// The round timer reached zero without a submission.
    TimedOut,
    /// The player confirmed a name on the rules screen.
    NameSubmitted { name: String },
    /// Back navigation: a full, destructive session restart.
    NavigateBack,
    /// The round catalog finished loading.
    DataLoaded { catalog: Vec<RoundDescriptor> },
}

/// Read-only description of the screen to present, handed to the view layer.
#[derive(Debug)]
pub struct Presentation<'a> {
    pub slot: ScreenSlot,
    /// Round data when `slot` is a round.
    pub round: Option<&'a RoundDescriptor>,
    /// Whether the catalog has arrived (the intro shows a loading hint
    /// until it has).
    pub catalog_loaded: bool,
    /// Countdown display for timed screens.
    pub remaining_secs: Option<u32>,
    /// Low-time presentation hint (blink the countdown).
    pub low_time: bool,
    pub session: &'a SessionState,
}

/// Owns the session state and applies every transition.
///
/// The dispatcher is the only mutation path: views translate input into
/// [`GameEvent`]s (or call [`submit`](Self::submit)), and the embedding app
/// drives the countdown through [`tick`](Self::tick). The round catalog is
/// consumed once and retained across restarts; the timer handle exists only
/// for the lifetime of the active round.
#[derive(Debug)]
pub struct SessionDispatcher {
    session: SessionState,
    catalog: Option<Vec<RoundDescriptor>>,
    timer: Option<RoundTimer>,
    round_secs: u32,
}

impl SessionDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::with_round_secs(ROUND_SECONDS)
    }

    /// Creates a dispatcher with a custom round length. Callers validate
    /// externally supplied values through [`RoundTimer::try_from_secs`]
    /// first.
    #[must_use]
    pub fn with_round_secs(round_secs: u32) -> Self {
        Self {
            session: SessionState::new(),
            catalog: None,
            timer: None,
            round_secs,
        }
    }

    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    #[must_use]
    pub fn catalog_loaded(&self) -> bool {
        self.catalog.is_some()
    }

    /// The descriptor for the round currently on screen, if any.
    #[must_use]
    pub fn current_round(&self) -> Option<&RoundDescriptor> {
        let ScreenSlot::Round(round) = self.session.current_screen() else {
            return None;
        };
        self.catalog.as_ref().and_then(|catalog| catalog.get(round))
    }

    /// Score of the session as it stands (`None` while unscorable).
    #[must_use]
    pub fn score(&self) -> Option<i32> {
        compute_score(
            self.session.answers(),
            self.session.elapsed(),
            self.session.lives(),
        )
    }

    /// Evaluates a submission against the current round and applies the
    /// resulting transition.
    ///
    /// A malformed submission is rejected before any state is touched. The
    /// recorded time is the countdown's remaining display value, matching
    /// what the player saw when answering. Outside a round this is a no-op.
    pub fn submit(&mut self, submission: &Submission) -> Result<(), MalformedSubmission> {
        let Some(round) = self.current_round() else {
            return Ok(());
        };
        let correct = evaluate(round, submission)?;
        let elapsed_secs = self.timer.as_ref().map_or(0, RoundTimer::remaining);
        self.dispatch(GameEvent::Answered {
            correct,
            elapsed_secs,
        });
        Ok(())
    }

    /// Applies one event to the session.
    ///
    /// A transition that leaves the current screen replaces the timer handle
    /// wholesale (the old countdown is dropped before a fresh one is armed),
    /// so a racing tick can never resolve the same round twice. Events that
    /// make no sense for the current screen are dropped without mutation,
    /// leaving a running countdown untouched.
    pub fn dispatch(&mut self, event: GameEvent) {
        let before = self.session.current_screen();

        match event {
            GameEvent::Advance => match self.session.current_screen() {
                ScreenSlot::Intro if self.catalog_loaded() => self.session.advance(),
                ScreenSlot::Greeting => self.session.advance(),
                _ => {}
            },
            GameEvent::Answered {
                correct,
                elapsed_secs,
            } => {
                if self.session.current_screen().is_round() {
                    if correct {
                        self.session.record_correct(elapsed_secs);
                    } else {
                        self.session.record_failure(elapsed_secs);
                    }
                }
            }
            GameEvent::TimedOut => {
                if self.session.current_screen().is_round() {
                    // A timeout records the maximum timer value.
                    self.session.record_failure(self.round_secs);
                }
            }
            GameEvent::NameSubmitted { name } => {
                if self.session.current_screen().is_rules() && !name.is_empty() {
                    self.session.set_player_name(&name);
                    self.session.advance();
                }
            }
            GameEvent::NavigateBack => self.restart(),
            GameEvent::DataLoaded { catalog } => self.catalog = Some(catalog),
        }

        if self.session.current_screen() != before {
            self.present();
        }
    }

    /// Drives the countdown by one second of wall time.
    ///
    /// On expiry the timeout transition is applied before returning, so the
    /// caller only ever observes a consistent session.
    pub fn tick(&mut self) -> Option<TimerTick> {
        let tick = self.timer.as_mut()?.tick()?;
        if tick.is_expired() {
            self.dispatch(GameEvent::TimedOut);
        }
        Some(tick)
    }

    /// Reinitializes the session to its defaults. The loaded catalog is
    /// retained.
    pub fn restart(&mut self) {
        self.session = SessionState::new();
        self.timer = None;
    }

    /// The current screen, with everything the view layer needs to render
    /// it.
    #[must_use]
    pub fn presentation(&self) -> Presentation<'_> {
        let remaining_secs = self
            .timer
            .as_ref()
            .filter(|timer| timer.is_running())
            .map(RoundTimer::remaining);
        Presentation {
            slot: self.session.current_screen(),
            round: self.current_round(),
            catalog_loaded: self.catalog_loaded(),
            remaining_secs,
            low_time: remaining_secs.is_some_and(|secs| secs <= LOW_TIME_SECS),
            session: &self.session,
        }
    }

    /// Recomputes the slot to present and arms a fresh timer for timed
    /// rounds; untimed screens drop the handle.
    fn present(&mut self) {
        if self.session.current_screen().is_round() {
            let mut timer = RoundTimer::with_secs(self.round_secs);
            timer
                .start()
                .expect("a freshly created timer cannot be active");
            self.timer = Some(timer);
        } else {
            self.timer = None;
        }
    }
}

impl Default for SessionDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
