use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use super::scoring::ANSWER_COUNT;

/// Lives a fresh session starts with.
pub const START_LIVES: i32 = 3;

/// Total screen slots: intro, greeting, rules, ten rounds, results.
pub const SCREEN_SLOTS: usize = ANSWER_COUNT + 4;

const FIRST_ROUND_SLOT: usize = 3;
const RESULTS_SLOT: usize = SCREEN_SLOTS - 1;

/// How a resolved round went, for the per-round stats strip.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "lowercase")]
pub enum RoundOutcome {
    /// Correct, with a recorded time of 20 seconds or more.
    Fast,
    /// Correct, with a recorded time of 10 seconds or less.
    Slow,
    /// Correct, in between.
    Success,
    /// Wrong answer or timeout.
    Fail,
}

impl RoundOutcome {
    /// Classifies a correct answer by the elapsed seconds recorded for it.
    #[must_use]
    pub const fn classify(elapsed_secs: u32) -> Self {
        if elapsed_secs >= super::scoring::FAST_THRESHOLD_SECS {
            Self::Fast
        } else if elapsed_secs <= super::scoring::SLOW_THRESHOLD_SECS {
            Self::Slow
        } else {
            Self::Success
        }
    }
}

/// Whether a finished session counts as a win.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "lowercase")]
pub enum SessionVerdict {
    Won,
    Lost,
}

/// Index-addressed screen of the fixed session sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ScreenSlot {
    Intro,
    Greeting,
    Rules,
    /// Zero-based round number in `0..10`.
    Round(usize),
    Results,
}

impl ScreenSlot {
    /// Maps a slot index in `[0, 13]` to its screen.
    ///
    /// # Panics
    ///
    /// An index outside the sequence is a dispatcher defect, not a runtime
    /// condition, and panics.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Intro,
            1 => Self::Greeting,
            2 => Self::Rules,
            FIRST_ROUND_SLOT..RESULTS_SLOT => Self::Round(index - FIRST_ROUND_SLOT),
            RESULTS_SLOT => Self::Results,
            _ => panic!("screen slot index out of range: {index}"),
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Intro => 0,
            Self::Greeting => 1,
            Self::Rules => 2,
            Self::Round(round) => FIRST_ROUND_SLOT + round,
            Self::Results => RESULTS_SLOT,
        }
    }
}

/// The single mutable aggregate of an in-progress game.
///
/// Invariants upheld by the mutators:
///
/// - `current_slot` stays in `[0, 13]`
/// - `answers`, `elapsed` and `outcomes` grow in lockstep, one entry per
///   resolved round, never beyond ten
/// - `lives` only ever decreases
/// - `player_name`, once set, never changes
#[derive(Debug, Clone)]
pub struct SessionState {
    lives: i32,
    current_slot: usize,
    answers: ArrayVec<bool, ANSWER_COUNT>,
    elapsed: ArrayVec<u32, ANSWER_COUNT>,
    outcomes: ArrayVec<RoundOutcome, ANSWER_COUNT>,
    player_name: String,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lives: START_LIVES,
            current_slot: 0,
            answers: ArrayVec::new(),
            elapsed: ArrayVec::new(),
            outcomes: ArrayVec::new(),
            player_name: String::new(),
        }
    }

    #[must_use]
    pub const fn lives(&self) -> i32 {
        self.lives
    }

    #[must_use]
    pub fn current_screen(&self) -> ScreenSlot {
        ScreenSlot::from_index(self.current_slot)
    }

    #[must_use]
    pub fn answers(&self) -> &[bool] {
        &self.answers
    }

    #[must_use]
    pub fn elapsed(&self) -> &[u32] {
        &self.elapsed
    }

    #[must_use]
    pub fn outcomes(&self) -> &[RoundOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Number of rounds already resolved (answered or timed out).
    #[must_use]
    pub fn resolved_rounds(&self) -> usize {
        self.outcomes.len()
    }

    /// Records a correct answer and steps to the next slot.
    pub(super) fn record_correct(&mut self, elapsed_secs: u32) {
        self.answers.push(true);
        self.elapsed.push(elapsed_secs);
        self.outcomes.push(RoundOutcome::classify(elapsed_secs));
        self.advance();
    }

    /// Records a wrong answer or timeout, costing a life.
    ///
    /// Once lives go negative the session jumps straight to the results
    /// slot; lives are never allowed to recover.
    pub(super) fn record_failure(&mut self, elapsed_secs: u32) {
        self.answers.push(false);
        self.elapsed.push(elapsed_secs);
        self.outcomes.push(RoundOutcome::Fail);
        self.lives -= 1;
        if self.lives < 0 {
            self.current_slot = RESULTS_SLOT;
        } else {
            self.advance();
        }
    }

    /// Stores the player name. Only the first non-empty submission sticks.
    pub(super) fn set_player_name(&mut self, name: &str) {
        if self.player_name.is_empty() {
            self.player_name.push_str(name);
        }
    }

    /// Steps to the next screen slot.
    pub(super) fn advance(&mut self) {
        debug_assert!(self.current_slot < RESULTS_SLOT);
        self.current_slot += 1;
    }

    /// The verdict for a session sitting on the results slot.
    #[must_use]
    pub fn verdict(&self) -> SessionVerdict {
        if self.lives < 0 {
            SessionVerdict::Lost
        } else {
            SessionVerdict::Won
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_defaults() {
        let session = SessionState::new();
        assert_eq!(session.lives(), START_LIVES);
        assert_eq!(session.current_screen(), ScreenSlot::Intro);
        assert!(session.answers().is_empty());
        assert!(session.elapsed().is_empty());
        assert!(session.outcomes().is_empty());
        assert_eq!(session.player_name(), "");
    }

    #[test]
    fn slot_round_trip() {
        for index in 0..SCREEN_SLOTS {
            assert_eq!(ScreenSlot::from_index(index).index(), index);
        }
        assert_eq!(ScreenSlot::from_index(3), ScreenSlot::Round(0));
        assert_eq!(ScreenSlot::from_index(12), ScreenSlot::Round(9));
        assert_eq!(ScreenSlot::from_index(13), ScreenSlot::Results);
    }

    #[test]
    #[should_panic(expected = "screen slot index out of range")]
    fn out_of_range_slot_panics() {
        let _ = ScreenSlot::from_index(SCREEN_SLOTS);
    }

    #[test]
    fn outcome_classification_thresholds() {
        assert_eq!(RoundOutcome::classify(20), RoundOutcome::Fast);
        assert_eq!(RoundOutcome::classify(25), RoundOutcome::Fast);
        assert_eq!(RoundOutcome::classify(19), RoundOutcome::Success);
        assert_eq!(RoundOutcome::classify(11), RoundOutcome::Success);
        assert_eq!(RoundOutcome::classify(10), RoundOutcome::Slow);
        assert_eq!(RoundOutcome::classify(0), RoundOutcome::Slow);
    }

    #[test]
    fn outcome_tags_serialize_lowercase() {
        let outcomes = [
            RoundOutcome::Fast,
            RoundOutcome::Slow,
            RoundOutcome::Success,
            RoundOutcome::Fail,
        ];
        let json = serde_json::to_string(&outcomes).unwrap();
        assert_eq!(json, r#"["fast","slow","success","fail"]"#);

        let parsed: Vec<RoundOutcome> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, outcomes);

        let verdict: SessionVerdict = serde_json::from_str(r#""lost""#).unwrap();
        assert_eq!(verdict, SessionVerdict::Lost);
    }

    #[test]
    fn player_name_is_write_once() {
        let mut session = SessionState::new();
        session.set_player_name("Ada");
        session.set_player_name("Grace");
        assert_eq!(session.player_name(), "Ada");
    }

    #[test]
    fn lives_below_zero_jump_to_results() {
        let mut session = SessionState::new();
        // Skip to the first round.
        session.advance();
        session.advance();
        session.advance();

        for _ in 0..3 {
            session.record_failure(12);
        }
        assert_eq!(session.lives(), 0);
        assert!(matches!(session.current_screen(), ScreenSlot::Round(_)));

        session.record_failure(12);
        assert_eq!(session.lives(), -1);
        assert_eq!(session.current_screen(), ScreenSlot::Results);
        assert_eq!(session.verdict(), SessionVerdict::Lost);
    }
}
