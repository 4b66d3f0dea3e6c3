use super::session::RoundOutcome;

/// Rounds a session must resolve before it is scorable.
pub const ANSWER_COUNT: usize = 10;

/// Points per correct answer.
pub const CORRECT_POINTS: i32 = 100;
/// Bonus for an answer recorded at [`FAST_THRESHOLD_SECS`] or above.
pub const TIME_BONUS: i32 = 50;
/// Penalty for an answer recorded strictly below [`SLOW_THRESHOLD_SECS`].
pub const TIME_PENALTY: i32 = 50;
/// Bonus per remaining life.
pub const LIFE_BONUS: i32 = 50;

/// Time threshold (seconds) for the fast bonus.
pub const FAST_THRESHOLD_SECS: u32 = 20;
/// Time threshold (seconds) for the slow penalty.
///
/// Note the deliberate asymmetry with [`RoundOutcome::classify`]: the
/// penalty applies strictly below 10, the `Slow` tag at 10 and below.
pub const SLOW_THRESHOLD_SECS: u32 = 10;

/// Converts a resolved session into a point total.
///
/// Returns `None` (the "invalid" signal) when lives went negative or fewer
/// than the full ten rounds were resolved; such a session has no winning
/// score. Pure: no side effects, deterministic.
#[must_use]
pub fn compute_score(answers: &[bool], elapsed: &[u32], lives: i32) -> Option<i32> {
    if lives < 0 || answers.len() != ANSWER_COUNT {
        return None;
    }

    let answer_points: i32 = answers
        .iter()
        .filter(|answer| **answer)
        .map(|_| CORRECT_POINTS)
        .sum();

    let time_points: i32 = elapsed
        .iter()
        .map(|&secs| {
            if secs >= FAST_THRESHOLD_SECS {
                TIME_BONUS
            } else if secs < SLOW_THRESHOLD_SECS {
                -TIME_PENALTY
            } else {
                0
            }
        })
        .sum();

    Some(answer_points + time_points + lives * LIFE_BONUS)
}

/// Per-component totals for the results table.
///
/// Computed from the outcome tags the way the results screen presents them:
/// correct answers, fast bonuses, slow penalties, and the lives bonus, each
/// with its own row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub correct_count: usize,
    pub fast_count: usize,
    pub slow_count: usize,
    pub lives: i32,
}

impl ScoreBreakdown {
    #[must_use]
    pub fn from_outcomes(outcomes: &[RoundOutcome], lives: i32) -> Self {
        let correct_count = outcomes.iter().filter(|o| !o.is_fail()).count();
        let fast_count = outcomes.iter().filter(|o| o.is_fast()).count();
        let slow_count = outcomes.iter().filter(|o| o.is_slow()).count();
        Self {
            correct_count,
            fast_count,
            slow_count,
            lives,
        }
    }

    #[must_use]
    pub fn answer_points(&self) -> i32 {
        i32::try_from(self.correct_count).unwrap_or(i32::MAX) * CORRECT_POINTS
    }

    #[must_use]
    pub fn fast_points(&self) -> i32 {
        i32::try_from(self.fast_count).unwrap_or(i32::MAX) * TIME_BONUS
    }

    #[must_use]
    pub fn slow_points(&self) -> i32 {
        -(i32::try_from(self.slow_count).unwrap_or(i32::MAX) * TIME_PENALTY)
    }

    #[must_use]
    pub fn life_points(&self) -> i32 {
        self.lives * LIFE_BONUS
    }

    #[must_use]
    pub fn total(&self) -> i32 {
        self.answer_points() + self.fast_points() + self.slow_points() + self.life_points()
    }
}
