use crate::{InvalidTimerValue, TimerError};

/// Seconds a player gets for every round.
pub const ROUND_SECONDS: u32 = 30;

/// Remaining seconds at which the countdown starts signalling low time
/// (a presentation hint, not a transition).
pub const LOW_TIME_SECS: u32 = 5;

/// What one second of countdown produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TimerTick {
    /// Still counting; the payload is the remaining seconds.
    Counting(u32),
    /// Still counting, but at or below [`LOW_TIME_SECS`].
    LowTime(u32),
    /// The countdown reached zero. Signalled exactly once; the timer stops.
    Expired,
}

impl TimerTick {
    /// Remaining seconds after this tick (0 for [`Expired`](Self::Expired)).
    #[must_use]
    pub const fn remaining(self) -> u32 {
        match self {
            Self::Counting(remaining) | Self::LowTime(remaining) => remaining,
            Self::Expired => 0,
        }
    }
}

/// Single countdown for the active round.
///
/// The dispatcher owns at most one live timer at a time: it cancels (and
/// drops) the previous round's handle before arming a fresh one, so
/// [`start`](Self::start) on a fresh timer cannot fail.
#[derive(Debug, Clone)]
pub struct RoundTimer {
    remaining: u32,
    running: bool,
    expired: bool,
}

impl RoundTimer {
    /// Creates a stopped timer with the standard round length.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_secs(ROUND_SECONDS)
    }

    /// Creates a stopped timer with a custom round length.
    #[must_use]
    pub const fn with_secs(secs: u32) -> Self {
        Self {
            remaining: secs,
            running: false,
            expired: false,
        }
    }

    /// Validated entry point for externally supplied round lengths.
    pub fn try_from_secs(secs: i64) -> Result<Self, InvalidTimerValue> {
        let secs = u32::try_from(secs).map_err(|_| InvalidTimerValue { value: secs })?;
        Ok(Self::with_secs(secs))
    }

    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub const fn has_expired(&self) -> bool {
        self.expired
    }

    /// Begins the countdown.
    pub fn start(&mut self) -> Result<(), TimerError> {
        if self.running {
            return Err(TimerError::AlreadyActive);
        }
        self.running = true;
        Ok(())
    }

    /// Advances the countdown by one second.
    ///
    /// Returns `None` when the timer is not running (never started,
    /// cancelled, or already expired).
    pub fn tick(&mut self) -> Option<TimerTick> {
        if !self.running {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            self.expired = true;
            return Some(TimerTick::Expired);
        }
        if self.remaining <= LOW_TIME_SECS {
            return Some(TimerTick::LowTime(self.remaining));
        }
        Some(TimerTick::Counting(self.remaining))
    }

    /// Stops the countdown without expiring it.
    ///
    /// Cancelling a timer that already expired is a no-op.
    pub fn cancel(&mut self) {
        self.running = false;
    }
}

impl Default for RoundTimer {
    fn default() -> Self {
        Self::new()
    }
}
