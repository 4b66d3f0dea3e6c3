pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("submission shape does not match the round kind")]
pub struct MalformedSubmission;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum RoundShapeError {
    #[display("{kind} round requires {expected} images, got {actual}")]
    ImageCount {
        kind: core::RoundKind,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("timer seconds must be a non-negative number, got {value}")]
pub struct InvalidTimerValue {
    pub value: i64,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum TimerError {
    #[display("a timer is already active for this session")]
    AlreadyActive,
}
