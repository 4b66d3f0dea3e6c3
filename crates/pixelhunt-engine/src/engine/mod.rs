//! Session state machine and the pieces that drive it.
//!
//! - [`SessionState`] - the mutable record of one play-through
//! - [`SessionDispatcher`] - owns the state, applies every transition, and
//!   decides which screen to present next
//! - [`RoundTimer`] - the per-round countdown that forces timeout transitions
//! - [`compute_score`] / [`ScoreBreakdown`] - point totals for a resolved
//!   session
//!
//! All mutation happens on the single dispatcher control path; views only
//! ever see the read-only [`Presentation`] it hands out.

pub use self::{dispatcher::*, scoring::*, session::*, timer::*};

mod dispatcher;
mod scoring;
mod session;
mod timer;
