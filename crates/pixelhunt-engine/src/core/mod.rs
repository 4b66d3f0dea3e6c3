pub use self::{classification::*, round::*, submission::*};

pub(crate) mod classification;
pub(crate) mod round;
pub(crate) mod submission;
