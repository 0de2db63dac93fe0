//! Data types shared across the crate.

mod record;
mod result;

pub use record::QuizRecord;
pub use result::{Outcome, SessionReport, SessionResult};
