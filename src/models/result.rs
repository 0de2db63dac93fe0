//! Session outcomes and score accounting.

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every question was answered before the deadline.
    Completed,
    /// The deadline fired while questions remained.
    TimedOut,
    /// The input stream closed mid-session.
    AbortedOnInputError,
    /// The user quit at the confirmation prompt; no question was shown.
    Declined,
}

/// Final score of one session.
///
/// Invariant: `correct + wrong + unattempted` equals the number of records
/// the session was constructed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionResult {
    pub correct: usize,
    pub wrong: usize,
    pub unattempted: usize,
}

impl SessionResult {
    /// Build a result from the counts the worker accumulated, deriving
    /// `unattempted` from the total.
    pub fn from_counts(correct: usize, wrong: usize, total: usize) -> Self {
        Self {
            correct,
            wrong,
            unattempted: total - correct - wrong,
        }
    }

    pub fn total(&self) -> usize {
        self.correct + self.wrong + self.unattempted
    }
}

/// What a finished session hands back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub outcome: Outcome,
    pub score: SessionResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_counts_derives_unattempted() {
        let result = SessionResult::from_counts(3, 1, 10);
        assert_eq!(result.correct, 3);
        assert_eq!(result.wrong, 1);
        assert_eq!(result.unattempted, 6);
        assert_eq!(result.total(), 10);
    }

    #[test]
    fn from_counts_with_nothing_attempted() {
        let result = SessionResult::from_counts(0, 0, 4);
        assert_eq!(result.unattempted, 4);
        assert_eq!(result.total(), 4);
    }
}
