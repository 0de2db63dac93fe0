//! # timed-quiz
//!
//! A terminal quiz runner that races the user against a wall-clock deadline.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use timed_quiz::{ParsePolicy, Quiz};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), timed_quiz::LoadError> {
//!     // Load questions from a CSV file (header row, then question,answer).
//!     let quiz = Quiz::from_csv("questions.csv", ParsePolicy::default())?;
//!
//!     // Run it with a ten second budget.
//!     let report = quiz.run(Duration::from_secs(10)).await;
//!     println!("{} correct", report.score.correct);
//!
//!     Ok(())
//! }
//! ```

mod data;
mod models;
mod session;
pub mod shuffle;

use std::path::Path;
use std::time::Duration;

pub use data::{LoadError, ParsePolicy, load_records, load_records_from_path};
pub use models::{Outcome, QuizRecord, SessionReport, SessionResult};
pub use session::{AnswerLines, Session, spawn_stdin_reader};

/// A loaded quiz, ready to run in the terminal.
pub struct Quiz {
    records: Vec<QuizRecord>,
}

impl Quiz {
    /// Create a quiz from already-loaded records.
    pub fn new(records: Vec<QuizRecord>) -> Self {
        Self { records }
    }

    /// Load a quiz from a CSV file.
    ///
    /// `policy` decides what happens to rows whose answer field does not
    /// parse as an integer.
    pub fn from_csv<P: AsRef<Path>>(path: P, policy: ParsePolicy) -> Result<Self, LoadError> {
        Ok(Self::new(load_records_from_path(path, policy)?))
    }

    /// Reorder the questions with a seeded shuffle.
    ///
    /// A given seed always produces the same order. Without this call the
    /// questions stay in file order.
    pub fn shuffled(mut self, seed: u64) -> Self {
        let order = shuffle::shuffled_indices(self.records.len(), seed);
        let loaded = std::mem::take(&mut self.records);
        self.records = order.into_iter().map(|i| loaded[i].clone()).collect();
        self
    }

    /// Number of loaded questions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The questions, in the order they will be presented.
    pub fn records(&self) -> &[QuizRecord] {
        &self.records
    }

    /// Run the quiz against stdin, racing the deadline.
    pub async fn run(self, timeout: Duration) -> SessionReport {
        let answers = spawn_stdin_reader();
        Session::new(self.records, timeout).run(answers).await
    }
}
