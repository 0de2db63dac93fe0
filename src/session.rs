//! The timed quiz session.
//!
//! One answering worker walks the records in order while the main flow races
//! it against the deadline; whichever resolves first decides the outcome.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::AsyncBufReadExt;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

use crate::models::{Outcome, QuizRecord, SessionReport, SessionResult};

/// Stream of answer lines feeding a session.
///
/// The channel closing signals end of input.
pub type AnswerLines = mpsc::UnboundedReceiver<String>;

/// Pump lines from stdin into a channel the session can await on.
pub fn spawn_stdin_reader() -> AnswerLines {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    log::error!("stdin read failed: {}", e);
                    break;
                }
            }
        }
    });
    rx
}

/// Running totals, owned by the single answering worker and read by the main
/// flow once the race resolves.
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    correct: usize,
    wrong: usize,
}

type SharedTally = Arc<Mutex<Tally>>;

/// How the answering worker stopped on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WorkerExit {
    /// Every record was presented and judged.
    Exhausted,
    /// The answer stream closed before the records ran out.
    InputClosed,
}

/// Outcome of the confirmation prompt.
enum Readiness {
    Start,
    Quit,
    InputClosed,
}

/// One interactive run over a fixed set of records with a fixed time budget.
pub struct Session {
    records: Vec<QuizRecord>,
    timeout: Duration,
}

impl Session {
    pub fn new(records: Vec<QuizRecord>, timeout: Duration) -> Self {
        Self { records, timeout }
    }

    /// Run the session to a terminal state.
    ///
    /// Blocks on the confirmation prompt first; the deadline only starts
    /// once the user has agreed to begin.
    pub async fn run(self, mut answers: AnswerLines) -> SessionReport {
        let total = self.records.len();

        match await_confirmation(&mut answers).await {
            Readiness::Start => {}
            Readiness::Quit => {
                println!("Leaving without taking the quiz.");
                return SessionReport {
                    outcome: Outcome::Declined,
                    score: SessionResult::from_counts(0, 0, total),
                };
            }
            Readiness::InputClosed => {
                eprintln!("Input stream closed before the quiz started.");
                return SessionReport {
                    outcome: Outcome::AbortedOnInputError,
                    score: SessionResult::from_counts(0, 0, total),
                };
            }
        }

        let deadline = Instant::now() + self.timeout;
        log::debug!("session running: {} questions, {:?} budget", total, self.timeout);

        let tally: SharedTally = Arc::new(Mutex::new(Tally::default()));
        let mut worker = spawn_answer_worker(self.records, answers, Arc::clone(&tally));

        let outcome = tokio::select! {
            _ = time::sleep_until(deadline) => {
                // The worker parks between reads, so the abort lands at an
                // await point rather than tearing down a half-judged answer.
                worker.abort();
                println!();
                println!("Time's up! The quiz is over.");
                Outcome::TimedOut
            }
            finished = &mut worker => match finished {
                Ok(WorkerExit::Exhausted) => {
                    println!("Quiz complete.");
                    Outcome::Completed
                }
                Ok(WorkerExit::InputClosed) | Err(_) => {
                    eprintln!("Input stream closed, ending the quiz.");
                    Outcome::AbortedOnInputError
                }
            }
        };

        let counts = *tally.lock().await;
        log::debug!("session over: {:?}, {:?}", outcome, counts);
        SessionReport {
            outcome,
            score: SessionResult::from_counts(counts.correct, counts.wrong, total),
        }
    }
}

/// Re-prompt until the user agrees to start or quits.
///
/// No timeout applies here; only the answer stream closing gets us out
/// otherwise.
async fn await_confirmation(answers: &mut AnswerLines) -> Readiness {
    loop {
        println!("Ready to start? Answer yes to begin or quit to leave.");
        let Some(line) = answers.recv().await else {
            return Readiness::InputClosed;
        };
        match line.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => return Readiness::Start,
            "quit" | "q" => return Readiness::Quit,
            _ => {}
        }
    }
}

/// Present records in order, judging one answer line per record.
fn spawn_answer_worker(
    records: Vec<QuizRecord>,
    mut answers: AnswerLines,
    tally: SharedTally,
) -> JoinHandle<WorkerExit> {
    tokio::spawn(async move {
        for record in records {
            println!("The question is: {}", record.question);
            print!("Enter your answer: ");
            let _ = std::io::stdout().flush();

            let Some(line) = answers.recv().await else {
                return WorkerExit::InputClosed;
            };
            let answer = line.trim();

            match answer.parse::<i64>() {
                Ok(value) if value == record.answer => {
                    tally.lock().await.correct += 1;
                }
                Ok(_) => {
                    tally.lock().await.wrong += 1;
                }
                Err(_) => {
                    println!("That is not a number, counting it as wrong.");
                    tally.lock().await.wrong += 1;
                }
            }
            println!("You answered: {}", answer);
        }
        WorkerExit::Exhausted
    })
}
