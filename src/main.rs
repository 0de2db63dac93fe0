use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use timed_quiz::{Outcome, ParsePolicy, Quiz, SessionReport};

const EXIT_LOAD_FAILED: i32 = 1;
const EXIT_TIMED_OUT: i32 = 2;
const EXIT_INPUT_CLOSED: i32 = 3;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// CSV file to load the questions from
    #[arg(short, long)]
    file: PathBuf,

    /// Session deadline in seconds
    #[arg(short, long, default_value_t = 10)]
    timeout: u64,

    /// Seed for shuffling the question order; 0 keeps file order
    #[arg(short, long, default_value_t = 0)]
    shuffle: u64,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut quiz = match Quiz::from_csv(&args.file, ParsePolicy::default()) {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("Failed to load {}: {}", args.file.display(), e);
            std::process::exit(EXIT_LOAD_FAILED);
        }
    };

    if args.shuffle != 0 {
        quiz = quiz.shuffled(args.shuffle);
    }

    let report = quiz.run(Duration::from_secs(args.timeout)).await;
    print_summary(&report);

    // The stdin pump may still hold a blocking read; exiting the process
    // reclaims it.
    std::process::exit(match report.outcome {
        Outcome::Completed | Outcome::Declined => 0,
        Outcome::TimedOut => EXIT_TIMED_OUT,
        Outcome::AbortedOnInputError => EXIT_INPUT_CLOSED,
    });
}

fn print_summary(report: &SessionReport) {
    let score = &report.score;
    println!(
        "You got {} correct and {} wrong, with {} unattempted.",
        score.correct, score.wrong, score.unattempted
    );
}
