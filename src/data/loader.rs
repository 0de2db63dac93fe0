//! CSV record loader.
//!
//! Turns tabular rows into [`QuizRecord`]s. The first row is always a header
//! and is discarded; each data row maps positionally, field 0 to the question
//! text and field 1 to the integer answer. Extra fields are ignored.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::models::QuizRecord;

/// What to do with a row whose answer field is not an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Drop the row with a logged warning; the rest of the file still loads.
    #[default]
    Skip,
    /// Keep the row with the answer set to zero.
    ZeroFill,
    /// Fail the whole load.
    Abort,
}

/// Error type for loading records.
#[derive(Debug)]
pub enum LoadError {
    /// The source could not be read.
    Io(io::Error),
    /// The source is not valid CSV.
    Csv(csv::Error),
    /// A row's answer field is not an integer (only under [`ParsePolicy::Abort`]).
    MalformedRecord {
        /// 1-based line number in the source file.
        line: usize,
        /// The offending answer field.
        value: String,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "cannot read quiz file: {}", e),
            LoadError::Csv(e) => write!(f, "cannot parse quiz file: {}", e),
            LoadError::MalformedRecord { line, value } => {
                write!(f, "line {}: answer {:?} is not an integer", line, value)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Csv(e) => Some(e),
            LoadError::MalformedRecord { .. } => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        LoadError::Csv(err)
    }
}

/// Load records from a CSV file on disk.
pub fn load_records_from_path<P: AsRef<Path>>(
    path: P,
    policy: ParsePolicy,
) -> Result<Vec<QuizRecord>, LoadError> {
    let file = File::open(path)?;
    load_records(file, policy)
}

/// Load records from any CSV source.
///
/// The header row is consumed by the reader and never becomes a record, even
/// when it is the only row in the file.
pub fn load_records<R: Read>(reader: R, policy: ParsePolicy) -> Result<Vec<QuizRecord>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, row) in csv_reader.records().enumerate() {
        let row = row?;
        // Line 1 is the header, so data row `index` sits on line `index + 2`.
        let line = index + 2;
        let question = row.get(0).unwrap_or("").to_string();
        let raw_answer = row.get(1).unwrap_or("");

        match raw_answer.trim().parse::<i64>() {
            Ok(answer) => records.push(QuizRecord { question, answer }),
            Err(_) => match policy {
                ParsePolicy::Skip => {
                    log::warn!(
                        "line {}: answer {:?} is not an integer, skipping row",
                        line,
                        raw_answer
                    );
                }
                ParsePolicy::ZeroFill => {
                    log::warn!(
                        "line {}: answer {:?} is not an integer, defaulting to 0",
                        line,
                        raw_answer
                    );
                    records.push(QuizRecord { question, answer: 0 });
                }
                ParsePolicy::Abort => {
                    return Err(LoadError::MalformedRecord {
                        line,
                        value: raw_answer.to_string(),
                    });
                }
            },
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(input: &str, policy: ParsePolicy) -> Result<Vec<QuizRecord>, LoadError> {
        load_records(input.as_bytes(), policy)
    }

    #[test]
    fn header_only_file_yields_no_records() {
        let records = load("question,answer\n", ParsePolicy::Skip).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn empty_file_yields_no_records() {
        let records = load("", ParsePolicy::Skip).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn rows_map_positionally_in_file_order() {
        let records = load("q,a\n2+2?,4\n3+3?,6\n", ParsePolicy::Skip).unwrap();
        assert_eq!(
            records,
            vec![QuizRecord::new("2+2?", 4), QuizRecord::new("3+3?", 6)]
        );
    }

    #[test]
    fn extra_fields_are_ignored() {
        let records = load("q,a,note\n5*5?,25,easy\n", ParsePolicy::Skip).unwrap();
        assert_eq!(records, vec![QuizRecord::new("5*5?", 25)]);
    }

    #[test]
    fn answer_whitespace_is_tolerated() {
        let records = load("q,a\n1+1?, 2\n", ParsePolicy::Skip).unwrap();
        assert_eq!(records, vec![QuizRecord::new("1+1?", 2)]);
    }

    #[test]
    fn skip_policy_drops_malformed_rows_and_keeps_the_rest() {
        let records = load("q,a\n2+2?,four\n3+3?,6\n", ParsePolicy::Skip).unwrap();
        assert_eq!(records, vec![QuizRecord::new("3+3?", 6)]);
    }

    #[test]
    fn missing_answer_field_counts_as_malformed() {
        let records = load("q,a\nlonely question\n3+3?,6\n", ParsePolicy::Skip).unwrap();
        assert_eq!(records, vec![QuizRecord::new("3+3?", 6)]);
    }

    #[test]
    fn zero_fill_policy_keeps_malformed_rows_with_answer_zero() {
        let records = load("q,a\n2+2?,four\n", ParsePolicy::ZeroFill).unwrap();
        assert_eq!(records, vec![QuizRecord::new("2+2?", 0)]);
    }

    #[test]
    fn abort_policy_reports_the_offending_line() {
        let err = load("q,a\n2+2?,4\n3+3?,six\n", ParsePolicy::Abort).unwrap_err();
        match err {
            LoadError::MalformedRecord { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "six");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn missing_file_surfaces_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-quiz.csv");
        let err = load_records_from_path(&path, ParsePolicy::Skip).unwrap_err();
        match err {
            LoadError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn loads_from_a_real_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.csv");
        std::fs::write(&path, "q,a\n7-3?,4\n").unwrap();
        let records = load_records_from_path(&path, ParsePolicy::Skip).unwrap();
        assert_eq!(records, vec![QuizRecord::new("7-3?", 4)]);
    }
}
