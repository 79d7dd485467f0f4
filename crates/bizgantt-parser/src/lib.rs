//! # bizgantt-parser
//!
//! Reads task lists exported from a project planner as CSV.
//!
//! The first row is a header and is skipped. Columns are positional:
//!
//! | Column | Field | Notes |
//! |--------|-------|-------|
//! | 0 | Id | dot-separated hierarchy path |
//! | 1 | Title | |
//! | 2 | Start | `M/D/YY, h:mm AM/PM` |
//! | 3 | End | same format |
//! | 4 | Duration Hours | integer, empty marks a milestone |
//! | 6 | Effort Hours | integer, may be empty |
//! | 8 | Completed | free text |
//! | 10 | Assigned To | free text |
//!
//! ## Example
//!
//! ```rust
//! use bizgantt_parser::parse_tasks;
//!
//! let input = "\
//! Id,Title,Start,End,Duration,x,Effort,x,Completed,x,Assigned
//! 1,Design,\"1/1/24, 8:00 AM\",\"1/3/24, 5:00 PM\",16,,16,,No,,Sam
//! ";
//!
//! let tasks = parse_tasks(input).unwrap();
//! assert_eq!(tasks[0].title, "Design");
//! ```

pub mod rows;

use bizgantt_core::Task;
use std::path::Path;
use thiserror::Error;

/// Input error. Any of these aborts the run.
#[derive(Debug, Error)]
pub enum InputParseError {
    #[error("unable to read input file: {0}")]
    Io(#[from] std::io::Error),

    #[error("unable to read input file: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {line} has no '{field}' column")]
    MissingField { line: u64, field: &'static str },

    #[error("unable to parse '{field}' of row {line} ({value}): {source}")]
    InvalidDate {
        line: u64,
        field: &'static str,
        value: String,
        source: chrono::ParseError,
    },

    #[error("unable to parse '{field}' of row {line} ({value}): {source}")]
    InvalidNumber {
        line: u64,
        field: &'static str,
        value: String,
        source: std::num::ParseIntError,
    },
}

impl InputParseError {
    /// 1-based line of the offending row, when the error is tied to one
    pub fn line(&self) -> Option<u64> {
        match self {
            InputParseError::MissingField { line, .. }
            | InputParseError::InvalidDate { line, .. }
            | InputParseError::InvalidNumber { line, .. } => Some(*line),
            InputParseError::Csv(e) => e.position().map(|p| p.line()),
            InputParseError::Io(_) => None,
        }
    }
}

/// Parse tasks from CSV text
pub fn parse_tasks(input: &str) -> Result<Vec<Task>, InputParseError> {
    rows::read_tasks(input.as_bytes())
}

/// Parse tasks from a CSV file
pub fn parse_file(path: &Path) -> Result<Vec<Task>, InputParseError> {
    let file = std::fs::File::open(path)?;
    rows::read_tasks(file)
}
