//! Process exit codes
//!
//! | Exit Code | Meaning |
//! |-----------|---------|
//! | 0 | Success |
//! | 1 | Input error: unreadable or malformed CSV, bad config, nothing to draw |
//! | 2 | Layout invariant violated (a task could not be placed) |
//! | 3 | Rendering or writing the output failed |

use std::process;

use bizgantt_core::{LayoutError, RenderError};
use bizgantt_parser::InputParseError;

use crate::config::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    Input = 1,
    Layout = 2,
    Output = 3,
}

impl ExitCode {
    /// Classify a failure by the first typed error in its chain.
    ///
    /// Errors nobody recognises are treated as output failures, since every
    /// earlier stage reports a typed error.
    pub fn from_error(err: &anyhow::Error) -> Self {
        for cause in err.chain() {
            if cause.is::<InputParseError>() || cause.is::<ConfigError>() {
                return ExitCode::Input;
            }
            if let Some(layout) = cause.downcast_ref::<LayoutError>() {
                return if layout.is_internal() {
                    ExitCode::Layout
                } else {
                    ExitCode::Input
                };
            }
            if cause.is::<RenderError>() || cause.is::<std::io::Error>() {
                return ExitCode::Output;
            }
        }
        ExitCode::Output
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

impl From<ExitCode> for process::ExitCode {
    fn from(code: ExitCode) -> Self {
        process::ExitCode::from(code as u8)
    }
}
