//! Parse error types for page templates.

use thiserror::Error;

/// An error that occurred while building a template tree.
///
/// Every variant carries the 1-based line and column of the token that
/// triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An `end` marker with no open range.
    #[error("'end' with no open range at {line}:{column}")]
    UnmatchedEnd { line: usize, column: usize },

    /// The template ended while a range was still open.
    #[error("range '{name}' opened at {line}:{column} is never closed")]
    UnclosedRange {
        name: String,
        line: usize,
        column: usize,
    },

    /// A second `if-nothing` marker inside one range.
    #[error("range '{range}' has more than one 'if-nothing' marker (second at {line}:{column})")]
    DuplicateEmptyMarker {
        range: String,
        line: usize,
        column: usize,
    },

    /// An `if-nothing` marker outside any range.
    #[error("'if-nothing' outside of any range at {line}:{column}")]
    EmptyMarkerOutsideRange { line: usize, column: usize },
}

impl ParseError {
    /// The line and column this error points at.
    pub fn position(&self) -> (usize, usize) {
        match self {
            ParseError::UnmatchedEnd { line, column }
            | ParseError::UnclosedRange { line, column, .. }
            | ParseError::DuplicateEmptyMarker { line, column, .. }
            | ParseError::EmptyMarkerOutsideRange { line, column } => (*line, *column),
        }
    }
}
