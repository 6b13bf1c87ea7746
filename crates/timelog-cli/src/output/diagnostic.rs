//! Miette diagnostic wrapper for template parse errors.

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;
use timelog::ParseError;

/// A miette-compatible diagnostic for template parse errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("template error: {message}")]
#[diagnostic(code(timelog::template))]
pub struct TemplateDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl TemplateDiagnostic {
    /// Create a diagnostic from a ParseError with source context.
    pub fn from_parse_error(path: &Path, content: &str, err: &ParseError) -> Self {
        let (line, column) = err.position();
        let offset = byte_offset(content, line, column);

        // Highlight the whole directive when the error points at one.
        let length = if content[offset..].starts_with("{{") {
            content[offset..].find("}}").map_or(1, |end| end + 2)
        } else {
            1
        };

        let help = match err {
            ParseError::UnmatchedEnd { .. } => {
                "remove this marker or open a section before it with `{{ range name }}`"
            }
            ParseError::UnclosedRange { .. } => "close the section with `{{ end }}`",
            ParseError::DuplicateEmptyMarker { .. } => {
                "a section can have only one `{{ if-nothing }}`"
            }
            ParseError::EmptyMarkerOutsideRange { .. } => {
                "`{{ if-nothing }}` belongs inside a `{{ range name }}` section"
            }
        };

        TemplateDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, length).into(),
            message: err.to_string(),
            help: Some(help.to_string()),
        }
    }
}

/// Convert a 1-based line and character column to a byte offset.
///
/// The result is clamped to the content length.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let line_start = line_start.min(content.len());
    let within_line: usize = content[line_start..]
        .chars()
        .take(column.saturating_sub(1))
        .map(char::len_utf8)
        .sum();
    line_start + within_line
}
