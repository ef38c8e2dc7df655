use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Input errors: precondition violations of the puzzle functions
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("input arrays must have equal length (left: {left}, right: {right})")]
    LengthMismatch { left: usize, right: usize },

    #[error("{problem} requires at least one element")]
    Empty { problem: &'static str },
}

impl InputError {
    pub fn length_mismatch(left: usize, right: usize) -> Self {
        Self::LengthMismatch { left, right }
    }

    pub fn empty(problem: &'static str) -> Self {
        Self::Empty { problem }
    }
}

// =============================================================================
// Case file errors: loading and parsing
// =============================================================================

#[derive(Error, Debug)]
pub enum CaseFileError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse case file at line {line}, column {col}: {message}")]
    Parse { line: usize, col: usize, message: String },

    #[error("unsupported case file format: '{0}' (expected .toml or .json)")]
    UnsupportedFormat(String),
}

impl CaseFileError {
    pub fn parse(line: usize, col: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            col,
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for CaseFileError {
    fn from(err: serde_json::Error) -> Self {
        CaseFileError::Parse {
            line: err.line(),
            col: err.column(),
            message: err.to_string(),
        }
    }
}

/// Converts a byte offset into a 1-based (line, column) pair.
pub(crate) fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let col = before.rfind('\n').map_or(offset, |nl| offset - nl - 1) + 1;
    (line, col)
}
