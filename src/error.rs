// lesson-lint/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the library. Parse and I/O errors on a single lesson file
/// end up as findings in the report; everything else aborts the run.
#[derive(Error, Debug)]
pub enum LintError {
    #[error("{} could not be read: {source}", .path.display())]
    Io { path: PathBuf, #[source] source: std::io::Error },

    #[error("{} is not a valid JSON file: {source}", .path.display())]
    Parse { path: PathBuf, #[source] source: serde_json::Error },

    #[error("config {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    #[error("invalid exclude glob {pattern:?}")]
    Glob { pattern: String, #[source] source: globset::Error },

    #[error("unknown rule: {0}")]
    UnknownRule(String),

    #[error("lesson root {} is not a directory", .0.display())]
    MissingRoot(PathBuf),
}

pub type Result<T, E = LintError> = std::result::Result<T, E>;

impl LintError {
    /// True for errors that belong to one lesson file rather than the whole run.
    pub fn is_per_file(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Parse { .. })
    }
}
