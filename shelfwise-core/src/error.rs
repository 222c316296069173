//! Error types for the grading engine.

use thiserror::Error;

/// Raised when a book cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    #[error("invalid ISBN format: {0}. Expected format: 'AAAA-1234'")]
    InvalidIsbn(String),
}

/// Failure of the interactive prompt channel itself.
///
/// Invalid answers are retried by the channel and never show up here.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed before an answer was given")]
    Closed,
    #[error("prompt I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
