use std::path::PathBuf;

use shelfwise_core::BookError;
use thiserror::Error;

/// Catalog loading failures. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed record: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: incorrect number of fields, expected {expected}, got {got}")]
    FieldCount { line: u64, expected: usize, got: usize },
    #[error("line {line}: invalid genre '{genre}', check the spelling in the inventory file")]
    UnknownGenre { line: u64, genre: String },
    #[error("line {line}: invalid {field} '{value}'")]
    InvalidNumber {
        line: u64,
        field: &'static str,
        value: String,
    },
    #[error("line {line}: {source}")]
    Book {
        line: u64,
        #[source]
        source: BookError,
    },
}
