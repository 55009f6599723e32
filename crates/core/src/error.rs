use crate::context::ContextId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Parsing error: {0}")]
    Parsing(String),
    #[error("Span out of bounds at row {row}, column {column}")]
    OutOfBounds { row: usize, column: usize },
    #[error("Span ends before it starts")]
    InvalidSpan,
    #[error("Unknown context: {0:?}")]
    UnknownContext(ContextId),
    #[error("Context was built for a different parent")]
    ParentMismatch,
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SummaryError>;
