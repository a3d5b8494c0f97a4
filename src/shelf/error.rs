use crate::model::BookId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data format in line {line:?}: {reason}")]
    Format { line: String, reason: String },

    #[error("Book with ID {0} not found")]
    NotFound(BookId),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    Api(String),
}

impl ShelfError {
    pub fn format(line: impl Into<String>, reason: impl Into<String>) -> Self {
        ShelfError::Format {
            line: line.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;
