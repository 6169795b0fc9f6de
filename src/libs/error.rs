//! Error types shared across the persistence and export layers.
//!
//! Every fallible core operation returns [`Error`]. The web layer maps these
//! onto HTTP responses; the CLI wraps them in `anyhow` context.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// One or more input violations, accumulated rather than short-circuited.
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// A name collision on employee or workplace creation (exact match).
    #[error("{0} already exists")]
    DuplicateName(String),

    /// A referenced or targeted row does not exist.
    #[error("{0} not found")]
    NotFound(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("export failed: {0}")]
    Export(String),
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(vec![message.into()])
    }
}

pub type Result<T> = std::result::Result<T, Error>;
