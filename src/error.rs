// File: src/error.rs
//! Error types shared by the index, the history log and persistence.

use std::io;

use thiserror::Error;

/// Everything a thesaurus operation can report back to its caller.
///
/// `NotFound`, `AlreadyExists` and `InvalidInput` are ordinary outcomes: the caller
/// reports them and carries on. Nothing here is fatal.
#[derive(Error, Debug)]
pub enum ThesaurusError {
    /// A word or synonym that the operation needs is not stored.
    #[error("{what} not found")]
    NotFound { what: String },

    /// The word is already an entry.
    #[error("entry word '{0}' already exists")]
    AlreadyExists(String),

    /// Empty word or synonym after trimming.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// File open, read or write failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration values that cannot be used.
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON configuration that does not parse.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ThesaurusError>;

impl ThesaurusError {
    pub fn not_found<S: Into<String>>(what: S) -> Self {
        ThesaurusError::NotFound { what: what.into() }
    }

    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        ThesaurusError::InvalidInput(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        ThesaurusError::Config(msg.into())
    }

    /// True for the recoverable "nothing to act on" outcomes.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ThesaurusError::NotFound { .. })
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, ThesaurusError::AlreadyExists(_))
    }
}
