//! Shared error types for the card game

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SharedError {
    #[error("Unknown ingredient category: {input}")]
    UnknownCategory { input: String },

    #[error("Unknown course: {input}")]
    UnknownCourse { input: String },

    #[error("Unknown tier: {input}")]
    UnknownTier { input: String },

    #[error("Invalid player id: {input}")]
    InvalidPlayerId { input: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
