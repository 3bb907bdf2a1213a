//! Client error types

use reqwest::StatusCode;
use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Server returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("Invalid input: {0}")]
    Shared(#[from] SharedError),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status(),
            ClientError::Shared(_) => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
