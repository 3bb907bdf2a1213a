//! Game server error types

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::{Category, ErrorResponse, ServiceId, SharedError, process_error};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("{details}")]
    InvalidInput { details: String },

    #[error("Player not found: {player_id}")]
    PlayerNotFound { player_id: String },

    #[error("Invalid course: {course}")]
    InvalidCourse { course: String },

    #[error("Invalid tier: {tier} for course {course}")]
    InvalidTier { course: String, tier: String },

    #[error("Not enough {category} cards in hand")]
    InsufficientCards { category: Category },

    #[error("Not enough {category} ingredients: {required} required, {provided} submitted")]
    InsufficientIngredients {
        category: Category,
        required: u32,
        provided: u32,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ServerError {
    pub fn invalid_input(details: impl Into<String>) -> Self {
        ServerError::InvalidInput { details: details.into() }
    }

    pub fn config(details: impl Into<String>) -> Self {
        ServerError::Config(details.into())
    }

    /// HTTP status reported for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::InvalidInput { .. }
            | ServerError::InvalidCourse { .. }
            | ServerError::InvalidTier { .. }
            | ServerError::InsufficientCards { .. }
            | ServerError::InsufficientIngredients { .. } => StatusCode::BAD_REQUEST,
            ServerError::PlayerNotFound { .. } => StatusCode::NOT_FOUND,
            ServerError::Config(_)
            | ServerError::ServerStartup(_)
            | ServerError::SharedError(_)
            | ServerError::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        if self.status_code().is_server_error() {
            process_error!(ServiceId::current(), "💥 Request failed: {}", self);
        }
        let body = ErrorResponse { error: self.to_string() };
        (self.status_code(), Json(body)).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
