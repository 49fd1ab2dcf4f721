use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::types::ErrorResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("username already exists")]
    DuplicateUsername,

    /// Returned for both unknown usernames and wrong passwords.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("missing bearer token")]
    MissingToken,

    /// Covers malformed, tampered and orphaned tokens alike.
    #[error("invalid token")]
    InvalidToken,

    #[error("Not found: {0}")]
    NotFound(String),
}

impl ApiError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::DuplicateUsername => StatusCode::CONFLICT,
            ApiError::InvalidCredentials | ApiError::MissingToken | ApiError::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, hint) = match &self {
            ApiError::InvalidInput(msg) => (msg.clone(), None),
            ApiError::DuplicateUsername => (
                self.to_string(),
                Some("Choose a different username"),
            ),
            ApiError::InvalidCredentials | ApiError::InvalidToken => (self.to_string(), None),
            ApiError::MissingToken => (
                self.to_string(),
                Some("Include 'Authorization: Bearer YOUR_TOKEN' header"),
            ),
            ApiError::NotFound(msg) => (msg.clone(), None),
        };

        let body = if let Some(h) = hint {
            ErrorResponse::with_hint(message, h)
        } else {
            ErrorResponse::new(message)
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
