//! Errors returned by the redirect handler.

use std::fmt::Display;

use axum::{http::header, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::signer::{SigningError, SigningErrorKind};

/// Result type used throughout the crate.
pub type Result<T> = core::result::Result<T, ServerError>;

/// Category of a [`ServerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerErrorKind {
    /// The request path cannot be turned into an object key.
    InvalidRequest,
    /// The signing configuration is missing or unusable.
    Configuration,
    /// The signer rejected the url or expiry.
    Signing,
}

impl Display for ServerErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequest => write!(f, "INVALID_REQUEST"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Signing => write!(f, "SIGNING"),
        }
    }
}

/// Error produced while turning a request into a signed redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerError {
    kind: ServerErrorKind,
    message: String,
}

impl ServerError {
    /// Create a new error.
    pub fn new(kind: ServerErrorKind, message: String) -> Self {
        Self { kind, message }
    }

    /// The category of this error.
    pub fn kind(&self) -> ServerErrorKind {
        self.kind
    }

    /// Human readable description.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The request path is missing or malformed.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ServerErrorKind::InvalidRequest, message.into())
    }

    /// The signing configuration is missing or unusable.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ServerErrorKind::Configuration, message.into())
    }

    /// The signer rejected its input.
    pub fn signing(message: impl Into<String>) -> Self {
        Self::new(ServerErrorKind::Signing, message.into())
    }

    /// HTTP status this error is rendered with.
    pub fn status_code(&self) -> StatusCode {
        match self.kind {
            ServerErrorKind::InvalidRequest => StatusCode::BAD_REQUEST,
            ServerErrorKind::Configuration | ServerErrorKind::Signing => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn into_error_response(self) -> ErrorResponse {
        ErrorResponse {
            error_code: self.kind.to_string(),
            message: self.message,
        }
    }
}

impl Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl std::error::Error for ServerError {}

impl From<SigningError> for ServerError {
    fn from(err: SigningError) -> Self {
        match err.kind() {
            SigningErrorKind::InvalidKey => ServerError::configuration(err.to_string()),
            SigningErrorKind::InvalidPolicy
            | SigningErrorKind::InvalidInput
            | SigningErrorKind::SigningFailure => ServerError::signing(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    error_code: String,
    message: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(error = %self, "returning error response");
        let status_code = self.status_code();

        (
            status_code,
            [(
                header::CONTENT_TYPE.as_str(),
                "application/json; charset=utf-8",
            )],
            Json(self.into_error_response()),
        )
            .into_response()
    }
}
