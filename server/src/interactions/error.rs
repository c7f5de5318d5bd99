//! Interaction Error Types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Interaction processing error types.
#[derive(Debug, Error)]
pub enum InteractionError {
    /// Signature headers missing from the request.
    #[error("Missing signature headers")]
    MissingSignatureHeaders,

    /// Signature present but malformed or cryptographically wrong.
    #[error("Invalid request signature")]
    SignatureInvalid,

    /// Body is not a valid interaction envelope.
    #[error("Malformed interaction payload")]
    MalformedPayload,

    /// Application command interaction without a command name.
    #[error("Interaction carries no command name")]
    MissingCommandName,

    /// No handler registered under the requested command name.
    #[error("No handler registered for command: {0}")]
    CommandNotFound(String),

    /// A handler was registered twice under the same name (startup error).
    #[error("Command already registered: {0}")]
    DuplicateCommand(String),

    /// A command handler failed while executing.
    #[error("Command handler failed: {0}")]
    Handler(anyhow::Error),
}

/// Error response body for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable error message.
    pub message: String,
}

impl IntoResponse for InteractionError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            Self::MissingSignatureHeaders | Self::SignatureInvalid => {
                (StatusCode::UNAUTHORIZED, "SIGNATURE_INVALID")
            }
            Self::MalformedPayload | Self::MissingCommandName => {
                (StatusCode::BAD_REQUEST, "MALFORMED_PAYLOAD")
            }
            Self::CommandNotFound(_) => (StatusCode::INTERNAL_SERVER_ERROR, "COMMAND_NOT_FOUND"),
            Self::DuplicateCommand(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            Self::Handler(_) => (StatusCode::INTERNAL_SERVER_ERROR, "HANDLER_FAILED"),
        };

        // All signature rejections share one external message so the response
        // cannot be used as a verification oracle; the specific reason is
        // logged by the middleware instead.
        let message = match &self {
            Self::MissingSignatureHeaders | Self::SignatureInvalid => {
                "Invalid request signature".to_string()
            }
            other => other.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(code, error = %self, "Interaction dispatch failed");
        }

        let body = Json(ErrorResponse {
            error: code.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type for interaction operations.
pub type InteractionResult<T> = Result<T, InteractionError>;
