//! Error types shared by services and HTTP handlers.
//!
//! [`ShortenError`] describes why a single row of a creation batch was
//! rejected. [`AppError`] is what services return to handlers and renders as a
//! JSON error body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Reasons a single creation row is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortenError {
    #[error("URL is required")]
    MissingUrl,

    #[error("Invalid URL format. Please include http:// or https://")]
    InvalidUrlFormat,

    #[error("Custom shortcode must be at least 3 characters")]
    ShortcodeTooShort,

    #[error("Shortcode '{0}' already exists")]
    ShortcodeDuplicate(String),

    #[error("Custom shortcode must be a usable path segment of at most 64 characters and not a reserved name")]
    InvalidShortcode,

    #[error("Validity must be a positive number")]
    InvalidValidity,
}

impl ShortenError {
    /// Stable machine-readable identifier for API clients.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingUrl => "missing_url",
            Self::InvalidUrlFormat => "invalid_url_format",
            Self::ShortcodeTooShort => "shortcode_too_short",
            Self::ShortcodeDuplicate(_) => "shortcode_duplicate",
            Self::InvalidShortcode => "invalid_shortcode",
            Self::InvalidValidity => "invalid_validity",
        }
    }
}

/// A rejected row of a creation batch (1-based row number).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Row {row}: {error}")]
pub struct RowError {
    pub row: usize,
    pub error: ShortenError,
}

impl RowError {
    pub fn to_json(&self) -> Value {
        json!({
            "row": self.row,
            "kind": self.error.kind(),
            "message": self.to_string(),
        })
    }
}

/// Serialized error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Application-level error returned by services and handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    Conflict { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Builds the validation error for a rejected creation batch.
    ///
    /// The message joins every row message with `"; "`.
    pub fn rejected_batch(errors: &[RowError]) -> Self {
        let message = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");

        Self::bad_request(
            message,
            json!({ "errors": errors.iter().map(RowError::to_json).collect::<Vec<_>>() }),
        )
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            Self::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            Self::Conflict { .. } => (StatusCode::CONFLICT, "conflict"),
            Self::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    /// Converts the error into its serializable payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code) = self.status_and_code();
        let (message, details) = match self {
            Self::Validation { message, details }
            | Self::NotFound { message, details }
            | Self::Conflict { message, details }
            | Self::Internal { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        Self::bad_request("Request validation failed", details)
    }
}
