//! Unified error types for the booking service.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for the booking service.
#[derive(Error, Debug)]
pub enum BookingError {
    // ============ Mapping Errors ============
    /// A status name has no member of the same name in the target vocabulary.
    #[error("Status translation mismatch: no status named '{status}'")]
    StatusTranslationMismatch { status: String },

    // ============ Infrastructure Errors ============
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BookingError {
    /// Returns the HTTP status code for this error.
    ///
    /// Every variant is a server-side fault; none of them can be fixed by
    /// the caller resending the request.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::StatusTranslationMismatch { .. }
            | Self::Configuration(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::StatusTranslationMismatch { .. } => "STATUS_TRANSLATION_MISMATCH",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a status translation error for the given status name.
    #[must_use]
    pub fn status_mismatch<T: Into<String>>(status: T) -> Self {
        Self::StatusTranslationMismatch {
            status: status.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Request trace ID for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response from a `BookingError`.
    #[must_use]
    pub fn from_error(error: &BookingError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            trace_id: None,
        }
    }

    /// Sets the trace ID.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }
}

impl From<&BookingError> for ErrorResponse {
    fn from(error: &BookingError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(BookingError::status_mismatch("NO_SHOW").status_code(), 500);
        assert_eq!(BookingError::configuration("bad level").status_code(), 500);
        assert_eq!(BookingError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            BookingError::status_mismatch("NO_SHOW").error_code(),
            "STATUS_TRANSLATION_MISMATCH"
        );
        assert_eq!(
            BookingError::configuration("x").error_code(),
            "CONFIGURATION_ERROR"
        );
        assert_eq!(BookingError::internal("x").error_code(), "INTERNAL_ERROR");
        assert_eq!(
            BookingError::from(anyhow::anyhow!("wrapped")).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_status_mismatch_message_names_status() {
        let err = BookingError::status_mismatch("NO_SHOW");
        assert!(err.to_string().contains("NO_SHOW"));
        assert!(matches!(
            err,
            BookingError::StatusTranslationMismatch { ref status } if status == "NO_SHOW"
        ));
    }

    #[test]
    fn test_error_response_from_error() {
        let err = BookingError::status_mismatch("NO_SHOW");
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "STATUS_TRANSLATION_MISMATCH");
        assert!(response.message.contains("NO_SHOW"));
        assert!(response.trace_id.is_none());
    }

    #[test]
    fn test_error_response_with_trace_id() {
        let err = BookingError::internal("boom");
        let response = ErrorResponse::from(&err).with_trace_id("trace-123");
        assert_eq!(response.trace_id, Some("trace-123".to_string()));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["trace_id"], "trace-123");
        assert_eq!(json["code"], "INTERNAL_ERROR");
    }
}
