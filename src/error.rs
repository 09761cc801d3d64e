//! Client error types

use serde::Serialize;
use thiserror::Error;

/// Error type shared by the request client, services and hooks
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (refused, DNS, TLS, timeout)
    #[error("Network request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response. Displays as the message derived from the body.
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status of the failed response, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }
}

/// Serializable error response for UI consumers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        let code = match err {
            ApiError::Transport(_) => "TRANSPORT_ERROR",
            ApiError::Status { .. } => "HTTP_ERROR",
            ApiError::Decode(_) => "DECODE_ERROR",
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::Config(_) => "CONFIG_ERROR",
            ApiError::Cancelled => "CANCELLED",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        };

        ErrorResponse {
            code: code.to_string(),
            message: err.to_string(),
        }
    }
}

impl Serialize for ApiError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        ErrorResponse::from(self).serialize(serializer)
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_displays_bare_message() {
        let err = ApiError::Status {
            status: 404,
            message: "stock not found".to_string(),
        };
        assert_eq!(err.to_string(), "stock not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_error_serializes_with_code() {
        let err = ApiError::Validation("endpoint must start with '/'".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "Validation error: endpoint must start with '/'");
    }

    #[test]
    fn test_cancelled_has_no_status() {
        assert!(ApiError::Cancelled.is_cancelled());
        assert_eq!(ApiError::Cancelled.status(), None);
    }
}
