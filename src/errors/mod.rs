//! Error handling module for the kiosk.
//!
//! Provides centralized error types with mapping to HTTP status codes and response envelopes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const FETCH_ERROR: &str = "FETCH_ERROR";
    pub const UPSTREAM_STATUS: &str = "UPSTREAM_STATUS";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
    pub const ALL_SOURCES_FAILED: &str = "ALL_SOURCES_FAILED";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Transport-level failure talking to the CMS
    Fetch(String),
    /// CMS answered with a non-success status
    Status { resource: String, status: u16 },
    /// CMS body could not be decoded
    Decode(String),
    /// Every resource of a poll failed
    AllSourcesFailed,
    /// Invalid configuration
    Config(String),
    /// Unknown route
    NotFound(String),
    /// Internal error
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Fetch(_) | AppError::Status { .. } | AppError::Decode(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::AllSourcesFailed => StatusCode::SERVICE_UNAVAILABLE,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Fetch(_) => codes::FETCH_ERROR,
            AppError::Status { .. } => codes::UPSTREAM_STATUS,
            AppError::Decode(_) => codes::DECODE_ERROR,
            AppError::AllSourcesFailed => codes::ALL_SOURCES_FAILED,
            AppError::Config(_) => codes::CONFIG_ERROR,
            AppError::NotFound(_) => codes::NOT_FOUND,
            AppError::Internal(_) => codes::INTERNAL_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::Fetch(msg) => msg.clone(),
            AppError::Status { resource, status } => {
                format!("CMS returned status {} for {}", status, resource)
            }
            AppError::Decode(msg) => msg.clone(),
            AppError::AllSourcesFailed => "All CMS resources failed to load".to_string(),
            AppError::Config(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::Internal(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return AppError::Fetch(format!("CMS request timed out: {}", err));
        }
        AppError::Fetch(format!("CMS request failed: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(format!("JSON error: {}", err))
    }
}

/// Error details in the response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

/// Error response envelope.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetails,
    pub generation: u64,
}

impl ErrorResponse {
    pub fn new(error: &AppError, generation: u64) -> Self {
        Self {
            success: false,
            error: ErrorDetails {
                code: error.error_code().to_string(),
                message: error.message(),
            },
            generation,
        }
    }
}

/// Wrapper type for errors that carry the snapshot generation.
pub struct AppErrorWithGeneration {
    pub error: AppError,
    pub generation: u64,
}

impl IntoResponse for AppErrorWithGeneration {
    fn into_response(self) -> Response {
        let status = self.error.status_code();
        let body = ErrorResponse::new(&self.error, self.generation);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = AppError::Status {
            resource: "wifi".to_string(),
            status: 503,
        };

        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            err.to_string(),
            "UPSTREAM_STATUS: CMS returned status 503 for wifi"
        );
    }

    #[test]
    fn test_decode_error_from_json() {
        let err: AppError = serde_json::from_str::<u32>("nope").unwrap_err().into();

        assert_eq!(err.error_code(), codes::DECODE_ERROR);
    }
}
