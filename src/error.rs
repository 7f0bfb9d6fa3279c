//! Error types for the loyalty client
//!
//! Provides unified error handling using thiserror. Errors are `Clone` so a
//! failed request can be cached and handed to every caller waiting on it.

use serde_json::Value;
use thiserror::Error;

use crate::models::ErrorResponse;

/// Message used when a failed response carries nothing usable.
pub const UNKNOWN_ERROR: &str = "Unknown error";

// == Api Error Enum ==
/// Unified error type for the loyalty client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The API answered with a non-2xx status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request could not be sent or its body could not be read
    #[error("Transport error: {0}")]
    Transport(String),

    /// A successful response did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The endpoint and path do not form a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Builds an [`ApiError::Api`] from a failed response body.
    pub fn from_response(status: u16, body: Option<&Value>) -> Self {
        ApiError::Api {
            status,
            message: normalize_error(body),
        }
    }

    /// HTTP status, when the API answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The `{ "error": ... }` shape callers display.
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

// == Error Normalization ==
/// Picks the human-readable message out of an error body.
///
/// Prefers a non-empty `message` field, then a non-empty `error` field, then
/// the body itself. Empty or missing bodies give [`UNKNOWN_ERROR`].
pub fn normalize_error(body: Option<&Value>) -> String {
    let body = match body {
        Some(body) if is_truthy(body) => body,
        _ => return UNKNOWN_ERROR.to_string(),
    };

    for field in ["message", "error"] {
        if let Some(value) = body.get(field).filter(|v| is_truthy(v)) {
            return display(value);
        }
    }

    display(body)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// == Result Type Alias ==
/// Convenience Result type for the loyalty client.
pub type Result<T> = std::result::Result<T, ApiError>;
