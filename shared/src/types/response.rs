//! JSON response envelope
//!
//! Every endpoint answers with one of two shapes:
//! success `{"status": "success", "message"?, "data"?}` or
//! error `{"status": "error", "code", "message"}` where `code` is a stable
//! machine-readable identifier.

use serde::{Deserialize, Serialize};

/// Successful response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Always `"success"`
    pub status: String,

    /// Optional human-readable message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Response payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response carrying `data`
    pub fn success(data: T) -> Self {
        Self {
            status: String::from("success"),
            message: None,
            data: Some(data),
        }
    }

    /// Create a successful response with a message and `data`
    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            status: String::from("success"),
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Create a successful response with only a message
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            status: String::from("success"),
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always `"error"`
    pub status: String,

    /// Stable machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,
}

impl ErrorBody {
    /// Create a new error body
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: String::from("error"),
            code: code.into(),
            message: message.into(),
        }
    }
}
