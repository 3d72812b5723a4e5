//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the knowledge base client
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured base URL cannot be parsed
    #[error("Invalid backend URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    /// Connection, TLS or timeout failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("Backend returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The response body does not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status of the failed response, if the backend answered
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// Check if the backend reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Human-readable message sent by the backend, if any.
    ///
    /// The backend reports failures as `{"error": ...}` for workflow actions
    /// and `{"detail": ...}` for everything else.
    pub fn backend_message(&self) -> Option<String> {
        let ClientError::Status { body, .. } = self else {
            return None;
        };
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        ["error", "detail"]
            .iter()
            .find_map(|key| value.get(key).and_then(|v| v.as_str()))
            .map(str::to_string)
    }
}
