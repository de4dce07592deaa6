//! Error taxonomy for backend calls.
//!
//! Every failure is turned into a short message at the call site via
//! [`ApiError::user_message`]; nothing here is retried.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to build the HTTP client
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The backend could not be reached (connect failure, timeout, broken body)
    #[error("Request to '{endpoint}' failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status
    #[error("Backend error: {status} - {message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape
    #[error("Unexpected response from '{endpoint}': {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Short message suitable for showing next to the triggering control.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Client(_) => "HTTP client unavailable".to_string(),
            ApiError::Transport { source, .. } if source.is_timeout() => {
                "Server did not respond in time".to_string()
            }
            ApiError::Transport { .. } => "Could not reach the server".to_string(),
            ApiError::Status { message, .. } => message.clone(),
            ApiError::Decode { .. } => "Unexpected response from the server".to_string(),
        }
    }

    /// Get error type string for logs
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Client(_) => "client_error",
            ApiError::Transport { .. } => "transport_error",
            ApiError::Status { .. } => "status_error",
            ApiError::Decode { .. } => "decode_error",
        }
    }

    /// Build a status error from a non-success response body.
    pub(crate) fn from_status(status: StatusCode, body: &str) -> Self {
        let message = extract_detail(body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
        });
        ApiError::Status {
            status: status.as_u16(),
            message,
        }
    }
}

/// Pull the human readable part out of a `{"detail": ...}` body.
///
/// `detail` is either a plain string or a list of validation entries with a
/// `msg` field each.
fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(message) => Some(message.clone()),
        Value::Array(entries) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
