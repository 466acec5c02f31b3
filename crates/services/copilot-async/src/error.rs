use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when using the copilot API client
#[derive(Debug, Error)]
pub enum CopilotError {
    /// HTTP request error
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// API error reported by the backend
    ///
    /// Displays the backend's message verbatim; callers surface it unchanged.
    #[error("{}", .0.message)]
    Api(ApiErrorObject),

    /// Configuration error or rejected input
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(String),
}

/// API error object extracted from a non-2xx response
#[derive(Debug, Clone)]
pub struct ApiErrorObject {
    /// HTTP status code of the failed exchange
    pub status_code: u16,
    /// Human-readable error message; backend-supplied when present,
    /// otherwise `Server error: <status>`
    pub message: String,
}

/// Error body shape the backend returns on failure
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Maps a serde deserialization error to a `CopilotError` with context
#[must_use]
pub fn map_deser(e: &serde_json::Error, body: &[u8]) -> CopilotError {
    let snippet = String::from_utf8_lossy(&body[..body.len().min(400)]).to_string();
    CopilotError::Serde(format!("{e}: {snippet}"))
}

/// Extracts the backend's error message from a non-2xx response body
///
/// Attempts to parse `{ "error": "..." }`, falling back to a generic
/// `Server error: <status>` message when the field is missing or the body
/// is not JSON.
#[must_use]
pub fn deserialize_api_error(status: StatusCode, body: &[u8]) -> CopilotError {
    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Server error: {}", status.as_u16()));

    CopilotError::Api(ApiErrorObject {
        status_code: status.as_u16(),
        message,
    })
}
