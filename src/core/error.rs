//! Custom error types for the application.
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`StorageError`] - localStorage operations for preferences

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

impl FetchError {
    /// True when the server answered with a non-success status.
    pub fn is_http_status(&self) -> bool {
        matches!(self, Self::HttpError(_))
    }
}

/// Preference storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// localStorage not available (private mode, disabled, non-browser).
    #[error("localStorage not available")]
    StorageUnavailable,
    /// Failed to save to localStorage.
    #[error("failed to save to localStorage")]
    SaveFailed,
}
