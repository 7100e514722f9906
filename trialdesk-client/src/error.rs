//! Error types for the TrialDesk client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when calling the TrialDesk API
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection or transport failure, including failure to read the body
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API answered with a non-2xx status code
    #[error("API error (status {status}): {}", .body.as_deref().unwrap_or("<empty body>"))]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Response body, if the API sent a non-empty one
        body: Option<String>,
    },

    /// Response body did not match the expected shape
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration was rejected before any request was sent
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Request could not be built (e.g. an empty id); nothing was sent
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Create an HTTP status error from status code and optional body
    pub fn http_status(status: u16, body: Option<String>) -> Self {
        Self::HttpStatus { status, body }
    }

    /// Status code carried by an `HttpStatus` error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(status) if (400..500).contains(&status))
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(status) if status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        let not_found = ClientError::http_status(404, None);
        assert!(not_found.is_not_found());
        assert!(not_found.is_client_error());
        assert!(!not_found.is_server_error());

        let unavailable = ClientError::http_status(503, Some("maintenance".to_string()));
        assert_eq!(unavailable.status(), Some(503));
        assert!(unavailable.is_server_error());
        assert!(!unavailable.is_client_error());
    }

    #[test]
    fn test_non_status_errors_have_no_status() {
        let err = ClientError::InvalidConfig("missing url".to_string());
        assert_eq!(err.status(), None);
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_display_includes_body() {
        let err = ClientError::http_status(409, Some("duplicate code".to_string()));
        assert_eq!(err.to_string(), "API error (status 409): duplicate code");

        let err = ClientError::http_status(500, None);
        assert_eq!(err.to_string(), "API error (status 500): <empty body>");
    }
}
