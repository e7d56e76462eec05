//! Normalized API error shape.
//!
//! Every failure coming out of the API client, whether a transport error or
//! a non-2xx response, is reduced to this one type. Callers never see the
//! underlying fetch error.

use serde::Deserialize;

/// A human-readable failure with the HTTP status when one was received.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status: Option<u16>,
}

/// Error body the backend sends for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

impl ApiError {
    /// A failure that never reached the server (network, serialization).
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    /// Build an error from a non-2xx response, extracting the server-provided
    /// `detail` message and falling back to a generic one.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        Self {
            message,
            status: Some(status),
        }
    }

    /// Whether this error means the token was rejected.
    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_detail_is_used() {
        let err = ApiError::from_response(422, r#"{"detail":"Email already registered"}"#);
        assert_eq!(err.message, "Email already registered");
        assert_eq!(err.status, Some(422));
    }

    #[test]
    fn test_fallback_when_detail_absent() {
        let err = ApiError::from_response(500, "{}");
        assert_eq!(err.message, "Request failed with status 500");
    }

    #[test]
    fn test_fallback_when_body_not_json() {
        let err = ApiError::from_response(502, "<html>bad gateway</html>");
        assert_eq!(err.message, "Request failed with status 502");
        assert_eq!(err.status, Some(502));
    }

    #[test]
    fn test_unauthorized_detection() {
        assert!(ApiError::from_response(401, "{}").is_unauthorized());
        assert!(!ApiError::from_response(403, "{}").is_unauthorized());
        assert!(!ApiError::network("offline").is_unauthorized());
    }

    #[test]
    fn test_display_is_message() {
        let err = ApiError::network("Network error. Please try again.");
        assert_eq!(err.to_string(), "Network error. Please try again.");
        assert!(err.status.is_none());
    }
}
