//! Failures of a Messages API call.
//!
//! The categorizer turns every one of these into the fallback category. The
//! variants exist so logs can tell a bad key from an overloaded service.

use reqwest::StatusCode;
use reqwest::header::InvalidHeaderValue;
use serde::Deserialize;
use thiserror::Error;

/// Why a call to Claude did not produce a reply.
#[derive(Debug, Error)]
pub enum ClaudeError {
    /// The API key cannot be sent as an `x-api-key` header.
    #[error("API key is not a valid header value")]
    InvalidKey(#[from] InvalidHeaderValue),

    /// Connect failure, timeout, or a body that could not be read.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP 401.
    #[error("API key rejected")]
    Unauthorized,

    /// HTTP 429.
    #[error("rate limited, retry after {retry_after}s")]
    RateLimited {
        /// Seconds from `Retry-After`, or a default when it is missing.
        retry_after: u64,
    },

    /// Any other non-success status.
    #[error("HTTP {status} ({kind}): {message}")]
    Status {
        status: u16,
        /// The API's error type, or `"unknown"` for a non-JSON body.
        kind: String,
        message: String,
    },

    /// A success status whose body is not a Messages reply.
    #[error("unreadable response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClaudeError {
    /// Build a [`ClaudeError::Status`] from an error response body.
    pub(crate) fn from_error_body(status: StatusCode, body: &str) -> Self {
        let (kind, message) = serde_json::from_str::<ErrorDocument>(body).map_or_else(
            |_| ("unknown".to_string(), body.trim().to_string()),
            |doc| (doc.error.kind, doc.error.message),
        );
        Self::Status {
            status: status.as_u16(),
            kind,
            message,
        }
    }

    /// Whether the same request could succeed later.
    ///
    /// True for timeouts, connection failures, rate limits and 5xx statuses
    /// (Anthropic reports "overloaded" as 529). A rejected key or a bad
    /// request is not.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            Self::RateLimited { .. } => true,
            Self::Status { status, .. } => *status >= 500,
            Self::InvalidKey(_) | Self::Unauthorized | Self::Decode(_) => false,
        }
    }
}

/// `{"type":"error","error":{"type":"...","message":"..."}}`
#[derive(Deserialize)]
struct ErrorDocument {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    #[serde(rename = "type")]
    kind: String,
    message: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_overloaded_is_transient() {
        let body = r#"{"type":"error","error":{"type":"overloaded_error","message":"Overloaded"}}"#;
        let err = ClaudeError::from_error_body(StatusCode::from_u16(529).unwrap(), body);

        assert!(matches!(
            err,
            ClaudeError::Status { status: 529, ref kind, ref message }
                if kind == "overloaded_error" && message == "Overloaded"
        ));
        assert!(err.is_transient());
        assert_eq!(err.to_string(), "HTTP 529 (overloaded_error): Overloaded");
    }

    #[test]
    fn test_bad_request_is_permanent() {
        let body = r#"{"type":"error","error":{"type":"invalid_request_error","message":"max_tokens: too large"}}"#;
        let err = ClaudeError::from_error_body(StatusCode::BAD_REQUEST, body);
        assert!(!err.is_transient());
        assert!(matches!(err, ClaudeError::Status { ref kind, .. } if kind == "invalid_request_error"));
    }

    #[test]
    fn test_plain_body_from_proxy() {
        let err = ClaudeError::from_error_body(StatusCode::BAD_GATEWAY, "bad gateway\n");
        assert!(matches!(
            err,
            ClaudeError::Status { status: 502, ref kind, ref message }
                if kind == "unknown" && message == "bad gateway"
        ));
        assert!(err.is_transient());
    }

    #[test]
    fn test_key_problems_are_permanent() {
        assert!(!ClaudeError::Unauthorized.is_transient());
        assert!(ClaudeError::RateLimited { retry_after: 30 }.is_transient());
        assert_eq!(
            ClaudeError::RateLimited { retry_after: 30 }.to_string(),
            "rate limited, retry after 30s"
        );
    }
}
