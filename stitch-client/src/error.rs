//! Error types for the stitch client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when retrieving a stitched record
///
/// Transport failures (`RequestFailed`, `ApiError`) are surfaced unmodified
/// to the caller and are never retried by the poller; only an
/// application-level `Pending` status consumes the retry budget.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed at the network level
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The service returned a non-success status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the service
        message: String,
    },

    /// Failed to parse a response body
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The service reported `Completed` without a download locator
    ///
    /// Treated as a server-side failure: the completed-implies-locator
    /// invariant is part of the service contract, so callers see this as a
    /// server error (status 500) alongside true transport failures.
    #[error("Protocol violation: {message}")]
    ProtocolViolation {
        /// Description of the violated contract
        message: String,
    },

    /// The service reported a status outside {Pending, Processing, Completed}
    #[error("Unexpected job status from service: {value:?}")]
    UnexpectedStatus {
        /// The raw status string as received
        value: String,
    },

    /// The job stayed `Pending` for the entire retry budget
    #[error("Failed to initiate record view: job still pending after {pending_polls} polls")]
    RetryBudgetExhausted {
        /// Number of `Pending` observations made before giving up
        pending_polls: u32,
    },
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// HTTP status associated with this error, if any
    ///
    /// `ProtocolViolation` reports 500: a completed job without a locator is
    /// indistinguishable from a broken server as far as callers are concerned.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::ProtocolViolation { .. } => Some(500),
            Self::RequestFailed(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
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
    fn test_protocol_violation_is_server_error() {
        let err = ClientError::ProtocolViolation {
            message: "completed job carried no download locator".to_string(),
        };
        assert_eq!(err.status(), Some(500));
        assert!(err.is_server_error());
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_api_error_classification() {
        assert!(ClientError::api_error(404, "not found").is_client_error());
        assert!(ClientError::api_error(502, "bad gateway").is_server_error());
        assert!(!ClientError::api_error(502, "bad gateway").is_client_error());
    }

    #[test]
    fn test_budget_and_status_errors_carry_no_http_status() {
        let exhausted = ClientError::RetryBudgetExhausted { pending_polls: 10 };
        assert_eq!(exhausted.status(), None);

        let unexpected = ClientError::UnexpectedStatus {
            value: "Uploading".to_string(),
        };
        assert_eq!(unexpected.status(), None);
    }
}
