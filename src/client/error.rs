use reqwest::StatusCode;

use crate::protocol::SchemaError;

/// Why an explanation lookup failed. Only ever logged; callers of
/// [`super::ExplanationClient::fetch_explanation`] just see `None`.
#[derive(Debug)]
pub enum ExplanationError {
    /// Connection, timeout or body read failure.
    Http(reqwest::Error),
    /// The service answered with a non-success status.
    Status { status: StatusCode, body: String },
    /// The service answered, but not with a valid explanation.
    Schema(SchemaError),
}

impl std::fmt::Display for ExplanationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExplanationError::Http(e) if e.is_timeout() => write!(f, "request timed out: {}", e),
            ExplanationError::Http(e) => write!(f, "request failed: {}", e),
            ExplanationError::Status { status, body } => {
                write!(f, "service returned {}: {}", status, body)
            }
            ExplanationError::Schema(e) => write!(f, "invalid response: {}", e),
        }
    }
}

impl std::error::Error for ExplanationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExplanationError::Http(e) => Some(e),
            ExplanationError::Status { .. } => None,
            ExplanationError::Schema(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for ExplanationError {
    fn from(err: reqwest::Error) -> Self {
        ExplanationError::Http(err)
    }
}

impl From<SchemaError> for ExplanationError {
    fn from(err: SchemaError) -> Self {
        ExplanationError::Schema(err)
    }
}
