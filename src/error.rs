//! Error types for Zoho Books API operations.

use thiserror::Error;

/// Errors that can occur during Zoho Books API operations.
#[derive(Debug, Error)]
pub enum BooksError {
    /// Configuration is missing or incomplete.
    #[error("Zoho Books configuration required: {0}")]
    ConfigMissing(String),

    /// A filter condition pairs a comparison variant with a value it cannot compare.
    #[error("Invalid filter '{field}' ({variant}): {reason}")]
    InvalidFilter {
        field: String,
        variant: &'static str,
        reason: String,
    },

    /// An argument to a paging operation is out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The response reported success but carried none of the expected resource keys.
    #[error("Response has code 0 but none of the expected keys [{}]", candidates.join(", "))]
    DecodeInconsistency { candidates: Vec<&'static str> },

    /// A resource key was found but its value does not have the declared cardinality.
    #[error("Key '{key}' holds {found}, expected {expected}")]
    ShapeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The response body is not a valid envelope.
    #[error("Malformed response envelope: {0}")]
    MalformedEnvelope(String),

    /// The service answered with a non-zero application code.
    #[error("Zoho Books error {code}: {message}")]
    Remote { code: i64, message: String },

    /// A page walk was cancelled between fetches.
    #[error("Page walk cancelled")]
    Cancelled,

    /// API request failed.
    #[error("Zoho Books API error: {message}")]
    ApiError {
        message: String,
        status_code: Option<u16>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Rate limited.
    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },
}

/// Result type alias for Zoho Books operations.
pub type Result<T> = core::result::Result<T, BooksError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_inconsistency_lists_candidates() {
        let err = BooksError::DecodeInconsistency {
            candidates: vec!["contact", "contacts"],
        };
        assert_eq!(
            err.to_string(),
            "Response has code 0 but none of the expected keys [contact, contacts]"
        );
    }

    #[test]
    fn test_remote_error_display() {
        let err = BooksError::Remote {
            code: 1002,
            message: "Contact does not exist.".to_string(),
        };
        assert!(err.to_string().contains("1002"));
        assert!(err.to_string().contains("Contact does not exist."));
    }
}
