// src/error.rs
//! Application error types with structured error handling.
//!
//! The variants separate the places a call can fail: the network, the API
//! itself, the shape of a successful response, and the decoders meeting a
//! discriminator they do not know.

use std::fmt;
use thiserror::Error;

/// Notion API error codes as a typed vocabulary.
///
/// Instead of matching against magic strings like `"object_not_found"`,
/// callers match on variants. Codes this client does not know yet are kept
/// verbatim in `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotionErrorCode {
    /// API rate limit exceeded
    RateLimited,
    /// The requested object does not exist or is inaccessible
    ObjectNotFound,
    /// API key is invalid or expired
    Unauthorized,
    /// API key lacks permission for this resource
    RestrictedResource,
    /// Request body contains invalid JSON
    InvalidJson,
    /// The request URL is not a valid endpoint
    InvalidRequestUrl,
    /// The request is not supported
    InvalidRequest,
    /// Request parameters failed Notion's validation
    ValidationFailed,
    /// Missing or unsupported `Notion-Version` header
    MissingVersion,
    /// Conflict with current state of the resource
    Conflict,
    /// Notion internal server error
    InternalError,
    /// Notion is temporarily unavailable
    ServiceUnavailable,
    /// HTTP status code fallback when the error body is unparseable
    HttpStatus(u16),
    /// An error code this client doesn't recognize yet
    Unknown(String),
}

impl NotionErrorCode {
    /// Parse a Notion API error code string into the typed vocabulary.
    pub fn from_api_response(code: &str) -> Self {
        match code {
            "rate_limited" => Self::RateLimited,
            "object_not_found" => Self::ObjectNotFound,
            "unauthorized" => Self::Unauthorized,
            "restricted_resource" => Self::RestrictedResource,
            "invalid_json" => Self::InvalidJson,
            "invalid_request_url" => Self::InvalidRequestUrl,
            "invalid_request" => Self::InvalidRequest,
            "validation_error" => Self::ValidationFailed,
            "missing_version" => Self::MissingVersion,
            "conflict_error" => Self::Conflict,
            "internal_server_error" => Self::InternalError,
            "service_unavailable" => Self::ServiceUnavailable,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Create from an HTTP status code when the error body is unparseable.
    pub fn from_http_status(status: u16) -> Self {
        Self::HttpStatus(status)
    }

    /// Whether this error means the resource simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ObjectNotFound | Self::HttpStatus(404))
    }

    /// Whether the integration token was rejected or lacks access.
    pub fn is_access_denied(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized | Self::RestrictedResource | Self::HttpStatus(401 | 403)
        )
    }
}

impl fmt::Display for NotionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ObjectNotFound => write!(f, "object_not_found"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::RestrictedResource => write!(f, "restricted_resource"),
            Self::InvalidJson => write!(f, "invalid_json"),
            Self::InvalidRequestUrl => write!(f, "invalid_request_url"),
            Self::InvalidRequest => write!(f, "invalid_request"),
            Self::ValidationFailed => write!(f, "validation_error"),
            Self::MissingVersion => write!(f, "missing_version"),
            Self::Conflict => write!(f, "conflict_error"),
            Self::InternalError => write!(f, "internal_server_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(code) => write!(f, "{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Notion API returned an error ({status} {code}): {message}")]
    NotionService {
        status: u16,
        code: NotionErrorCode,
        message: String,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("{0} is not a supported property type")]
    UnsupportedPropertyType(String),

    #[error("{0} is not a supported rich text type")]
    UnsupportedSpanType(String),

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),
}

impl AppError {
    /// Builds a `MalformedResponse` for a field that is missing or has the wrong type.
    pub(crate) fn malformed_field(field: &str, expected: &str) -> Self {
        AppError::MalformedResponse(format!("field '{}' should be {}", field, expected))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_vocabulary() {
        assert_eq!(
            NotionErrorCode::from_api_response("object_not_found"),
            NotionErrorCode::ObjectNotFound
        );
        assert_eq!(
            NotionErrorCode::from_api_response("brand_new_code"),
            NotionErrorCode::Unknown("brand_new_code".to_string())
        );
        assert_eq!(NotionErrorCode::HttpStatus(502).to_string(), "http_502");
        assert_eq!(NotionErrorCode::ValidationFailed.to_string(), "validation_error");
    }

    #[test]
    fn test_error_code_classification() {
        assert!(NotionErrorCode::ObjectNotFound.is_not_found());
        assert!(NotionErrorCode::from_http_status(404).is_not_found());
        assert!(NotionErrorCode::RestrictedResource.is_access_denied());
        assert!(!NotionErrorCode::RateLimited.is_access_denied());
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::NotionService {
            status: 404,
            code: NotionErrorCode::ObjectNotFound,
            message: "Could not find block".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Notion API returned an error (404 object_not_found): Could not find block"
        );
        assert_eq!(
            AppError::UnsupportedPropertyType("status".to_string()).to_string(),
            "status is not a supported property type"
        );
    }
}
