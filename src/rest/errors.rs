//! The LinkedIn API error taxonomy.
//!
//! Failed API calls surface as [`LinkedInError`]. Status-derived variants
//! carry [`ApiErrorDetails`], which keeps the raw error JSON for inspection:
//!
//! | Status | Variant |
//! |---|---|
//! | 400 | [`LinkedInError::QueryParse`] |
//! | 401 | [`LinkedInError::OAuth`] |
//! | 404 | [`LinkedInError::NotFound`] |
//! | 429 | [`LinkedInError::RateLimit`] |
//! | 502 | [`LinkedInError::BadGateway`] |
//! | 504 | [`LinkedInError::GatewayTimeout`] |
//! | 500, other 5xx | [`LinkedInError::InternalServer`] |
//! | anything else | [`LinkedInError::Api`] |
//!
//! # Example
//!
//! ```rust,ignore
//! use linkedin_api::LinkedInError;
//!
//! match client.fetch_object::<Organization>("rest/organizations/1", &[]).await {
//!     Ok(org) => println!("{:?}", org.localized_name),
//!     Err(LinkedInError::NotFound(details)) => println!("gone: {}", details.message),
//!     Err(LinkedInError::RateLimit { retry_after, .. }) => println!("wait {retry_after:?}"),
//!     Err(e) => println!("other error: {e}"),
//! }
//! ```

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::clients::{HttpError, InvalidHttpRequestError};
use crate::json::JsonMappingError;
use crate::rest::error_mapper::{DefaultErrorMapper, ErrorMapper};
use crate::urn::UrnError;

/// Details of an error response returned by LinkedIn.
///
/// LinkedIn error bodies look like
/// `{"status":404,"serviceErrorCode":100,"code":"NOT_FOUND","message":"..."}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiErrorDetails {
    /// HTTP status code of the response.
    pub status: u16,
    /// LinkedIn's numeric service error code, if present.
    pub service_error_code: Option<i64>,
    /// Symbolic error code (e.g. `NOT_FOUND`, `invalid_request`), if present.
    pub code: Option<String>,
    /// Human readable error message.
    pub message: String,
    /// Request id from `x-li-uuid` or the body's `requestId`.
    pub request_id: Option<String>,
    /// The raw error JSON (an empty object when the body was not JSON).
    pub raw: Value,
}

impl fmt::Display for ApiErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(code) = &self.code {
            write!(f, " {code}")?;
        }
        write!(f, ": {}", self.message)?;
        if let Some(service_code) = self.service_error_code {
            write!(f, " (serviceErrorCode {service_code})")?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " [request id {request_id}]")?;
        }
        Ok(())
    }
}

/// Error type for LinkedIn API operations.
#[derive(Debug, Error)]
pub enum LinkedInError {
    /// The request was malformed or a query parameter was rejected (HTTP 400).
    #[error("Query parse error: {0}")]
    QueryParse(ApiErrorDetails),

    /// The access token is missing, invalid, or expired (HTTP 401).
    #[error("OAuth error: {0}")]
    OAuth(ApiErrorDetails),

    /// The requested entity does not exist (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(ApiErrorDetails),

    /// The application or member throttle was hit (HTTP 429).
    #[error("Rate limit exceeded: {details}")]
    RateLimit {
        /// Error details.
        details: ApiErrorDetails,
        /// Seconds to wait, from `Retry-After`, if provided.
        retry_after: Option<f64>,
    },

    /// LinkedIn failed internally (HTTP 500 and unclassified 5xx).
    #[error("Internal server error: {0}")]
    InternalServer(ApiErrorDetails),

    /// An upstream gateway failed (HTTP 502).
    #[error("Bad gateway: {0}")]
    BadGateway(ApiErrorDetails),

    /// An upstream gateway timed out (HTTP 504).
    #[error("Gateway timeout: {0}")]
    GatewayTimeout(ApiErrorDetails),

    /// Any other non-success status.
    #[error("API error: {0}")]
    Api(ApiErrorDetails),

    /// The request never produced a response (connection failure, timeout,
    /// unreadable body).
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The request failed validation before it was sent.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),


    /// The response body could not be mapped to the requested type.
    #[error(transparent)]
    JsonMapping(#[from] JsonMappingError),

    /// A URN in a response could not be parsed.
    #[error(transparent)]
    InvalidUrn(#[from] UrnError),

    /// A header LinkedIn always sends for this operation was absent.
    #[error("Expected response header '{header}' was missing")]
    MissingHeader {
        /// Name of the header.
        header: &'static str,
    },
}

impl From<HttpError> for LinkedInError {
    fn from(error: HttpError) -> Self {
        match error {
            HttpError::Network(e) => Self::Network(e),
            HttpError::InvalidRequest(e) => Self::InvalidRequest(e),
            HttpError::MaxRetries(e) => DefaultErrorMapper.map_error(&e.response),
        }
    }
}

impl LinkedInError {
    /// Returns the error details for status-derived variants.
    #[must_use]
    pub const fn details(&self) -> Option<&ApiErrorDetails> {
        match self {
            Self::QueryParse(d)
            | Self::OAuth(d)
            | Self::NotFound(d)
            | Self::InternalServer(d)
            | Self::BadGateway(d)
            | Self::GatewayTimeout(d)
            | Self::Api(d)
            | Self::RateLimit { details: d, .. } => Some(d),
            _ => None,
        }
    }

    /// Returns the HTTP status for status-derived variants.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.details().map(|d| d.status)
    }

    /// Returns the LinkedIn request id, if known.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.details().and_then(|d| d.request_id.as_deref())
    }

    /// Returns the raw error JSON, if the error came from a response.
    #[must_use]
    pub fn raw_error(&self) -> Option<&Value> {
        self.details().map(|d| &d.raw)
    }

    /// Returns `true` for failures that did not produce a response.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

// Verify LinkedInError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LinkedInError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpResponse, MaxHttpRetriesExceededError};
    use serde_json::json;
    use std::collections::HashMap;

    fn details(status: u16) -> ApiErrorDetails {
        ApiErrorDetails {
            status,
            service_error_code: Some(100),
            code: Some("NOT_FOUND".to_string()),
            message: "Not enough permissions".to_string(),
            request_id: Some("req-1".to_string()),
            raw: json!({"status": status}),
        }
    }

    #[test]
    fn test_details_display_includes_all_parts() {
        let text = details(404).to_string();
        assert!(text.contains("HTTP 404"));
        assert!(text.contains("NOT_FOUND"));
        assert!(text.contains("Not enough permissions"));
        assert!(text.contains("serviceErrorCode 100"));
        assert!(text.contains("req-1"));
    }

    #[test]
    fn test_accessors_on_status_variants() {
        let error = LinkedInError::RateLimit {
            details: details(429),
            retry_after: Some(2.0),
        };
        assert_eq!(error.status(), Some(429));
        assert_eq!(error.request_id(), Some("req-1"));
        assert_eq!(error.raw_error(), Some(&json!({"status": 429})));
        assert!(!error.is_network());
    }

    #[test]
    fn test_exhausted_retries_map_last_response() {
        let mut headers = HashMap::new();
        headers.insert("x-li-uuid".to_string(), vec!["abc".to_string()]);
        let response = HttpResponse::new(
            503,
            headers,
            r#"{"status":503,"message":"Try later"}"#,
            "https://api.linkedin.com/rest/posts",
        );
        let error: LinkedInError = HttpError::MaxRetries(MaxHttpRetriesExceededError {
            code: 503,
            tries: 3,
            response,
        })
        .into();
        assert!(matches!(error, LinkedInError::InternalServer(_)));
        assert_eq!(error.status(), Some(503));
        assert_eq!(error.request_id(), Some("abc"));
        assert_eq!(
            error.raw_error(),
            Some(&json!({"status": 503, "message": "Try later"}))
        );
    }

    #[test]
    fn test_missing_header_message() {
        let error = LinkedInError::MissingHeader {
            header: "x-restli-id",
        };
        assert!(error.to_string().contains("x-restli-id"));
        assert!(error.status().is_none());
    }
}
