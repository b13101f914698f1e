//! HTTP transport error types.
//!
//! Non-2xx responses are *not* transport errors: they come back as
//! [`HttpResponse`](crate::clients::HttpResponse) values and are classified
//! one layer up by an [`ErrorMapper`](crate::rest::ErrorMapper). The types
//! here cover failures before or around the exchange itself:
//!
//! - [`MaxHttpRetriesExceededError`]: Opt-in retries were exhausted
//! - [`InvalidHttpRequestError`]: A request failed validation before sending
//! - [`HttpError`]: Unified error type for the transport layer
//!
//! # Example
//!
//! ```rust,ignore
//! use linkedin_api::clients::{HttpClient, HttpError, WebRequestor};
//!
//! match client.execute(request).await {
//!     Ok(response) => println!("Status {}", response.code),
//!     Err(HttpError::MaxRetries(e)) => println!("Gave up after {} tries", e.tries),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::http_response::HttpResponse;

/// Error returned when maximum retry attempts have been exhausted.
///
/// Only produced when a request was built with `tries > 1` and every
/// attempt ended in a 429 or 5xx response. The last response is kept so
/// the REST layer can still classify it.
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last status {code}: {}", .response.body)]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response.
    pub code: u16,
    /// The number of tries that were attempted.
    pub tries: u32,
    /// The last response received.
    pub response: HttpResponse,
}

/// Error returned when an HTTP request fails validation.
///
/// # Example
///
/// ```rust
/// use linkedin_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A multipart body was built without any attachment.
    #[error("A multipart body needs at least one attachment.")]
    EmptyMultipart,

    /// A content type could not be parsed as a MIME type.
    #[error("Invalid content type '{content_type}'.")]
    InvalidContentType {
        /// The rejected content type.
        content_type: String,
    },

    /// The request URL could not be built.
    #[error("Invalid request URL '{url}'.")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
    },
}

/// Unified error type for the HTTP transport layer.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Maximum retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error, including timeouts and unreadable bodies.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
