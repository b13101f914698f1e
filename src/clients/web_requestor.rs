//! The transport seam.

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;

/// Executes HTTP requests on behalf of a [`LinkedInClient`](crate::LinkedInClient).
///
/// [`HttpClient`](crate::clients::HttpClient) is the production
/// implementation. Tests and alternative transports implement this trait
/// and plug into the client's `R` type parameter.
///
/// Implementations return non-2xx responses as `Ok`; status classification
/// happens in the error mapper.
///
/// # Example
///
/// ```rust
/// use linkedin_api::clients::{HttpError, HttpRequest, HttpResponse, WebRequestor};
/// use std::collections::HashMap;
///
/// struct Canned;
///
/// impl WebRequestor for Canned {
///     async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::new(200, HashMap::new(), "{}", request.path))
///     }
///
///     fn base_url(&self) -> &str {
///         "https://api.linkedin.com"
///     }
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait WebRequestor: Send + Sync {
    /// Sends a request and returns the full response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for invalid requests, network failures, or
    /// exhausted retries.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;

    /// Returns the base URL relative paths are resolved against.
    fn base_url(&self) -> &str;
}
