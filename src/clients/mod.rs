//! HTTP transport for LinkedIn API communication.
//!
//! This module provides the foundational HTTP layer. It builds requests,
//! encodes bodies (JSON, form, raw binary, multipart), and captures the
//! response status, headers, and body text.
//!
//! # Overview
//!
//! - [`WebRequestor`]: The transport trait the API client is generic over
//! - [`HttpClient`]: The reqwest-backed implementation
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A response with captured LinkedIn headers
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`] / [`RequestBody`]: Request body kinds
//! - [`BinaryAttachment`]: A file part of a multipart upload
//!
//! # Example
//!
//! ```rust,ignore
//! use linkedin_api::clients::{HttpClient, HttpRequest, HttpMethod, WebRequestor};
//!
//! let client = HttpClient::new(&config)?;
//! let request = HttpRequest::builder(HttpMethod::Get, "rest/organizations/2414183").build()?;
//! let response = client.execute(request).await?;
//! println!("{}: {}", response.code, response.body);
//! ```
//!
//! # Retry Behavior
//!
//! The default `tries` is 1, meaning no automatic retries. A request built
//! with `.tries(n)` retries 429 responses after `Retry-After` (or 1 second)
//! and 5xx responses after 1 second.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod web_requestor;

pub use errors::{HttpError, InvalidHttpRequestError, MaxHttpRetriesExceededError};
pub use http_client::{
    HttpClient, LINKEDIN_VERSION_HEADER, RESTLI_PROTOCOL_HEADER, RETRY_WAIT_TIME, SDK_VERSION,
};
pub use http_request::{
    BinaryAttachment, DataType, HttpMethod, HttpRequest, HttpRequestBuilder, RequestBody,
};
pub use http_response::{ApiDeprecationInfo, HttpResponse};
pub use web_requestor::WebRequestor;
