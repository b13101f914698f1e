//! Maps non-success responses to [`LinkedInError`] variants.

use serde_json::Value;

use crate::clients::HttpResponse;
use crate::rest::errors::{ApiErrorDetails, LinkedInError};

/// Converts an error response into a [`LinkedInError`].
///
/// [`DefaultErrorMapper`] follows LinkedIn's documented status codes.
/// Replace it to classify errors differently, e.g. by `serviceErrorCode`.
pub trait ErrorMapper: Send + Sync {
    /// Maps a non-2xx response to an error.
    fn map_error(&self, response: &HttpResponse) -> LinkedInError;
}

/// Status-code based [`ErrorMapper`].
///
/// # Example
///
/// ```rust
/// use linkedin_api::clients::HttpResponse;
/// use linkedin_api::rest::{DefaultErrorMapper, ErrorMapper};
/// use linkedin_api::LinkedInError;
/// use std::collections::HashMap;
///
/// let response = HttpResponse::new(
///     404,
///     HashMap::new(),
///     r#"{"status":404,"code":"NOT_FOUND","message":"Not found"}"#,
///     "https://api.linkedin.com/rest/posts/1",
/// );
/// let error = DefaultErrorMapper.map_error(&response);
/// assert!(matches!(error, LinkedInError::NotFound(_)));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultErrorMapper;

impl DefaultErrorMapper {
    /// Extracts [`ApiErrorDetails`] from a response.
    #[must_use]
    pub fn details(response: &HttpResponse) -> ApiErrorDetails {
        let raw: Value = if response.body.trim().is_empty() {
            Value::Object(serde_json::Map::new())
        } else {
            serde_json::from_str(&response.body)
                .unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
        };

        let service_error_code = raw
            .get("serviceErrorCode")
            .or_else(|| raw.get("errorCode"))
            .and_then(Value::as_i64);

        let code = raw
            .get("code")
            .or_else(|| raw.get("error"))
            .and_then(Value::as_str)
            .map(ToString::to_string);

        let message = raw
            .get("message")
            .or_else(|| raw.get("error_description"))
            .and_then(Value::as_str)
            .map(ToString::to_string)
            .or_else(|| {
                let text = response.body.trim();
                (!text.is_empty() && !raw.as_object().is_some_and(|m| !m.is_empty()))
                    .then(|| text.chars().take(500).collect())
            })
            .unwrap_or_else(|| default_message(response.code).to_string());

        let request_id = response
            .request_id()
            .map(ToString::to_string)
            .or_else(|| {
                raw.get("requestId")
                    .and_then(Value::as_str)
                    .map(ToString::to_string)
            });

        ApiErrorDetails {
            status: response.code,
            service_error_code,
            code,
            message,
            request_id,
            raw,
        }
    }
}

impl ErrorMapper for DefaultErrorMapper {
    fn map_error(&self, response: &HttpResponse) -> LinkedInError {
        let details = Self::details(response);
        match response.code {
            400 => LinkedInError::QueryParse(details),
            401 => LinkedInError::OAuth(details),
            404 => LinkedInError::NotFound(details),
            429 => LinkedInError::RateLimit {
                details,
                retry_after: response.retry_request_after,
            },
            502 => LinkedInError::BadGateway(details),
            504 => LinkedInError::GatewayTimeout(details),
            500..=599 => LinkedInError::InternalServer(details),
            _ => LinkedInError::Api(details),
        }
    }
}

const fn default_message(status: u16) -> &'static str {
    match status {
        400 => "Bad request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not found",
        429 => "Too many requests",
        502 => "Bad gateway",
        504 => "Gateway timeout",
        500..=599 => "Server error",
        _ => "Unexpected response",
    }
}
