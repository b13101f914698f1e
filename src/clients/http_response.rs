//! HTTP response types for the LinkedIn API SDK.
//!
//! [`HttpResponse`] keeps the raw body text for the JSON mapper and
//! captures the headers LinkedIn uses to return out-of-band data:
//!
//! | Header | Meaning |
//! |---|---|
//! | `x-restli-id` / `x-linkedin-id` | id of an entity created by POST |
//! | `x-li-uuid` | request id to quote in support tickets |
//! | `retry-after` | seconds to wait after a 429 |
//! | `etag` | part id returned by a video upload |
//! | `location` | URL of a created entity |
//! | `x-linkedin-deprecated` / `deprecation` / `sunset` | notices for retiring API versions |

use std::collections::HashMap;

/// Information about a deprecated API version or endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiDeprecationInfo {
    /// Value of the `x-linkedin-deprecated` header, or `deprecation` when absent.
    pub deprecation: Option<String>,
    /// Value of the `sunset` header.
    pub sunset: Option<String>,
    /// The request URL that triggered the notice.
    pub url: String,
}

/// An HTTP response from the LinkedIn API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
    /// The absolute URL that was requested, including the query string.
    pub url: String,
    /// Seconds to wait before retrying (from `Retry-After`).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    ///
    /// Header names are expected to be lowercase already.
    #[must_use]
    pub fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.trim().parse::<f64>().ok());

        Self {
            code,
            headers,
            body: body.into(),
            url: url.into(),
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header (case-insensitive name).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the parsed JSON body.
    ///
    /// An empty or non-JSON body yields an empty object; the raw text is
    /// still available in [`body`](Self::body).
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        if self.body.trim().is_empty() {
            return serde_json::json!({});
        }
        serde_json::from_str(&self.body).unwrap_or_else(|_| serde_json::json!({}))
    }

    /// Returns the id of an entity created by the request, from
    /// `x-restli-id` or `x-linkedin-id`.
    #[must_use]
    pub fn created_entity_id(&self) -> Option<&str> {
        self.header("x-restli-id")
            .or_else(|| self.header("x-linkedin-id"))
    }

    /// Returns the LinkedIn request id (`x-li-uuid`), if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-li-uuid")
    }

    /// Returns the `ETag` header with surrounding quotes removed.
    #[must_use]
    pub fn etag(&self) -> Option<&str> {
        self.header("etag").map(|v| v.trim_matches('"'))
    }

    /// Returns the `Location` header, if present.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.header("location")
    }

    /// Returns deprecation details if LinkedIn flagged the request.
    #[must_use]
    pub fn deprecation_info(&self) -> Option<ApiDeprecationInfo> {
        let deprecation = self
            .header("x-linkedin-deprecated")
            .or_else(|| self.header("deprecation"))
            .map(ToString::to_string);
        let sunset = self.header("sunset").map(ToString::to_string);
        if deprecation.is_none() && sunset.is_none() {
            return None;
        }
        Some(ApiDeprecationInfo {
            deprecation,
            sunset,
            url: self.url.clone(),
        })
    }

    /// Returns `true` if the response carries a deprecation notice.
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        self.deprecation_info().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_header(name: &str, value: &str) -> HttpResponse {
        let mut headers = HashMap::new();
        headers.insert(name.to_string(), vec![value.to_string()]);
        HttpResponse::new(200, headers, "", "https://api.linkedin.com/rest/posts")
    }

    #[test]
    fn test_is_ok_boundaries() {
        for code in [200, 201, 204, 299] {
            assert!(HttpResponse::new(code, HashMap::new(), "", "").is_ok());
        }
        for code in [199, 300, 400, 429, 500] {
            assert!(!HttpResponse::new(code, HashMap::new(), "", "").is_ok());
        }
    }

    #[test]
    fn test_created_entity_id_prefers_restli_header() {
        let response = with_header("x-restli-id", "urn:li:share:123");
        assert_eq!(response.created_entity_id(), Some("urn:li:share:123"));

        let response = with_header("x-linkedin-id", "urn:li:ugcPost:9");
        assert_eq!(response.created_entity_id(), Some("urn:li:ugcPost:9"));
    }

    #[test]
    fn test_retry_after_parsing() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["2.5".to_string()]);
        let response = HttpResponse::new(429, headers, "", "");
        assert!((response.retry_request_after.unwrap() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_etag_is_unquoted() {
        let response = with_header("etag", "\"/ambry-video/signedId\"");
        assert_eq!(response.etag(), Some("/ambry-video/signedId"));
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = with_header("x-li-uuid", "abc");
        assert_eq!(response.header("X-LI-UUID"), Some("abc"));
        assert_eq!(response.request_id(), Some("abc"));
    }

    #[test]
    fn test_json_body_falls_back_to_empty_object() {
        let response = HttpResponse::new(200, HashMap::new(), "", "");
        assert_eq!(response.json(), serde_json::json!({}));

        let response = HttpResponse::new(502, HashMap::new(), "<html>Bad</html>", "");
        assert_eq!(response.json(), serde_json::json!({}));
        assert_eq!(response.body, "<html>Bad</html>");

        let response = HttpResponse::new(200, HashMap::new(), r#"{"id":1}"#, "");
        assert_eq!(response.json()["id"], 1);
    }

    #[test]
    fn test_deprecation_info() {
        let response = with_header("sunset", "Tue, 01 Jul 2025 00:00:00 GMT");
        let info = response.deprecation_info().unwrap();
        assert_eq!(info.sunset.as_deref(), Some("Tue, 01 Jul 2025 00:00:00 GMT"));
        assert!(info.deprecation.is_none());
        assert!(response.is_deprecated());

        let response = HttpResponse::new(200, HashMap::new(), "", "");
        assert!(!response.is_deprecated());
    }

    #[test]
    fn test_linkedin_deprecated_header() {
        let response = with_header("x-linkedin-deprecated", "true");
        let info = response.deprecation_info().unwrap();
        assert_eq!(info.deprecation.as_deref(), Some("true"));
        assert!(info.sunset.is_none());
        assert_eq!(info.url, "https://api.linkedin.com/rest/posts");
    }
}
