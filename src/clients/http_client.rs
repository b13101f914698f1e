//! HTTP client for LinkedIn API communication.
//!
//! This module provides the [`HttpClient`] type, the reqwest-backed
//! [`WebRequestor`].

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::{HttpError, InvalidHttpRequestError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{HttpRequest, RequestBody};
use crate::clients::http_response::HttpResponse;
use crate::clients::web_requestor::WebRequestor;
use crate::config::{ApiVersion, LinkedInConfig};
use crate::error::ConfigError;

/// Fixed retry wait time in seconds when no `Retry-After` is given.
pub const RETRY_WAIT_TIME: u64 = 1;

/// Upper bound on a server-requested `Retry-After` wait, in seconds.
pub const MAX_RETRY_WAIT_SECS: f64 = 300.0;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the Rest.li protocol version.
pub const RESTLI_PROTOCOL_HEADER: &str = "X-Restli-Protocol-Version";

/// Header selecting the versioned API month.
pub const LINKEDIN_VERSION_HEADER: &str = "Linkedin-Version";

/// HTTP client for making requests to the LinkedIn API.
///
/// The client handles:
/// - URL construction against the configured API base URL
/// - Default headers (`User-Agent`, `Accept`, bearer token, Rest.li protocol)
/// - The `Linkedin-Version` header on versioned (`/rest/...`) endpoints
/// - JSON, form, binary, and multipart bodies
/// - Opt-in retries for 429 and 5xx responses
///
/// Connect and request timeouts come from [`LinkedInConfig`] and are fixed
/// for the lifetime of the client.
///
/// # Example
///
/// ```rust,ignore
/// use linkedin_api::{LinkedInConfig, AccessToken};
/// use linkedin_api::clients::{HttpClient, HttpRequest, HttpMethod, WebRequestor};
///
/// let config = LinkedInConfig::builder()
///     .access_token(AccessToken::new("token")?)
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "v2/userinfo").build()?;
/// let response = client.execute(request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_uri: String,
    api_version: ApiVersion,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the underlying reqwest client
    /// cannot be created (e.g. TLS initialization failure).
    pub fn new(config: &LinkedInConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}LinkedIn API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(RESTLI_PROTOCOL_HEADER.to_string(), "2.0.0".to_string());

        if let Some(token) = config.access_token() {
            default_headers.insert("Authorization".to_string(), token.bearer());
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConfigError::HttpClient {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_uri: config.api_base_url().to_string(),
            api_version: *config.api_version(),
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the API version sent on versioned endpoints.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Resolves the full request URL, including the query string.
    #[must_use]
    pub fn build_url(&self, request: &HttpRequest) -> String {
        let base = if request.is_absolute() {
            request.path.clone()
        } else {
            format!("{}/{}", self.base_uri, request.path.trim_start_matches('/'))
        };

        if !request.has_query() {
            return base;
        }
        let separator = if base.contains('?') { '&' } else { '?' };
        format!("{base}{separator}{}", request.query_string())
    }

    /// Returns `true` if the URL targets a versioned `/rest/` endpoint on
    /// the configured API host.
    #[must_use]
    pub fn is_versioned_endpoint(&self, url: &str) -> bool {
        url.strip_prefix(&self.base_uri)
            .is_some_and(|rest| rest.starts_with("/rest/"))
    }

    fn headers_for(&self, request: &HttpRequest, url: &str) -> HashMap<String, String> {
        let mut headers = self.default_headers.clone();
        if self.is_versioned_endpoint(url) {
            headers.insert(
                LINKEDIN_VERSION_HEADER.to_string(),
                self.api_version.to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }
        headers
    }

    fn attach_body(
        builder: reqwest::RequestBuilder,
        body: &RequestBody,
    ) -> Result<reqwest::RequestBuilder, HttpError> {
        let builder = match body {
            RequestBody::Json(value) => builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(value.to_string()),
            RequestBody::Form(fields) => builder.form(fields),
            RequestBody::Binary { data, content_type } => builder
                .header(reqwest::header::CONTENT_TYPE, content_type.as_str())
                .body(data.clone()),
            RequestBody::Multipart {
                fields,
                attachments,
            } => {
                let mut form = reqwest::multipart::Form::new();
                for (name, value) in fields {
                    form = form.text(name.clone(), value.clone());
                }
                for attachment in attachments {
                    let part = reqwest::multipart::Part::bytes(attachment.data.clone())
                        .file_name(attachment.filename.clone())
                        .mime_str(&attachment.content_type)
                        .map_err(|_| InvalidHttpRequestError::InvalidContentType {
                            content_type: attachment.content_type.clone(),
                        })?;
                    form = form.part(attachment.field_name.clone(), part);
                }
                builder.multipart(form)
            }
        };
        Ok(builder)
    }

    /// Parses response headers into a `HashMap` with lowercase keys.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Calculates the retry delay based on response and status code.
    fn calculate_retry_delay(response: &HttpResponse) -> Duration {
        if response.code == 429 {
            if let Some(retry_after) = response.retry_request_after.filter(|s| s.is_finite()) {
                if let Ok(delay) =
                    Duration::try_from_secs_f64(retry_after.min(MAX_RETRY_WAIT_SECS))
                {
                    return delay;
                }
            }
        }
        Duration::from_secs(RETRY_WAIT_TIME)
    }

    const fn is_retryable(code: u16) -> bool {
        code == 429 || code >= 500
    }
}

impl WebRequestor for HttpClient {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.build_url(&request);
        reqwest::Url::parse(&url)
            .map_err(|_| InvalidHttpRequestError::InvalidUrl { url: url.clone() })?;
        let headers = self.headers_for(&request, &url);

        let mut tries: u32 = 0;
        loop {
            tries += 1;
            tracing::debug!("LinkedIn API {} {} (try {})", request.http_method, url, tries);

            let mut builder = self
                .client
                .request(request.http_method.as_reqwest(), &url);
            for (key, value) in &headers {
                builder = builder.header(key, value);
            }
            if let Some(body) = &request.body {
                builder = Self::attach_body(builder, body)?;
            }

            let res = builder.send().await?;
            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await?;

            let response = HttpResponse::new(code, res_headers, body_text, url.clone());

            if let Some(info) = response.deprecation_info() {
                tracing::warn!(
                    "Deprecated request to LinkedIn API at {}, deprecation: {:?}, sunset: {:?}",
                    info.url,
                    info.deprecation,
                    info.sunset
                );
            }

            if response.is_ok() || !Self::is_retryable(code) || request.tries <= 1 {
                return Ok(response);
            }

            if tries >= request.tries {
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries: request.tries,
                    response,
                }));
            }

            let delay = Self::calculate_retry_delay(&response);
            tracing::debug!(
                "Retrying {} after status {} in {:?}",
                url,
                code,
                delay
            );
            tokio::time::sleep(delay).await;
        }
    }

    fn base_url(&self) -> &str {
        &self.base_uri
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;
    use crate::config::{AccessToken, ClientId, ClientSecret};

    fn config() -> LinkedInConfig {
        LinkedInConfig::builder()
            .access_token(AccessToken::new("test-access-token").unwrap())
            .api_version("202401".parse().unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&config()).unwrap();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("LinkedIn API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = LinkedInConfig::builder()
            .access_token(AccessToken::new("t").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_bearer_and_restli_headers() {
        let client = HttpClient::new(&config()).unwrap();
        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer test-access-token".to_string())
        );
        assert_eq!(
            client.default_headers().get(RESTLI_PROTOCOL_HEADER),
            Some(&"2.0.0".to_string())
        );
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_no_authorization_header_without_token() {
        let config = LinkedInConfig::builder()
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();
        assert!(client.default_headers().get("Authorization").is_none());
    }

    #[test]
    fn test_build_url_relative_and_absolute() {
        let client = HttpClient::new(&config()).unwrap();

        let request = HttpRequest::builder(HttpMethod::Get, "/rest/posts")
            .query_param("q", "author")
            .build()
            .unwrap();
        assert_eq!(
            client.build_url(&request),
            "https://api.linkedin.com/rest/posts?q=author"
        );

        let request = HttpRequest::builder(
            HttpMethod::Get,
            "https://api.linkedin.com/rest/posts?q=author&start=10",
        )
        .query_param("count", "10")
        .build()
        .unwrap();
        assert_eq!(
            client.build_url(&request),
            "https://api.linkedin.com/rest/posts?q=author&start=10&count=10"
        );
    }

    #[test]
    fn test_linkedin_version_only_on_rest_endpoints() {
        let client = HttpClient::new(&config()).unwrap();

        let rest = HttpRequest::builder(HttpMethod::Get, "rest/posts").build().unwrap();
        let url = client.build_url(&rest);
        let headers = client.headers_for(&rest, &url);
        assert_eq!(headers.get(LINKEDIN_VERSION_HEADER), Some(&"202401".to_string()));

        let v2 = HttpRequest::builder(HttpMethod::Get, "v2/me").build().unwrap();
        let url = client.build_url(&v2);
        let headers = client.headers_for(&v2, &url);
        assert!(headers.get(LINKEDIN_VERSION_HEADER).is_none());
    }

    #[test]
    fn test_extra_headers_override_defaults() {
        let client = HttpClient::new(&config()).unwrap();
        let request = HttpRequest::builder(HttpMethod::Get, "v2/me")
            .header("Accept", "text/plain")
            .build()
            .unwrap();
        let headers = client.headers_for(&request, &client.build_url(&request));
        assert_eq!(headers.get("Accept"), Some(&"text/plain".to_string()));
    }

    #[test]
    fn test_retry_delay_uses_retry_after_for_429() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["3".to_string()]);
        let response = HttpResponse::new(429, headers.clone(), "", "");
        assert_eq!(HttpClient::calculate_retry_delay(&response), Duration::from_secs(3));

        let response = HttpResponse::new(503, headers, "", "");
        assert_eq!(
            HttpClient::calculate_retry_delay(&response),
            Duration::from_secs(RETRY_WAIT_TIME)
        );
    }

    #[test]
    fn test_retry_delay_caps_huge_retry_after() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["1e30".to_string()]);
        let response = HttpResponse::new(429, headers, "", "");
        assert_eq!(
            HttpClient::calculate_retry_delay(&response),
            Duration::from_secs_f64(MAX_RETRY_WAIT_SECS)
        );
    }

    #[test]
    fn test_retry_delay_ignores_negative_retry_after() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["-5".to_string()]);
        let response = HttpResponse::new(429, headers, "", "");
        assert_eq!(
            HttpClient::calculate_retry_delay(&response),
            Duration::from_secs(RETRY_WAIT_TIME)
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
