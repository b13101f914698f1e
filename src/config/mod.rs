//! Configuration types for the LinkedIn API SDK.
//!
//! # Overview
//!
//! - [`LinkedInConfig`]: The main configuration struct holding all SDK settings
//! - [`LinkedInConfigBuilder`]: A builder for constructing [`LinkedInConfig`] instances
//! - [`ClientId`] / [`ClientSecret`]: Application credentials for OAuth
//! - [`AccessToken`]: The bearer token used for API calls
//! - [`RedirectUri`]: A validated OAuth redirect URI
//! - [`ApiVersion`]: The `Linkedin-Version` header value
//!
//! # Example
//!
//! ```rust
//! use linkedin_api::{LinkedInConfig, AccessToken, ApiVersion};
//! use std::time::Duration;
//!
//! let config = LinkedInConfig::builder()
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, ClientId, ClientSecret, RedirectUri};
pub use version::ApiVersion;

use std::time::Duration;

use url::Url;

use crate::auth::AuthScopes;
use crate::error::ConfigError;

/// Default base URL of the LinkedIn API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.linkedin.com";

/// Default base URL of LinkedIn's OAuth 2.0 endpoints.
pub const DEFAULT_OAUTH_BASE_URL: &str = "https://www.linkedin.com/oauth/v2";

/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default whole-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for the LinkedIn API SDK.
///
/// Holds credentials, OAuth settings, endpoint URLs, and transport
/// timeouts. Timeouts are applied once when an HTTP client is created.
///
/// # Thread Safety
///
/// `LinkedInConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use linkedin_api::{LinkedInConfig, ClientId, ClientSecret, RedirectUri};
///
/// let config = LinkedInConfig::builder()
///     .client_id(ClientId::new("client-id").unwrap())
///     .client_secret(ClientSecret::new("client-secret").unwrap())
///     .redirect_uri(RedirectUri::new("https://myapp.example.com/callback").unwrap())
///     .scopes("openid profile w_member_social".parse().unwrap())
///     .build()
///     .unwrap();
///
/// assert!(config.access_token().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct LinkedInConfig {
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    access_token: Option<AccessToken>,
    redirect_uri: Option<RedirectUri>,
    scopes: AuthScopes,
    api_version: ApiVersion,
    api_base_url: String,
    oauth_base_url: String,
    connect_timeout: Duration,
    timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl LinkedInConfig {
    /// Creates a new builder for constructing a `LinkedInConfig`.
    #[must_use]
    pub fn builder() -> LinkedInConfigBuilder {
        LinkedInConfigBuilder::new()
    }

    /// Returns the client ID, if configured.
    #[must_use]
    pub const fn client_id(&self) -> Option<&ClientId> {
        self.client_id.as_ref()
    }

    /// Returns the client secret, if configured.
    #[must_use]
    pub const fn client_secret(&self) -> Option<&ClientSecret> {
        self.client_secret.as_ref()
    }

    /// Returns the access token, if configured.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the OAuth redirect URI, if configured.
    #[must_use]
    pub const fn redirect_uri(&self) -> Option<&RedirectUri> {
        self.redirect_uri.as_ref()
    }

    /// Returns the OAuth scopes requested during authorization.
    #[must_use]
    pub const fn scopes(&self) -> &AuthScopes {
        &self.scopes
    }

    /// Returns the API version sent in the `Linkedin-Version` header.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the API base URL without a trailing slash.
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Returns the OAuth base URL without a trailing slash.
    #[must_use]
    pub fn oauth_base_url(&self) -> &str {
        &self.oauth_base_url
    }

    /// Returns the connect timeout.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Returns the whole-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns a copy of this configuration using a different access token.
    ///
    /// Useful after refreshing a token.
    #[must_use]
    pub fn with_access_token(&self, token: AccessToken) -> Self {
        Self {
            access_token: Some(token),
            ..self.clone()
        }
    }
}

// Verify LinkedInConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LinkedInConfig>();
};

/// Builder for constructing [`LinkedInConfig`] instances.
///
/// Either an `access_token` (for API calls) or a `client_id` plus
/// `client_secret` pair (for OAuth) must be provided.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::latest()`]
/// - `api_base_url`: [`DEFAULT_API_BASE_URL`]
/// - `oauth_base_url`: [`DEFAULT_OAUTH_BASE_URL`]
/// - `connect_timeout`: 10 seconds
/// - `timeout`: 60 seconds
/// - `scopes`: Empty
#[derive(Debug, Default)]
pub struct LinkedInConfigBuilder {
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    access_token: Option<AccessToken>,
    redirect_uri: Option<RedirectUri>,
    scopes: Option<AuthScopes>,
    api_version: Option<ApiVersion>,
    api_base_url: Option<String>,
    oauth_base_url: Option<String>,
    connect_timeout: Option<Duration>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl LinkedInConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the application client ID.
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the application client secret.
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Sets the access token used for API calls.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the OAuth redirect URI.
    #[must_use]
    pub fn redirect_uri(mut self, uri: RedirectUri) -> Self {
        self.redirect_uri = Some(uri);
        self
    }

    /// Sets the OAuth scopes.
    #[must_use]
    pub fn scopes(mut self, scopes: AuthScopes) -> Self {
        self.scopes = Some(scopes);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Overrides the API base URL (e.g. for a proxy or a mock server).
    #[must_use]
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Overrides the OAuth base URL.
    #[must_use]
    pub fn oauth_base_url(mut self, url: impl Into<String>) -> Self {
        self.oauth_base_url = Some(url.into());
        self
    }

    /// Sets the connect timeout.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the whole-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`LinkedInConfig`].
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingRequiredField`] if neither an access token nor
    ///   a complete client credential pair is set
    /// - [`ConfigError::InvalidBaseUrl`] if a base URL override is not an
    ///   absolute http(s) URL
    pub fn build(self) -> Result<LinkedInConfig, ConfigError> {
        if self.access_token.is_none() {
            if self.client_id.is_none() {
                return Err(ConfigError::MissingRequiredField { field: "client_id" });
            }
            if self.client_secret.is_none() {
                return Err(ConfigError::MissingRequiredField {
                    field: "client_secret",
                });
            }
        }

        let api_base_url = normalize_base_url(
            self.api_base_url
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        )?;
        let oauth_base_url = normalize_base_url(
            self.oauth_base_url
                .unwrap_or_else(|| DEFAULT_OAUTH_BASE_URL.to_string()),
        )?;

        Ok(LinkedInConfig {
            client_id: self.client_id,
            client_secret: self.client_secret,
            access_token: self.access_token,
            redirect_uri: self.redirect_uri,
            scopes: self.scopes.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            api_base_url,
            oauth_base_url,
            connect_timeout: self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

fn normalize_base_url(url: String) -> Result<String, ConfigError> {
    let trimmed = url.trim().trim_end_matches('/').to_string();
    match Url::parse(&trimmed) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(trimmed),
        _ => Err(ConfigError::InvalidBaseUrl { url }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> AccessToken {
        AccessToken::new("token").unwrap()
    }

    #[test]
    fn test_builder_requires_token_or_credentials() {
        let result = LinkedInConfigBuilder::new().build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "client_id" })
        ));

        let result = LinkedInConfigBuilder::new()
            .client_id(ClientId::new("id").unwrap())
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "client_secret"
            })
        ));
    }

    #[test]
    fn test_builder_accepts_access_token_only() {
        let config = LinkedInConfig::builder().access_token(token()).build().unwrap();
        assert_eq!(config.access_token(), Some(&token()));
        assert!(config.client_id().is_none());
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = LinkedInConfig::builder().access_token(token()).build().unwrap();

        assert_eq!(config.api_version(), &ApiVersion::latest());
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(config.oauth_base_url(), DEFAULT_OAUTH_BASE_URL);
        assert_eq!(config.connect_timeout(), DEFAULT_CONNECT_TIMEOUT);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert!(config.scopes().is_empty());
        assert!(config.redirect_uri().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = LinkedInConfig::builder()
            .access_token(token())
            .api_base_url("http://127.0.0.1:8080/")
            .build()
            .unwrap();
        assert_eq!(config.api_base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = LinkedInConfig::builder()
            .access_token(token())
            .api_base_url("api.linkedin.com")
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_with_access_token_replaces_token() {
        let config = LinkedInConfig::builder()
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .build()
            .unwrap();
        assert!(config.access_token().is_none());

        let updated = config.with_access_token(token());
        assert_eq!(updated.access_token(), Some(&token()));
        assert_eq!(updated.client_id(), config.client_id());
    }

    #[test]
    fn test_config_debug_does_not_leak_secrets() {
        let config = LinkedInConfig::builder()
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("very-secret").unwrap())
            .access_token(AccessToken::new("very-token").unwrap())
            .build()
            .unwrap();
        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("LinkedInConfig"));
        assert!(!debug_str.contains("very-secret"));
        assert!(!debug_str.contains("very-token"));
    }
}
