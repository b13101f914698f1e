//! Access token responses and their expiry bookkeeping.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::AuthScopes;
use crate::config::AccessToken;
use crate::error::ConfigError;

/// The JSON body returned by LinkedIn's `accessToken` endpoint.
///
/// `expires_in` and `refresh_token_expires_in` are lifetimes in seconds.
/// `scope` is comma separated.
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct TokenResponse {
    /// The access token.
    pub access_token: String,
    /// Seconds until the access token expires.
    pub expires_in: i64,
    /// The refresh token, for applications enabled for programmatic refresh.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Seconds until the refresh token expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token_expires_in: Option<i64>,
    /// Granted scopes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// OpenID Connect ID token, present when `openid` was granted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    /// Token type, `Bearer`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"*****")
            .field("expires_in", &self.expires_in)
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "*****"))
            .field("refresh_token_expires_in", &self.refresh_token_expires_in)
            .field("scope", &self.scope)
            .field("id_token", &self.id_token.as_ref().map(|_| "*****"))
            .field("token_type", &self.token_type)
            .finish()
    }
}

/// An access token with absolute expiry times.
///
/// # Example
///
/// ```rust
/// use linkedin_api::auth::{AccessTokenInfo, TokenResponse};
/// use chrono::Utc;
///
/// let response: TokenResponse = serde_json::from_str(
///     r#"{"access_token":"AQX","expires_in":5184000,"scope":"openid,profile"}"#,
/// ).unwrap();
/// let info = AccessTokenInfo::from_response(response, Utc::now()).unwrap();
/// assert!(!info.expired());
/// assert!(info.scopes.contains("profile"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessTokenInfo {
    /// The access token.
    pub access_token: AccessToken,
    /// When the access token expires.
    pub expires_at: DateTime<Utc>,
    /// The refresh token, if one was issued.
    pub refresh_token: Option<String>,
    /// When the refresh token expires, if one was issued.
    pub refresh_token_expires_at: Option<DateTime<Utc>>,
    /// Granted scopes.
    pub scopes: AuthScopes,
    /// OpenID Connect ID token.
    pub id_token: Option<String>,
}

impl AccessTokenInfo {
    /// Converts a token response received at `issued_at`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the token is empty or the granted scopes
    /// contain invalid characters.
    pub fn from_response(
        response: TokenResponse,
        issued_at: DateTime<Utc>,
    ) -> Result<Self, ConfigError> {
        let scopes = match response.scope.as_deref() {
            Some(scope) => scope.parse()?,
            None => AuthScopes::default(),
        };

        Ok(Self {
            access_token: AccessToken::new(response.access_token)?,
            expires_at: expiry_after(issued_at, response.expires_in),
            refresh_token: response.refresh_token,
            refresh_token_expires_at: response
                .refresh_token_expires_in
                .map(|secs| expiry_after(issued_at, secs)),
            scopes,
            id_token: response.id_token,
        })
    }

    /// Returns `true` if the access token has expired.
    #[must_use]
    pub fn expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Returns `true` if the access token expires within `window`.
    #[must_use]
    pub fn expires_within(&self, window: Duration) -> bool {
        Utc::now() + window >= self.expires_at
    }

    /// Returns `true` if a refresh token exists and has not expired.
    #[must_use]
    pub fn can_refresh(&self) -> bool {
        self.refresh_token.is_some()
            && self
                .refresh_token_expires_at
                .map_or(true, |expires| Utc::now() < expires)
    }
}

/// Adds a server-supplied lifetime to `issued_at`, saturating at the
/// representable range.
fn expiry_after(issued_at: DateTime<Utc>, secs: i64) -> DateTime<Utc> {
    Duration::try_seconds(secs)
        .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
        .unwrap_or(if secs < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
}

impl fmt::Debug for AccessTokenInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessTokenInfo")
            .field("access_token", &self.access_token)
            .field("expires_at", &self.expires_at)
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "*****"))
            .field("refresh_token_expires_at", &self.refresh_token_expires_at)
            .field("scopes", &self.scopes)
            .finish_non_exhaustive()
    }
}

/// The result of LinkedIn's token introspection endpoint.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct TokenIntrospection {
    /// Whether the token is valid.
    pub active: bool,
    /// The application the token was issued to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Seconds since epoch at which the member authorized the application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorized_at: Option<i64>,
    /// Seconds since epoch at which the token was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    /// `active`, `expired` or `revoked`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Seconds since epoch at which the token expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    /// Granted scopes, comma separated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// `3L` for member tokens, `2L` for application tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<String>,
}

impl TokenIntrospection {
    /// Returns the expiry as a timestamp.
    #[must_use]
    pub fn expires_at_time(&self) -> Option<DateTime<Utc>> {
        self.expires_at
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}
