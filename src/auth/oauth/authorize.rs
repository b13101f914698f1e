//! The authorization step of LinkedIn's 3-legged OAuth flow.
//!
//! [`authorization_url`] builds the URL the member is sent to. LinkedIn then
//! redirects back to the configured redirect URI with either `code` and
//! `state` or `error` and `error_description`; [`validate_callback`] checks
//! that redirect and returns the authorization code.

use url::Url;

use crate::auth::oauth::error::OAuthError;
use crate::auth::oauth::pkce::Pkce;
use crate::auth::oauth::state::StateParam;
use crate::auth::AuthScopes;
use crate::config::LinkedInConfig;

/// An authorization URL together with the values to keep until the callback.
#[derive(Clone, Debug)]
pub struct AuthorizationRequest {
    /// The URL to redirect the member to.
    pub url: String,
    /// The state embedded in the URL; compare it with the callback's.
    pub state: StateParam,
    /// The PKCE verifier to send with the code exchange, if PKCE is used.
    pub code_verifier: Option<String>,
}

// Verify AuthorizationRequest is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthorizationRequest>();
};

/// Builds the LinkedIn authorization URL.
///
/// Scopes default to the configured scopes when `scopes` is `None`.
///
/// # Errors
///
/// - [`OAuthError::MissingConfig`] if the client id, the redirect URI, or
///   every scope is missing
///
/// # Example
///
/// ```rust
/// use linkedin_api::{LinkedInConfig, ClientId, ClientSecret, RedirectUri};
/// use linkedin_api::auth::oauth::{authorization_url, Pkce, StateParam};
///
/// let config = LinkedInConfig::builder()
///     .client_id(ClientId::new("86abc").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .redirect_uri(RedirectUri::new("https://app.example.com/callback").unwrap())
///     .scopes("openid profile".parse().unwrap())
///     .build()
///     .unwrap();
///
/// let request = authorization_url(&config, None, StateParam::new(), Some(&Pkce::new())).unwrap();
/// assert!(request.url.starts_with("https://www.linkedin.com/oauth/v2/authorization?response_type=code"));
/// assert!(request.code_verifier.is_some());
/// ```
pub fn authorization_url(
    config: &LinkedInConfig,
    scopes: Option<&AuthScopes>,
    state: StateParam,
    pkce: Option<&Pkce>,
) -> Result<AuthorizationRequest, OAuthError> {
    let client_id = config
        .client_id()
        .ok_or(OAuthError::MissingConfig { field: "client_id" })?;
    let redirect_uri = config.redirect_uri().ok_or(OAuthError::MissingConfig {
        field: "redirect_uri",
    })?;
    let scopes = scopes.unwrap_or_else(|| config.scopes());
    if scopes.is_empty() {
        return Err(OAuthError::MissingConfig { field: "scopes" });
    }

    let endpoint = format!("{}/authorization", config.oauth_base_url());
    let mut url = Url::parse(&endpoint).map_err(|_| OAuthError::MissingConfig {
        field: "oauth_base_url",
    })?;

    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("response_type", "code")
            .append_pair("client_id", client_id.as_ref())
            .append_pair("redirect_uri", redirect_uri.as_ref())
            .append_pair("state", state.as_ref())
            .append_pair("scope", &scopes.to_scope_string());
        if let Some(pkce) = pkce {
            query
                .append_pair("code_challenge", pkce.challenge())
                .append_pair("code_challenge_method", pkce.challenge_method());
        }
    }

    Ok(AuthorizationRequest {
        url: url.into(),
        state,
        code_verifier: pkce.map(|p| p.verifier().to_string()),
    })
}

/// Query parameters LinkedIn appends to the redirect URI.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct AuthCallback {
    /// The authorization code.
    pub code: Option<String>,
    /// The echoed state.
    pub state: Option<String>,
    /// Error code when authorization failed.
    pub error: Option<String>,
    /// Human readable error description.
    pub error_description: Option<String>,
}

impl AuthCallback {
    /// Parses a callback query string, with or without the leading `?`.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut callback = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "code" => &mut callback.code,
                "state" => &mut callback.state,
                "error" => &mut callback.error,
                "error_description" => &mut callback.error_description,
                _ => continue,
            };
            *slot = Some(value.into_owned());
        }
        callback
    }
}

/// Validates a callback against the stored state and returns the code.
///
/// # Errors
///
/// - [`OAuthError::AuthorizationDenied`] if LinkedIn reported an error
/// - [`OAuthError::StateMismatch`] if the state differs from `expected_state`
/// - [`OAuthError::InvalidCallback`] if the state or code is missing
pub fn validate_callback(
    callback: &AuthCallback,
    expected_state: &StateParam,
) -> Result<String, OAuthError> {
    if let Some(error) = &callback.error {
        return Err(OAuthError::AuthorizationDenied {
            error: error.clone(),
            description: callback.error_description.clone(),
        });
    }

    let received = callback
        .state
        .as_deref()
        .ok_or_else(|| OAuthError::InvalidCallback {
            reason: "missing state parameter".to_string(),
        })?;
    if !expected_state.matches(received) {
        return Err(OAuthError::StateMismatch {
            expected: expected_state.to_string(),
            received: received.to_string(),
        });
    }

    match callback.code.as_deref() {
        Some(code) if !code.is_empty() => Ok(code.to_string()),
        _ => Err(OAuthError::InvalidCallback {
            reason: "missing code parameter".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClientId, ClientSecret, RedirectUri};

    fn config(scopes: &str) -> LinkedInConfig {
        LinkedInConfig::builder()
            .client_id(ClientId::new("client-123").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .redirect_uri(RedirectUri::new("https://app.example.com/auth/callback").unwrap())
            .scopes(scopes.parse().unwrap())
            .build()
            .unwrap()
    }

    fn query_map(url: &str) -> std::collections::HashMap<String, String> {
        Url::parse(url)
            .unwrap()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_url_contains_required_parameters() {
        let state = StateParam::from_raw("state-xyz");
        let request = authorization_url(&config("openid profile"), None, state, None).unwrap();

        assert!(request
            .url
            .starts_with("https://www.linkedin.com/oauth/v2/authorization?"));
        let params = query_map(&request.url);
        assert_eq!(params["response_type"], "code");
        assert_eq!(params["client_id"], "client-123");
        assert_eq!(params["redirect_uri"], "https://app.example.com/auth/callback");
        assert_eq!(params["state"], "state-xyz");
        assert_eq!(params["scope"], "openid profile");
        assert!(!params.contains_key("code_challenge"));
        assert!(request.code_verifier.is_none());
    }

    #[test]
    fn test_scope_override_and_pkce() {
        let pkce = Pkce::from_verifier("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk");
        let scopes: AuthScopes = "w_member_social".parse().unwrap();
        let request = authorization_url(
            &config("openid"),
            Some(&scopes),
            StateParam::new(),
            Some(&pkce),
        )
        .unwrap();

        let params = query_map(&request.url);
        assert_eq!(params["scope"], "w_member_social");
        assert_eq!(
            params["code_challenge"],
            "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"
        );
        assert_eq!(params["code_challenge_method"], "S256");
        assert_eq!(request.code_verifier.as_deref(), Some(pkce.verifier()));
    }

    #[test]
    fn test_missing_redirect_uri_or_scopes() {
        let no_redirect = LinkedInConfig::builder()
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .scopes("openid".parse().unwrap())
            .build()
            .unwrap();
        assert!(matches!(
            authorization_url(&no_redirect, None, StateParam::new(), None),
            Err(OAuthError::MissingConfig {
                field: "redirect_uri"
            })
        ));

        let no_scopes = LinkedInConfig::builder()
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .redirect_uri(RedirectUri::new("https://app.example.com/cb").unwrap())
            .build()
            .unwrap();
        assert!(matches!(
            authorization_url(&no_scopes, None, StateParam::new(), None),
            Err(OAuthError::MissingConfig { field: "scopes" })
        ));
    }

    #[test]
    fn test_callback_from_query() {
        let callback = AuthCallback::from_query("?code=AQT%2Fabc&state=s1&extra=1");
        assert_eq!(callback.code.as_deref(), Some("AQT/abc"));
        assert_eq!(callback.state.as_deref(), Some("s1"));
        assert!(callback.error.is_none());
    }

    #[test]
    fn test_validate_callback_success() {
        let state = StateParam::from_raw("s1");
        let callback = AuthCallback::from_query("code=abc&state=s1");
        assert_eq!(validate_callback(&callback, &state).unwrap(), "abc");
    }

    #[test]
    fn test_validate_callback_state_mismatch() {
        let state = StateParam::from_raw("s1");
        let callback = AuthCallback::from_query("code=abc&state=s2");
        assert!(matches!(
            validate_callback(&callback, &state),
            Err(OAuthError::StateMismatch { .. })
        ));
    }

    #[test]
    fn test_validate_callback_reports_denial_first() {
        let state = StateParam::from_raw("s1");
        let callback = AuthCallback::from_query(
            "error=user_cancelled_login&error_description=The+user+cancelled+LinkedIn+login&state=s1",
        );
        match validate_callback(&callback, &state) {
            Err(OAuthError::AuthorizationDenied { error, description }) => {
                assert_eq!(error, "user_cancelled_login");
                assert_eq!(
                    description.as_deref(),
                    Some("The user cancelled LinkedIn login")
                );
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_validate_callback_missing_parts() {
        let state = StateParam::from_raw("s1");
        assert!(matches!(
            validate_callback(&AuthCallback::from_query("code=abc"), &state),
            Err(OAuthError::InvalidCallback { .. })
        ));
        assert!(matches!(
            validate_callback(&AuthCallback::from_query("state=s1&code="), &state),
            Err(OAuthError::InvalidCallback { .. })
        ));
    }
}
