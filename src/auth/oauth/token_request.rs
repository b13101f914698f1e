//! Requests against LinkedIn's token endpoints.
//!
//! All grants are form-encoded POSTs to `{oauth_base_url}/accessToken`:
//!
//! - [`exchange_code`]: `authorization_code` (3-legged, optionally with PKCE)
//! - [`refresh_access_token`]: `refresh_token`
//! - [`client_credentials_token`]: `client_credentials` (2-legged)
//!
//! [`introspect_token`] posts to `{oauth_base_url}/introspectToken`.

use chrono::Utc;
use serde::de::DeserializeOwned;

use crate::auth::oauth::error::OAuthError;
use crate::auth::token::{AccessTokenInfo, TokenIntrospection, TokenResponse};
use crate::config::LinkedInConfig;

const ACCESS_TOKEN_PATH: &str = "accessToken";
const INTROSPECT_TOKEN_PATH: &str = "introspectToken";

/// Exchanges an authorization code for an access token.
///
/// Pass the PKCE verifier when the authorization URL carried a challenge.
///
/// # Errors
///
/// - [`OAuthError::MissingConfig`] if client credentials or the redirect URI
///   are not configured
/// - [`OAuthError::TokenRequestFailed`] if LinkedIn rejects the request
/// - [`OAuthError::Network`] if LinkedIn cannot be reached
///
/// # Example
///
/// ```rust,ignore
/// use linkedin_api::auth::oauth::{exchange_code, validate_callback, AuthCallback};
///
/// let code = validate_callback(&AuthCallback::from_query(query), &stored_state)?;
/// let token = exchange_code(&config, &code, stored_verifier.as_deref()).await?;
/// let config = config.with_access_token(token.access_token.clone());
/// ```
pub async fn exchange_code(
    config: &LinkedInConfig,
    code: &str,
    code_verifier: Option<&str>,
) -> Result<AccessTokenInfo, OAuthError> {
    let redirect_uri = config.redirect_uri().ok_or(OAuthError::MissingConfig {
        field: "redirect_uri",
    })?;

    let mut fields = vec![
        ("grant_type", "authorization_code".to_string()),
        ("code", code.to_string()),
        ("redirect_uri", redirect_uri.as_ref().to_string()),
    ];
    fields.extend(credentials(config)?);
    if let Some(verifier) = code_verifier {
        fields.push(("code_verifier", verifier.to_string()));
    }

    request_token(config, &fields).await
}

/// Obtains a new access token from a refresh token.
///
/// # Errors
///
/// See [`exchange_code`].
pub async fn refresh_access_token(
    config: &LinkedInConfig,
    refresh_token: &str,
) -> Result<AccessTokenInfo, OAuthError> {
    let mut fields = vec![
        ("grant_type", "refresh_token".to_string()),
        ("refresh_token", refresh_token.to_string()),
    ];
    fields.extend(credentials(config)?);

    request_token(config, &fields).await
}

/// Obtains an application access token with the client credentials grant.
///
/// # Errors
///
/// See [`exchange_code`].
pub async fn client_credentials_token(
    config: &LinkedInConfig,
) -> Result<AccessTokenInfo, OAuthError> {
    let mut fields = vec![("grant_type", "client_credentials".to_string())];
    fields.extend(credentials(config)?);

    request_token(config, &fields).await
}

/// Asks LinkedIn whether `token` is valid and what it grants.
///
/// # Errors
///
/// See [`exchange_code`].
pub async fn introspect_token(
    config: &LinkedInConfig,
    token: &str,
) -> Result<TokenIntrospection, OAuthError> {
    let mut fields = vec![("token", token.to_string())];
    fields.extend(credentials(config)?);

    post_form(config, INTROSPECT_TOKEN_PATH, &fields).await
}

fn credentials(config: &LinkedInConfig) -> Result<[(&'static str, String); 2], OAuthError> {
    let client_id = config
        .client_id()
        .ok_or(OAuthError::MissingConfig { field: "client_id" })?;
    let client_secret = config.client_secret().ok_or(OAuthError::MissingConfig {
        field: "client_secret",
    })?;
    Ok([
        ("client_id", client_id.as_ref().to_string()),
        ("client_secret", client_secret.as_ref().to_string()),
    ])
}

async fn request_token(
    config: &LinkedInConfig,
    fields: &[(&'static str, String)],
) -> Result<AccessTokenInfo, OAuthError> {
    let issued_at = Utc::now();
    let response: TokenResponse = post_form(config, ACCESS_TOKEN_PATH, fields).await?;
    AccessTokenInfo::from_response(response, issued_at).map_err(|e| {
        OAuthError::TokenRequestFailed {
            status: 200,
            message: e.to_string(),
        }
    })
}

async fn post_form<T: DeserializeOwned>(
    config: &LinkedInConfig,
    path: &str,
    fields: &[(&'static str, String)],
) -> Result<T, OAuthError> {
    let url = format!("{}/{path}", config.oauth_base_url());
    tracing::debug!(url = %url, "Sending OAuth token request");

    let client = reqwest::Client::builder()
        .connect_timeout(config.connect_timeout())
        .timeout(config.timeout())
        .build()?;
    let response = client.post(&url).form(fields).send().await?;

    let status = response.status().as_u16();
    let body = response.text().await?;

    if !(200..300).contains(&status) {
        return Err(OAuthError::TokenRequestFailed {
            status,
            message: error_message(&body),
        });
    }

    serde_json::from_str(&body).map_err(|e| OAuthError::TokenRequestFailed {
        status,
        message: format!("Failed to parse token response: {e}"),
    })
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            let error = v.get("error").and_then(|e| e.as_str());
            let description = v
                .get("error_description")
                .or_else(|| v.get("message"))
                .and_then(|d| d.as_str());
            match (error, description) {
                (Some(e), Some(d)) => Some(format!("{e}: {d}")),
                (Some(e), None) => Some(e.to_string()),
                (None, Some(d)) => Some(d.to_string()),
                (None, None) => None,
            }
        })
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClientId, ClientSecret, RedirectUri};
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(server: &MockServer) -> LinkedInConfig {
        LinkedInConfig::builder()
            .client_id(ClientId::new("client-123").unwrap())
            .client_secret(ClientSecret::new("secret-456").unwrap())
            .redirect_uri(RedirectUri::new("https://app.example.com/cb").unwrap())
            .oauth_base_url(format!("{}/oauth/v2", server.uri()))
            .build()
            .unwrap()
    }

    fn token_body() -> serde_json::Value {
        serde_json::json!({
            "access_token": "AQV-new",
            "expires_in": 5_184_000,
            "refresh_token": "AQX-refresh",
            "refresh_token_expires_in": 31_536_000,
            "scope": "openid,profile"
        })
    }

    #[tokio::test]
    async fn test_exchange_code_posts_form_with_pkce() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/v2/accessToken"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("grant_type=authorization_code"))
            .and(body_string_contains("code=the-code"))
            .and(body_string_contains("client_id=client-123"))
            .and(body_string_contains("client_secret=secret-456"))
            .and(body_string_contains(
                "redirect_uri=https%3A%2F%2Fapp.example.com%2Fcb",
            ))
            .and(body_string_contains("code_verifier=verifier-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
            .expect(1)
            .mount(&server)
            .await;

        let info = exchange_code(&config(&server), "the-code", Some("verifier-1"))
            .await
            .unwrap();
        assert_eq!(info.access_token.as_ref(), "AQV-new");
        assert_eq!(info.refresh_token.as_deref(), Some("AQX-refresh"));
        assert!(info.scopes.contains("openid"));
        assert!(!info.expired());
    }

    #[tokio::test]
    async fn test_refresh_access_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/v2/accessToken"))
            .and(body_string_contains("grant_type=refresh_token"))
            .and(body_string_contains("refresh_token=AQX-old"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
            .expect(1)
            .mount(&server)
            .await;

        let info = refresh_access_token(&config(&server), "AQX-old")
            .await
            .unwrap();
        assert_eq!(info.access_token.as_ref(), "AQV-new");
    }

    #[tokio::test]
    async fn test_client_credentials_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/v2/accessToken"))
            .and(body_string_contains("grant_type=client_credentials"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"access_token": "app-token", "expires_in": 1800})),
            )
            .mount(&server)
            .await;

        let info = client_credentials_token(&config(&server)).await.unwrap();
        assert_eq!(info.access_token.as_ref(), "app-token");
        assert!(info.refresh_token.is_none());
    }

    #[tokio::test]
    async fn test_error_response_maps_to_token_request_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/v2/accessToken"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "invalid_request",
                "error_description": "Unable to retrieve access token: authorization code not found"
            })))
            .mount(&server)
            .await;

        match exchange_code(&config(&server), "bad", None).await {
            Err(OAuthError::TokenRequestFailed { status, message }) => {
                assert_eq!(status, 400);
                assert!(message.starts_with("invalid_request: Unable to retrieve"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unparseable_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/v2/accessToken"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = client_credentials_token(&config(&server)).await;
        assert!(matches!(
            result,
            Err(OAuthError::TokenRequestFailed { status: 200, .. })
        ));
    }

    #[tokio::test]
    async fn test_introspect_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/v2/introspectToken"))
            .and(body_string_contains("token=AQV-abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "active": true,
                "client_id": "client-123",
                "status": "active",
                "scope": "r_liteprofile,w_member_social",
                "auth_type": "3L",
                "expires_at": 1_705_184_000
            })))
            .mount(&server)
            .await;

        let result = introspect_token(&config(&server), "AQV-abc").await.unwrap();
        assert!(result.active);
        assert_eq!(result.status.as_deref(), Some("active"));
    }

    #[tokio::test]
    async fn test_missing_credentials() {
        let config = LinkedInConfig::builder()
            .access_token(crate::config::AccessToken::new("t").unwrap())
            .build()
            .unwrap();
        assert!(matches!(
            client_credentials_token(&config).await,
            Err(OAuthError::MissingConfig { field: "client_id" })
        ));
        assert!(matches!(
            exchange_code(&config, "c", None).await,
            Err(OAuthError::MissingConfig {
                field: "redirect_uri"
            })
        ));
    }
}
