//! OAuth error types.

use thiserror::Error;

/// Errors raised by the OAuth 2.0 flows.
///
/// # Example
///
/// ```rust
/// use linkedin_api::auth::oauth::OAuthError;
///
/// let error = OAuthError::StateMismatch {
///     expected: "abc".to_string(),
///     received: "xyz".to_string(),
/// };
/// assert!(error.to_string().contains("abc"));
/// ```
#[derive(Debug, Error)]
pub enum OAuthError {
    /// The `state` in the callback does not match the stored state.
    #[error("State parameter mismatch: expected '{expected}', received '{received}'")]
    StateMismatch {
        /// The state generated before the redirect.
        expected: String,
        /// The state received in the callback.
        received: String,
    },

    /// The member declined, or LinkedIn refused the authorization.
    #[error("Authorization denied: {error}{}", description.as_ref().map(|d| format!(" ({d})")).unwrap_or_default())]
    AuthorizationDenied {
        /// The `error` callback parameter, e.g. `user_cancelled_authorize`.
        error: String,
        /// The `error_description` callback parameter.
        description: Option<String>,
    },

    /// The callback is missing a required parameter.
    #[error("Invalid callback: {reason}")]
    InvalidCallback {
        /// What is wrong with the callback.
        reason: String,
    },

    /// A configuration value needed by this flow is not set.
    #[error("OAuth flow requires '{field}' to be configured")]
    MissingConfig {
        /// The missing field.
        field: &'static str,
    },

    /// The token endpoint returned a non-success status or an unreadable body.
    #[error("Token request failed with status {status}: {message}")]
    TokenRequestFailed {
        /// HTTP status, `0` when no response was received.
        status: u16,
        /// The error description from the response.
        message: String,
    },

    /// The token endpoint could not be reached.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};
