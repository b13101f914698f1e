//! Webhook error types.

use thiserror::Error;

/// Error type for webhook verification and parsing.
///
/// # Example
///
/// ```rust
/// use linkedin_api::webhooks::WebhookError;
///
/// let error = WebhookError::InvalidSignature;
/// assert_eq!(error.to_string(), "Webhook signature verification failed");
/// ```
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The config has no client secret to verify with.
    #[error("No client secret is configured; set client_secret in LinkedInConfig to verify webhooks.")]
    MissingClientSecret,

    /// The `X-LI-Signature` header does not match the body.
    ///
    /// The message stays generic so it leaks nothing about the expected value.
    #[error("Webhook signature verification failed")]
    InvalidSignature,

    /// The body is signed correctly but is not a notification payload.
    #[error("Invalid webhook payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_client_secret_message_names_the_setting() {
        let message = WebhookError::MissingClientSecret.to_string();
        assert!(message.contains("client_secret"));
    }

    #[test]
    fn test_invalid_payload_wraps_serde_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: WebhookError = err.into();
        assert!(matches!(error, WebhookError::InvalidPayload(_)));
        assert!(error.to_string().starts_with("Invalid webhook payload"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WebhookError>();
    }
}
