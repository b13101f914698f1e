//! Webhook signature checks.
//!
//! LinkedIn signs two things with the app's client secret, both as
//! lowercase hex HMAC-SHA256:
//!
//! - the endpoint validation challenge, which the app must echo back
//!   signed ([`challenge_response`]);
//! - every notification body, sent in the `X-LI-Signature` header
//!   ([`verify_signature`]).
//!
//! # Example
//!
//! ```rust
//! use linkedin_api::webhooks::{challenge_response, verify_signature};
//! use linkedin_api::auth::oauth::hmac::compute_signature;
//!
//! let response = challenge_response("890e4665-4dfe-4ab1-b689-ed553bceeed0", "secret");
//! assert_eq!(response.len(), 64);
//!
//! let body = br#"{"type":"ORGANIZATION_SOCIAL_ACTION_NOTIFICATIONS","notifications":[]}"#;
//! let header = format!("hmacsha256={}", compute_signature(body, "secret"));
//! assert!(verify_signature(body, &header, "secret"));
//! ```
//!
//! All comparisons are constant-time.

use serde::{Deserialize, Serialize};

use crate::auth::oauth::hmac::{compute_signature, constant_time_compare};
use crate::config::LinkedInConfig;
use crate::webhooks::{WebhookError, WebhookEvent};

/// Header carrying the body signature.
pub const HEADER_SIGNATURE: &str = "X-LI-Signature";

/// Prefix LinkedIn puts in front of the hex digest.
pub const SIGNATURE_PREFIX: &str = "hmacsha256=";

/// Query parameter carrying the validation challenge.
pub const CHALLENGE_CODE_PARAM: &str = "challengeCode";

/// Signs a validation challenge.
#[must_use]
pub fn challenge_response(challenge_code: &str, client_secret: &str) -> String {
    compute_signature(challenge_code.as_bytes(), client_secret)
}

/// The JSON body answering a validation request.
///
/// ```rust
/// use linkedin_api::webhooks::ChallengeReply;
///
/// let reply = ChallengeReply::new("abc", "secret");
/// let json = serde_json::to_value(&reply).unwrap();
/// assert_eq!(json["challengeCode"], "abc");
/// assert!(json["challengeResponse"].is_string());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeReply {
    /// The challenge as received.
    pub challenge_code: String,
    /// Its hex signature.
    pub challenge_response: String,
}

impl ChallengeReply {
    /// Builds the reply for `challenge_code`.
    #[must_use]
    pub fn new(challenge_code: impl Into<String>, client_secret: &str) -> Self {
        let challenge_code = challenge_code.into();
        let challenge_response = challenge_response(&challenge_code, client_secret);
        Self {
            challenge_code,
            challenge_response,
        }
    }
}

/// Checks an `X-LI-Signature` value against the raw body.
///
/// Accepts `hmacsha256=<hex>` or bare hex; hex case is ignored.
#[must_use]
pub fn verify_signature(raw_body: &[u8], header_value: &str, client_secret: &str) -> bool {
    let header_value = header_value.trim();
    let digest = header_value
        .strip_prefix(SIGNATURE_PREFIX)
        .unwrap_or(header_value)
        .to_ascii_lowercase();
    let computed = compute_signature(raw_body, client_secret);
    constant_time_compare(&computed, &digest)
}

/// Verifies a delivery with the config's client secret and parses it.
///
/// # Errors
///
/// - [`WebhookError::MissingClientSecret`] if the config has no secret
/// - [`WebhookError::InvalidSignature`] if the signature does not match
/// - [`WebhookError::InvalidPayload`] if the body is not a notification payload
pub fn verify_webhook(
    config: &LinkedInConfig,
    raw_body: &[u8],
    header_value: &str,
) -> Result<WebhookEvent, WebhookError> {
    let secret = config
        .client_secret()
        .ok_or(WebhookError::MissingClientSecret)?;

    if !verify_signature(raw_body, header_value, secret.as_ref()) {
        tracing::warn!("Rejected webhook with invalid signature");
        return Err(WebhookError::InvalidSignature);
    }

    let event = WebhookEvent::from_slice(raw_body)?;
    tracing::debug!(
        event_type = %event.event_type,
        notifications = event.notifications.len(),
        "Verified webhook"
    );
    Ok(event)
}
