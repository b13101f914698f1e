//! Webhook handling for organization social action notifications.
//!
//! LinkedIn first validates a webhook endpoint with a `challengeCode`
//! query parameter, expecting it back signed; afterwards it POSTs
//! notification batches with an `X-LI-Signature` header.
//!
//! - [`challenge_response`] / [`ChallengeReply`]: answer the validation GET
//! - [`verify_signature`]: low-level body signature check
//! - [`verify_webhook`]: verify with [`LinkedInConfig`](crate::LinkedInConfig) and parse
//! - [`WebhookEvent`]: the parsed delivery
//!
//! # Example
//!
//! ```rust
//! use linkedin_api::webhooks::{verify_webhook, WebhookError};
//! use linkedin_api::auth::oauth::hmac::compute_signature;
//! use linkedin_api::{ClientId, ClientSecret, LinkedInConfig};
//!
//! let config = LinkedInConfig::builder()
//!     .client_id(ClientId::new("client-id").unwrap())
//!     .client_secret(ClientSecret::new("client-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let body = br#"{"type":"ORGANIZATION_SOCIAL_ACTION_NOTIFICATIONS","notifications":[]}"#;
//! let header = format!("hmacsha256={}", compute_signature(body, "client-secret"));
//!
//! let event = verify_webhook(&config, body, &header).unwrap();
//! assert!(event.notifications.is_empty());
//!
//! let tampered = verify_webhook(&config, b"{}", &header);
//! assert!(matches!(tampered, Err(WebhookError::InvalidSignature)));
//! ```

mod errors;
mod types;
mod verification;

pub use errors::WebhookError;
pub use types::{
    DecoratedActivity, DecoratedComment, DecoratedPost, SocialAction, SocialActionNotification,
    WebhookEvent, ORGANIZATION_SOCIAL_ACTION_NOTIFICATIONS,
};
pub use verification::{
    challenge_response, verify_signature, verify_webhook, ChallengeReply, CHALLENGE_CODE_PARAM,
    HEADER_SIGNATURE, SIGNATURE_PREFIX,
};
