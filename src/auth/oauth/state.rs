//! The OAuth `state` parameter.
//!
//! LinkedIn echoes `state` back to the redirect URI unchanged. Comparing it
//! with the value stored before the redirect protects the flow against
//! cross-site request forgery. A state may also carry application data
//! (e.g. a return URL) as URL-safe base64 JSON.
//!
//! # Example
//!
//! ```rust
//! use linkedin_api::auth::oauth::StateParam;
//! use serde::{Deserialize, Serialize};
//!
//! let state = StateParam::new();
//! assert_eq!(state.nonce().len(), 24);
//! assert!(state.matches(state.as_ref()));
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct ReturnTo {
//!     path: String,
//! }
//!
//! let state = StateParam::with_data(&ReturnTo { path: "/inbox".into() });
//! let data: Option<ReturnTo> = state.extract_data();
//! assert_eq!(data.unwrap().path, "/inbox");
//! ```

use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::auth::oauth::hmac::constant_time_compare;

/// OAuth state parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateParam {
    value: String,
    is_structured: bool,
}

#[derive(Serialize, Deserialize)]
struct StructuredState<T> {
    nonce: String,
    data: T,
}

#[derive(Deserialize)]
struct NonceOnly {
    nonce: String,
}

// Verify StateParam is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StateParam>();
};

impl StateParam {
    const NONCE_LENGTH: usize = 24;

    fn random_nonce() -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(Self::NONCE_LENGTH)
            .map(char::from)
            .collect()
    }

    /// Creates a state holding a random 24 character alphanumeric nonce.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: Self::random_nonce(),
            is_structured: false,
        }
    }

    /// Creates a state that embeds `data` next to a random nonce.
    #[must_use]
    pub fn with_data<T: Serialize>(data: &T) -> Self {
        let structured = StructuredState {
            nonce: Self::random_nonce(),
            data,
        };
        let json = serde_json::to_string(&structured).unwrap_or_default();

        Self {
            value: URL_SAFE_NO_PAD.encode(json.as_bytes()),
            is_structured: true,
        }
    }

    /// Wraps a state value received from a callback or stored elsewhere.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self {
            value: raw.into(),
            is_structured: false,
        }
    }

    /// Returns the full state value as sent to LinkedIn.
    #[must_use]
    pub fn nonce(&self) -> &str {
        &self.value
    }

    /// Decodes the data embedded by [`with_data`](Self::with_data).
    ///
    /// Returns `None` for plain states or undecodable values.
    #[must_use]
    pub fn extract_data<T: DeserializeOwned>(&self) -> Option<T> {
        let decoded = URL_SAFE_NO_PAD.decode(self.value.as_bytes()).ok()?;
        let structured: StructuredState<T> = serde_json::from_slice(&decoded).ok()?;
        Some(structured.data)
    }

    /// Returns the random nonce, decoding structured states.
    #[must_use]
    pub fn extract_nonce(&self) -> String {
        if !self.is_structured {
            return self.value.clone();
        }

        URL_SAFE_NO_PAD
            .decode(self.value.as_bytes())
            .ok()
            .and_then(|bytes| serde_json::from_slice::<NonceOnly>(&bytes).ok())
            .map_or_else(|| self.value.clone(), |n| n.nonce)
    }

    /// Compares a received state with this one in constant time.
    #[must_use]
    pub fn matches(&self, received: &str) -> bool {
        constant_time_compare(&self.value, received)
    }
}

impl Default for StateParam {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StateParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for StateParam {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct FlowData {
        return_url: String,
        member: u64,
    }

    #[test]
    fn test_new_generates_alphanumeric_nonce() {
        let state = StateParam::new();
        assert_eq!(state.nonce().len(), 24);
        assert!(state.nonce().chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(StateParam::new(), StateParam::new());
    }

    #[test]
    fn test_with_data_is_url_safe_and_decodable() {
        let data = FlowData {
            return_url: "/dashboard?tab=posts".to_string(),
            member: 42,
        };
        let state = StateParam::with_data(&data);

        assert!(state
            .as_ref()
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert_eq!(state.extract_data::<FlowData>(), Some(data));
        assert_eq!(state.extract_nonce().len(), 24);
    }

    #[test]
    fn test_plain_state_has_no_data() {
        let state = StateParam::new();
        assert!(state.extract_data::<FlowData>().is_none());
        assert_eq!(state.extract_nonce(), state.nonce());
    }

    #[test]
    fn test_from_raw_and_matches() {
        let state = StateParam::from_raw("abc123");
        assert_eq!(state.to_string(), "abc123");
        assert!(state.matches("abc123"));
        assert!(!state.matches("abc124"));
        assert!(!state.matches(""));
    }
}
