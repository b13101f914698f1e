//! Proof Key for Code Exchange (RFC 7636).
//!
//! LinkedIn supports PKCE for native and single-page applications. The
//! verifier stays with the application; the S256 challenge goes into the
//! authorization URL, and the verifier is sent again with the code exchange.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::Rng;
use sha2::{Digest, Sha256};

const VERIFIER_CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~";

/// A PKCE verifier and its S256 challenge.
///
/// # Example
///
/// ```rust
/// use linkedin_api::auth::oauth::Pkce;
///
/// let pkce = Pkce::new();
/// assert_eq!(pkce.verifier().len(), 64);
/// assert_eq!(pkce.challenge_method(), "S256");
/// assert_eq!(pkce.challenge(), Pkce::challenge_for(pkce.verifier()));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Pkce {
    verifier: String,
    challenge: String,
}

impl Pkce {
    /// Shortest verifier allowed by RFC 7636.
    pub const MIN_VERIFIER_LENGTH: usize = 43;
    /// Longest verifier allowed by RFC 7636.
    pub const MAX_VERIFIER_LENGTH: usize = 128;
    const DEFAULT_VERIFIER_LENGTH: usize = 64;

    /// Generates a random 64 character verifier.
    #[must_use]
    pub fn new() -> Self {
        Self::with_length(Self::DEFAULT_VERIFIER_LENGTH)
    }

    /// Generates a random verifier of `length` characters, clamped to 43..=128.
    #[must_use]
    pub fn with_length(length: usize) -> Self {
        let length = length.clamp(Self::MIN_VERIFIER_LENGTH, Self::MAX_VERIFIER_LENGTH);
        let mut rng = rand::thread_rng();
        let verifier: String = (0..length)
            .map(|_| char::from(VERIFIER_CHARSET[rng.gen_range(0..VERIFIER_CHARSET.len())]))
            .collect();
        Self::from_verifier(verifier)
    }

    /// Rebuilds a pair from a stored verifier.
    #[must_use]
    pub fn from_verifier(verifier: impl Into<String>) -> Self {
        let verifier = verifier.into();
        let challenge = Self::challenge_for(&verifier);
        Self {
            verifier,
            challenge,
        }
    }

    /// Computes `BASE64URL(SHA256(verifier))` without padding.
    #[must_use]
    pub fn challenge_for(verifier: &str) -> String {
        URL_SAFE_NO_PAD.encode(Sha256::digest(verifier.as_bytes()))
    }

    /// Returns the verifier.
    #[must_use]
    pub fn verifier(&self) -> &str {
        &self.verifier
    }

    /// Returns the S256 challenge.
    #[must_use]
    pub fn challenge(&self) -> &str {
        &self.challenge
    }

    /// Returns the challenge method, always `S256`.
    #[must_use]
    pub const fn challenge_method(&self) -> &'static str {
        "S256"
    }
}

impl Default for Pkce {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Pkce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pkce")
            .field("verifier", &"*****")
            .field("challenge", &self.challenge)
            .finish()
    }
}
