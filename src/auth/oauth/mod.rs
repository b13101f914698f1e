//! OAuth 2.0 flows for LinkedIn.
//!
//! # Member authorization (3-legged)
//!
//! 1. [`authorization_url`] builds the URL the member is redirected to, with
//!    a [`StateParam`] for CSRF protection and an optional [`Pkce`] pair.
//! 2. [`validate_callback`] checks the redirect back and returns the code.
//! 3. [`exchange_code`] trades the code for an access token.
//! 4. [`refresh_access_token`] renews it, for applications with
//!    programmatic refresh enabled.
//!
//! # Application authorization (2-legged)
//!
//! [`client_credentials_token`] obtains a token without a member.
//!
//! # Introspection
//!
//! [`introspect_token`] reports whether a token is active and its scopes.

mod authorize;
mod error;
pub mod hmac;
mod pkce;
mod state;
mod token_request;

pub use authorize::{authorization_url, validate_callback, AuthCallback, AuthorizationRequest};
pub use error::OAuthError;
pub use pkce::Pkce;
pub use state::StateParam;
pub use token_request::{
    client_credentials_token, exchange_code, introspect_token, refresh_access_token,
};
