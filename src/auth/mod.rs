//! Authentication for the LinkedIn API.
//!
//! # Overview
//!
//! - [`AuthScopes`]: A set of OAuth scopes
//! - [`TokenResponse`]: The raw token endpoint response
//! - [`AccessTokenInfo`]: An access token with absolute expiry
//! - [`TokenIntrospection`]: Token introspection results
//! - [`oauth`]: The 2-legged and 3-legged OAuth 2.0 flows
//!
//! # Example
//!
//! ```rust,ignore
//! use linkedin_api::auth::oauth::{
//!     authorization_url, exchange_code, validate_callback, AuthCallback, Pkce, StateParam,
//! };
//!
//! // 1. Send the member to LinkedIn
//! let pkce = Pkce::new();
//! let request = authorization_url(&config, None, StateParam::new(), Some(&pkce))?;
//! // store request.state and request.code_verifier, redirect to request.url
//!
//! // 2. Handle the redirect back
//! let code = validate_callback(&AuthCallback::from_query(query), &request.state)?;
//! let token = exchange_code(&config, &code, request.code_verifier.as_deref()).await?;
//! ```

pub mod oauth;
mod scopes;
mod token;

pub use scopes::AuthScopes;
pub use token::{AccessTokenInfo, TokenIntrospection, TokenResponse};
