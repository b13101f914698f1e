//! # LinkedIn API Rust Client
//!
//! An async client for LinkedIn's REST API: type-safe configuration,
//! OAuth 2.0 helpers, a generic Rest.li client and typed endpoint groups
//! for posts, media uploads, organizations, statistics and social actions.
//!
//! ## Overview
//!
//! - Configuration via [`LinkedInConfig`] and [`LinkedInConfigBuilder`]
//! - Validated newtypes for credentials ([`ClientId`], [`ClientSecret`],
//!   [`AccessToken`], [`RedirectUri`]) and [`ApiVersion`]
//! - LinkedIn URNs via [`Urn`]
//! - OAuth 2.0 authorization code, refresh, client credentials and
//!   introspection via [`auth::oauth`]
//! - The Rest.li client [`LinkedInClient`], generic over its transport,
//!   JSON mapper and error mapper
//! - Paged collections via [`Connection`] and [`ConnectionIterator`]
//! - Typed endpoint groups in [`rest::resources`]
//! - Webhook validation in [`webhooks`]
//!
//! ## Quick Start
//!
//! ```rust
//! use linkedin_api::{AccessToken, ApiVersion, LinkedInClient, LinkedInConfig};
//!
//! let config = LinkedInConfig::builder()
//!     .access_token(AccessToken::new("your-access-token").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//!
//! let client = LinkedInClient::new(&config).unwrap();
//! assert_eq!(client.config().api_version(), &ApiVersion::latest());
//! ```
//!
//! ## OAuth
//!
//! ```rust,ignore
//! use linkedin_api::{ClientId, ClientSecret, LinkedInConfig, RedirectUri};
//! use linkedin_api::auth::oauth::{
//!     authorization_url, exchange_code, validate_callback, AuthCallback, Pkce, StateParam,
//! };
//!
//! let config = LinkedInConfig::builder()
//!     .client_id(ClientId::new("client-id").unwrap())
//!     .client_secret(ClientSecret::new("client-secret").unwrap())
//!     .redirect_uri(RedirectUri::new("https://myapp.example.com/callback").unwrap())
//!     .scopes("openid profile w_member_social".parse().unwrap())
//!     .build()
//!     .unwrap();
//!
//! // Send the member to LinkedIn; keep state and the PKCE verifier.
//! let request = authorization_url(&config, None, StateParam::new(), Some(&Pkce::new()))?;
//!
//! // On the redirect back:
//! let callback = AuthCallback::from_query(query_string);
//! let code = validate_callback(&callback, &request.state)?;
//! let token = exchange_code(&config, &code, request.code_verifier.as_deref()).await?;
//!
//! let config = config.with_access_token(token.access_token);
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use linkedin_api::rest::resources::{Organization, Post, Visibility};
//! use linkedin_api::rest::LinkedInResource;
//! use linkedin_api::{LinkedInClient, Urn};
//!
//! let client = LinkedInClient::new(&config)?;
//!
//! let org = Organization::find(&client, &2414183, &[]).await?;
//! let post = Post::text(Urn::organization("2414183"), "Hello LinkedIn", Visibility::Public);
//! let created = Post::create(&client, &post).await?;
//! println!("created {}", created.id);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is passed explicitly
//! - **Fail-fast validation**: newtypes validate on construction
//! - **Thread-safe**: all public types are `Send + Sync`
//! - **Async-first**: built on Tokio and reqwest

pub mod auth;
pub mod clients;
pub mod config;
pub mod connection;
pub mod error;
pub mod json;
pub mod rest;
pub mod urn;
pub mod webhooks;

pub use auth::AuthScopes;
pub use config::{
    AccessToken, ApiVersion, ClientId, ClientSecret, LinkedInConfig, LinkedInConfigBuilder,
    RedirectUri,
};
pub use error::ConfigError;
pub use urn::{Urn, UrnError};

pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, MaxHttpRetriesExceededError, WebRequestor,
};

pub use connection::{Connection, ConnectionIterator, Paging};
pub use json::{DefaultJsonMapper, JsonMapper, JsonMappingError};
pub use rest::{DefaultErrorMapper, ErrorMapper, LinkedInClient, LinkedInError, Parameter};

pub use auth::oauth::{OAuthError, StateParam};
