//! The LinkedIn REST API surface.
//!
//! This module provides:
//!
//! - **[`LinkedInClient`]**: one method per Rest.li request shape (get,
//!   collection, batch get, create, partial update, action, delete, upload)
//! - **[`LinkedInError`]** and the **[`ErrorMapper`]** seam that turns
//!   error responses into it
//! - **[`Parameter`]/[`Parameters`]**: ordered query parameters that keep
//!   Rest.li syntax intact
//! - **[`build_path`]**: `{name}` path templates with encoded values
//! - **[`LinkedInResource`]**: keyed reads shared by entity types
//! - **[`resources`]**: typed endpoint groups (posts, images, organizations,
//!   statistics, ...)
//!
//! # Example
//!
//! ```rust,ignore
//! use linkedin_api::{LinkedInClient, LinkedInConfig, AccessToken, Urn};
//! use linkedin_api::rest::resources::{Post, Visibility};
//!
//! let config = LinkedInConfig::builder()
//!     .access_token(AccessToken::new("AQV...")?)
//!     .build()?;
//! let client = LinkedInClient::new(&config)?;
//!
//! let post = Post::text(Urn::organization("2414183"), "Hello LinkedIn", Visibility::Public);
//! let created = Post::create(&client, &post).await?;
//! println!("created {}", created.id);
//! ```

mod client;
mod error_mapper;
mod errors;
mod params;
mod path;
mod resource;
pub mod resources;

pub use client::{BatchResult, Created, LinkedInClient, UploadResponse, RESTLI_METHOD_HEADER};
pub use error_mapper::{DefaultErrorMapper, ErrorMapper};
pub use errors::{ApiErrorDetails, LinkedInError};
pub use params::{restli_list, Parameter, Parameters};
pub use path::build_path;
pub use resource::{DeletableResource, LinkedInResource};
