//! The shared shape of addressable LinkedIn entities.
//!
//! Most LinkedIn entities live at `<collection>/<id>` and support the same
//! keyed reads. [`LinkedInResource`] captures that: an implementation names
//! its collection path and id type and gets `find` and `batch_get` for free.
//! Entities that LinkedIn lets you delete also implement
//! [`DeletableResource`].
//!
//! Operations specific to one entity (finders, uploads, actions) are
//! inherent associated functions on the entity type.
//!
//! # Example
//!
//! ```rust,ignore
//! use linkedin_api::rest::LinkedInResource;
//! use linkedin_api::rest::resources::Post;
//! use linkedin_api::Urn;
//!
//! let post = Post::find(&client, &Urn::share("6844785523593134080"), &[]).await?;
//! println!("{}", post.commentary.as_deref().unwrap_or(""));
//! ```

use std::fmt::Display;

use serde::de::DeserializeOwned;

use crate::clients::WebRequestor;
use crate::json::JsonMapper;
use crate::rest::client::{BatchResult, LinkedInClient};
use crate::rest::error_mapper::ErrorMapper;
use crate::rest::errors::LinkedInError;
use crate::rest::params::Parameter;
use crate::rest::path::build_path;

/// An entity addressable as `<PATH>/<id>`.
///
/// # Associated Types
///
/// - `Id`: the key type, usually [`Urn`](crate::Urn) or a numeric id
///
/// # Associated Constants
///
/// - `NAME`: display name used in logs
/// - `PATH`: collection path relative to the API base, e.g. `rest/posts`
#[allow(async_fn_in_trait)]
pub trait LinkedInResource: DeserializeOwned + Send + Sync + Sized {
    /// The type of the entity's key.
    type Id: Display + Send + Sync;

    /// The entity name, e.g. `"Post"`.
    const NAME: &'static str;

    /// The collection path, e.g. `"rest/posts"`.
    const PATH: &'static str;

    /// Returns the path of a single entity, percent-encoding the id.
    fn entity_path(id: &Self::Id) -> String {
        let template = format!("{}/{{id}}", Self::PATH);
        build_path(&template, &[("id", id as &dyn Display)])
    }

    /// Fetches one entity by id.
    ///
    /// # Errors
    ///
    /// Returns [`LinkedInError::NotFound`] if no such entity exists, plus
    /// the errors of [`LinkedInClient::fetch_object`].
    async fn find<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        id: &Self::Id,
        params: &[Parameter],
    ) -> Result<Self, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        tracing::debug!(resource = Self::NAME, id = %id, "Fetching entity");
        client.fetch_object(&Self::entity_path(id), params).await
    }

    /// Fetches several entities in one request.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::batch_get`].
    async fn batch_get<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        ids: &[Self::Id],
        params: &[Parameter],
    ) -> Result<BatchResult<Self>, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        tracing::debug!(resource = Self::NAME, count = ids.len(), "Batch fetching entities");
        client.batch_get(Self::PATH, ids, params).await
    }
}

/// A [`LinkedInResource`] LinkedIn allows deleting by id.
#[allow(async_fn_in_trait)]
pub trait DeletableResource: LinkedInResource {
    /// Deletes the entity with the given id.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::delete`].
    async fn delete<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        id: &Self::Id,
    ) -> Result<(), LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        client.delete(&Self::entity_path(id), &[]).await
    }
}
