//! Posts (`rest/posts`).
//!
//! The Posts API is LinkedIn's current way to publish and read member and
//! organization content. It replaces both [`Share`](super::Share) and
//! [`UgcPost`](super::UgcPost).
//!
//! # Example
//!
//! ```rust,ignore
//! use linkedin_api::rest::resources::{Post, PostUpdate, Visibility};
//! use linkedin_api::rest::{DeletableResource, LinkedInResource};
//! use linkedin_api::Urn;
//!
//! let org = Urn::organization("2414183");
//! let created = Post::create(&client, &Post::text(org.clone(), "Hello", Visibility::Public)).await?;
//! let id: Urn = created.id.parse()?;
//!
//! Post::update(&client, &id, &PostUpdate::commentary("Hello, edited")).await?;
//! let page = Post::find_by_author(&client, &org, &[]).await?;
//! Post::delete(&client, &id).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::WebRequestor;
use crate::connection::Connection;
use crate::json::serde_helpers::epoch_millis_option;
use crate::json::JsonMapper;
use crate::rest::resources::common::{LifecycleState, Visibility};
use crate::rest::{
    Created, DeletableResource, ErrorMapper, LinkedInClient, LinkedInError, LinkedInResource,
    Parameter, Parameters,
};
use crate::urn::Urn;

/// A post.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// The post URN (`urn:li:share:...` or `urn:li:ugcPost:...`).
    #[serde(default, skip_serializing)]
    pub id: Option<Urn>,

    /// The member or organization posting.
    pub author: Option<Urn>,

    /// The text of the post.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,

    /// Who can see the post.
    #[serde(default)]
    pub visibility: Visibility,

    /// Where the post is distributed.
    #[serde(default)]
    pub distribution: Distribution,

    /// Attached media, article or images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<PostContent>,

    /// Publication state.
    #[serde(default)]
    pub lifecycle_state: LifecycleState,

    /// Whether the author disabled resharing.
    #[serde(default)]
    pub is_reshare_disabled_by_author: bool,

    /// The reshared post, for reshares.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reshare_context: Option<ReshareContext>,

    /// When the post was created.
    #[serde(default, with = "epoch_millis_option", skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the post was last modified.
    #[serde(default, with = "epoch_millis_option", skip_serializing)]
    pub last_modified_at: Option<DateTime<Utc>>,

    /// When the post was published.
    #[serde(default, with = "epoch_millis_option", skip_serializing)]
    pub published_at: Option<DateTime<Utc>>,
}

/// Feed distribution settings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    /// `MAIN_FEED` or `NONE`.
    #[serde(default = "main_feed")]
    pub feed_distribution: String,
    /// Targeting facets.
    #[serde(default)]
    pub target_entities: Vec<serde_json::Value>,
    /// External channels.
    #[serde(default)]
    pub third_party_distribution_channels: Vec<String>,
}

fn main_feed() -> String {
    "MAIN_FEED".to_string()
}

impl Default for Distribution {
    fn default() -> Self {
        Self {
            feed_distribution: main_feed(),
            target_entities: Vec::new(),
            third_party_distribution_channels: Vec::new(),
        }
    }
}

/// Content attached to a post. Exactly one field is set.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostContent {
    /// A single image, video or document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    /// A link preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<Article>,
    /// Several images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_image: Option<MultiImage>,
}

/// An uploaded media asset.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    /// The image, video or document URN.
    pub id: Urn,
    /// Title shown with the media.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Accessibility text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

/// A link preview.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// The article URL.
    pub source: String,
    /// Preview title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Preview description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Thumbnail image URN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Urn>,
}

/// Several images in one post.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MultiImage {
    /// The images, in display order.
    pub images: Vec<Media>,
}

/// The post a reshare points at.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReshareContext {
    /// The directly reshared post.
    pub parent: Urn,
    /// The original post of a reshare chain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<Urn>,
}

/// Fields of a post that can be changed after publishing.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostUpdate {
    /// New text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
    /// New lifecycle state, e.g. to publish a draft.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<LifecycleState>,
}

impl PostUpdate {
    /// An update replacing the text.
    #[must_use]
    pub fn commentary(text: impl Into<String>) -> Self {
        Self {
            commentary: Some(text.into()),
            ..Self::default()
        }
    }
}

impl LinkedInResource for Post {
    type Id = Urn;
    const NAME: &'static str = "Post";
    const PATH: &'static str = "rest/posts";
}

impl DeletableResource for Post {}

impl Post {
    /// A text-only post, published to the main feed.
    #[must_use]
    pub fn text(author: Urn, commentary: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            author: Some(author),
            commentary: Some(commentary.into()),
            visibility,
            ..Self::default()
        }
    }

    /// Publishes a post. The new post's URN is in [`Created::id`].
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::publish`].
    pub async fn create<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        post: &Self,
    ) -> Result<Created<Self>, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        client.publish(Self::PATH, post, &[]).await
    }

    /// Lists posts by an author, newest first.
    ///
    /// `params` may add `count`, `start`, `sortBy` or `viewContext`.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::fetch_connection`].
    pub async fn find_by_author<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        author: &Urn,
        params: &[Parameter],
    ) -> Result<Connection<Self>, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        let params = Parameters::new()
            .with("q", "author")
            .urn("author", author)
            .extend(params);
        client.fetch_connection(Self::PATH, &params).await
    }

    /// Changes a published post.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::partial_update`].
    pub async fn update<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        id: &Urn,
        update: &PostUpdate,
    ) -> Result<(), LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        client
            .partial_update(&Self::entity_path(id), update, &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_deserializes_from_api_shape() {
        let post: Post = serde_json::from_value(json!({
            "id": "urn:li:share:6844785523593134080",
            "author": "urn:li:organization:5515715",
            "commentary": "Sample text Post",
            "visibility": "PUBLIC",
            "distribution": {
                "feedDistribution": "MAIN_FEED",
                "targetEntities": [],
                "thirdPartyDistributionChannels": []
            },
            "content": {
                "media": {"title": "title of the video", "id": "urn:li:video:C5F10AQGKQg_6y2a4sQ"}
            },
            "lifecycleState": "PUBLISHED",
            "isReshareDisabledByAuthor": false,
            "createdAt": 1_631_811_542_000_i64,
            "lastModifiedAt": 1_631_811_542_000_i64,
            "publishedAt": 1_631_811_542_000_i64
        }))
        .unwrap();

        assert_eq!(post.id, Some(Urn::share("6844785523593134080")));
        assert_eq!(post.visibility, Visibility::Public);
        let media = post.content.unwrap().media.unwrap();
        assert_eq!(media.id.entity_type(), "video");
        assert_eq!(post.created_at.unwrap().timestamp_millis(), 1_631_811_542_000);
    }

    #[test]
    fn test_text_post_serializes_for_create() {
        let post = Post::text(Urn::person("abc"), "Hello", Visibility::Connections);
        let value = serde_json::to_value(&post).unwrap();

        assert_eq!(value["author"], "urn:li:person:abc");
        assert_eq!(value["visibility"], "CONNECTIONS");
        assert_eq!(value["lifecycleState"], "PUBLISHED");
        assert_eq!(value["distribution"]["feedDistribution"], "MAIN_FEED");
        assert!(value.get("id").is_none());
        assert!(value.get("createdAt").is_none());
        assert!(value.get("content").is_none());
    }

    #[test]
    fn test_post_update_skips_unset_fields() {
        let value = serde_json::to_value(PostUpdate::commentary("edited")).unwrap();
        assert_eq!(value, json!({"commentary": "edited"}));
    }

    #[test]
    fn test_entity_path() {
        assert_eq!(
            Post::entity_path(&Urn::ugc_post("1")),
            "rest/posts/urn%3Ali%3AugcPost%3A1"
        );
    }
}
