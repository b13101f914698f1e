//! User-generated content posts (`v2/ugcPosts`).
//!
//! UGC posts nest their payload under Rest.li union keys such as
//! `com.linkedin.ugc.ShareContent`; the types here keep those keys in their
//! serde renames so callers work with plain structs.

use serde::{Deserialize, Serialize};

use crate::clients::WebRequestor;
use crate::connection::Connection;
use crate::json::JsonMapper;
use crate::rest::resources::common::{AuditStamp, LifecycleState};
use crate::rest::{
    Created, DeletableResource, ErrorMapper, LinkedInClient, LinkedInError, LinkedInResource,
    Parameter, Parameters,
};
use crate::urn::Urn;

/// A UGC post.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UgcPost {
    /// The post URN.
    #[serde(default, skip_serializing)]
    pub id: Option<Urn>,
    /// The member or organization posting.
    pub author: Option<Urn>,
    /// Publication state.
    #[serde(default)]
    pub lifecycle_state: LifecycleState,
    /// The share payload.
    #[serde(default)]
    pub specific_content: SpecificContent,
    /// Who can see the post.
    #[serde(default)]
    pub visibility: UgcVisibility,
    /// Creation stamp.
    #[serde(default, skip_serializing)]
    pub created: Option<AuditStamp>,
    /// Last modification stamp.
    #[serde(default, skip_serializing)]
    pub last_modified: Option<AuditStamp>,
    /// First publication stamp.
    #[serde(default, skip_serializing)]
    pub first_published_at: Option<i64>,
}

/// The union wrapper around [`UgcShareContent`].
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpecificContent {
    /// The share content.
    #[serde(rename = "com.linkedin.ugc.ShareContent", default)]
    pub share_content: UgcShareContent,
}

/// Text and media of a UGC post.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UgcShareContent {
    /// The commentary.
    #[serde(default)]
    pub share_commentary: TextValue,
    /// `NONE`, `ARTICLE`, `IMAGE` or `VIDEO`.
    #[serde(default = "no_media")]
    pub share_media_category: String,
    /// Attached media.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<UgcMedia>,
}

fn no_media() -> String {
    "NONE".to_string()
}

/// A plain text value.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextValue {
    /// The text.
    #[serde(default)]
    pub text: String,
}

/// A media item of a UGC post.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UgcMedia {
    /// `READY` once the asset is processed.
    #[serde(default = "ready")]
    pub status: String,
    /// Uploaded asset URN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Urn>,
    /// Article URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
    /// Media title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<TextValue>,
    /// Media description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<TextValue>,
}

fn ready() -> String {
    "READY".to_string()
}

/// The union wrapper around the member network visibility.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UgcVisibility {
    /// `PUBLIC` or `CONNECTIONS`.
    #[serde(rename = "com.linkedin.ugc.MemberNetworkVisibility")]
    pub member_network_visibility: String,
}

impl Default for UgcVisibility {
    fn default() -> Self {
        Self {
            member_network_visibility: "PUBLIC".to_string(),
        }
    }
}

impl LinkedInResource for UgcPost {
    type Id = Urn;
    const NAME: &'static str = "UgcPost";
    const PATH: &'static str = "v2/ugcPosts";
}

impl DeletableResource for UgcPost {}

impl UgcPost {
    /// A public text-only post.
    #[must_use]
    pub fn text(author: Urn, text: impl Into<String>) -> Self {
        Self {
            author: Some(author),
            specific_content: SpecificContent {
                share_content: UgcShareContent {
                    share_commentary: TextValue { text: text.into() },
                    share_media_category: no_media(),
                    media: Vec::new(),
                },
            },
            ..Self::default()
        }
    }

    /// Returns the commentary text.
    #[must_use]
    pub fn commentary(&self) -> &str {
        &self.specific_content.share_content.share_commentary.text
    }

    /// Publishes a UGC post.
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

    /// Lists posts by any of `authors`.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::fetch_connection`].
    pub async fn find_by_authors<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        authors: &[Urn],
        params: &[Parameter],
    ) -> Result<Connection<Self>, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        let params = Parameters::new()
            .with("q", "authors")
            .list("authors", authors)
            .extend(params);
        client.fetch_connection(Self::PATH, &params).await
    }
}
