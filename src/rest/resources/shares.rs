//! Legacy shares (`v2/shares`).

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::clients::WebRequestor;
use crate::connection::Connection;
use crate::json::JsonMapper;
use crate::rest::resources::common::AuditStamp;
use crate::rest::{
    Created, DeletableResource, ErrorMapper, LinkedInClient, LinkedInError, LinkedInResource,
    Parameter, Parameters,
};
use crate::urn::Urn;

/// A share.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Share {
    /// The share id.
    #[serde(default, skip_serializing)]
    pub id: Option<String>,
    /// The activity URN of the share.
    #[serde(default, skip_serializing)]
    pub activity: Option<Urn>,
    /// The member or organization sharing.
    pub owner: Option<Urn>,
    /// Share text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<ShareText>,
    /// Optional subject line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Attached link or media.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ShareContent>,
    /// Distribution target; an empty object shares to the main feed.
    #[serde(default = "feed_distribution")]
    pub distribution: serde_json::Value,
    /// Creation stamp.
    #[serde(default, skip_serializing)]
    pub created: Option<AuditStamp>,
    /// Last modification stamp.
    #[serde(default, skip_serializing)]
    pub last_modified: Option<AuditStamp>,
    /// Whether the text has been edited.
    #[serde(default, skip_serializing)]
    pub edited: bool,
}

fn feed_distribution() -> serde_json::Value {
    json!({ "linkedInDistributionTarget": {} })
}

/// Share text.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShareText {
    /// The text itself.
    pub text: String,
}

/// Content attached to a share.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShareContent {
    /// Linked entities.
    #[serde(default)]
    pub content_entities: Vec<ContentEntity>,
    /// Title of the content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Description of the content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `ARTICLE`, `IMAGE`, `RICH` or `VIDEO`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_media_category: Option<String>,
}

/// A linked entity.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentEntity {
    /// URL of the entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_location: Option<String>,
    /// Asset URN for uploaded media.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<Urn>,
    /// Thumbnails.
    #[serde(default)]
    pub thumbnails: Vec<Thumbnail>,
}

/// A thumbnail image.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Thumbnail {
    /// The image URL.
    #[serde(default)]
    pub resolved_url: Option<String>,
}

impl LinkedInResource for Share {
    type Id = String;
    const NAME: &'static str = "Share";
    const PATH: &'static str = "v2/shares";
}

impl DeletableResource for Share {}

impl Share {
    /// A text-only share.
    #[must_use]
    pub fn text(owner: Urn, text: impl Into<String>) -> Self {
        Self {
            owner: Some(owner),
            text: Some(ShareText { text: text.into() }),
            distribution: feed_distribution(),
            ..Self::default()
        }
    }

    /// Creates a share.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::publish`].
    pub async fn create<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        share: &Self,
    ) -> Result<Created<Self>, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        client.publish(Self::PATH, share, &[]).await
    }

    /// Lists shares owned by any of `owners`.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::fetch_connection`].
    pub async fn find_by_owners<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        owners: &[Urn],
        params: &[Parameter],
    ) -> Result<Connection<Self>, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        let params = Parameters::new()
            .with("q", "owners")
            .list("owners", owners)
            .extend(params);
        client.fetch_connection(Self::PATH, &params).await
    }

    /// Replaces the text of a share.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::partial_update`].
    pub async fn update_text<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        id: &str,
        text: &str,
    ) -> Result<(), LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        let patch = json!({ "text": { "text": text } });
        client
            .partial_update(&Self::entity_path(&id.to_string()), &patch, &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_deserializes() {
        let share: Share = serde_json::from_value(json!({
            "id": "6275832358189047808",
            "activity": "urn:li:activity:6275832358817034240",
            "owner": "urn:li:organization:2414183",
            "text": {"text": "Test Share!"},
            "content": {
                "contentEntities": [{
                    "entityLocation": "https://www.example.com/",
                    "thumbnails": [{"resolvedUrl": "https://www.example.com/image.jpg"}]
                }],
                "title": "Test Share with Content"
            },
            "distribution": {"linkedInDistributionTarget": {}},
            "created": {"actor": "urn:li:person:A8xe03Qt10", "time": 1_496_170_208_000_i64},
            "lastModified": {"actor": "urn:li:person:A8xe03Qt10", "time": 1_496_170_208_000_i64},
            "edited": false
        }))
        .unwrap();

        assert_eq!(share.id.as_deref(), Some("6275832358189047808"));
        assert_eq!(share.text.unwrap().text, "Test Share!");
        let content = share.content.unwrap();
        assert_eq!(content.content_entities.len(), 1);
        assert_eq!(
            content.content_entities[0].thumbnails[0].resolved_url.as_deref(),
            Some("https://www.example.com/image.jpg")
        );
        assert!(share.created.is_some());
    }

    #[test]
    fn test_text_share_serializes() {
        let share = Share::text(Urn::organization("1"), "hi");
        let value = serde_json::to_value(&share).unwrap();
        assert_eq!(value["owner"], "urn:li:organization:1");
        assert_eq!(value["text"]["text"], "hi");
        assert_eq!(value["distribution"], json!({"linkedInDistributionTarget": {}}));
        assert!(value.get("id").is_none());
        assert!(value.get("edited").is_none());
    }
}
