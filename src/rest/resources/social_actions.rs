//! Comments and likes (`rest/socialActions`).
//!
//! Social actions hang off a target: a share, UGC post or comment URN.
//!
//! # Example
//!
//! ```rust,ignore
//! use linkedin_api::rest::resources::SocialActions;
//! use linkedin_api::Urn;
//!
//! let post = Urn::share("6844785523593134080");
//! let me = Urn::person("abc123");
//!
//! let summary = SocialActions::summary(&client, &post).await?;
//! let created = SocialActions::create_comment(&client, &post, &me, "Nice post!").await?;
//! SocialActions::create_like(&client, &post, &me).await?;
//! ```

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::clients::WebRequestor;
use crate::connection::Connection;
use crate::json::JsonMapper;
use crate::rest::resources::common::AuditStamp;
use crate::rest::{
    build_path, Created, ErrorMapper, LinkedInClient, LinkedInError, LinkedInResource, Parameter,
};
use crate::urn::Urn;

const COMMENTS_PATH: &str = "rest/socialActions/{target}/comments";
const COMMENT_PATH: &str = "rest/socialActions/{target}/comments/{comment}";
const LIKES_PATH: &str = "rest/socialActions/{target}/likes";
const LIKE_PATH: &str = "rest/socialActions/{target}/likes/{actor}";

/// Comment and like totals of a target.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SocialActions {
    /// The target.
    #[serde(default)]
    pub target: Option<Urn>,
    /// Comment totals.
    #[serde(default)]
    pub comments_summary: CommentsSummary,
    /// Like totals.
    #[serde(default)]
    pub likes_summary: LikesSummary,
}

/// Comment totals.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommentsSummary {
    /// Top-level comments.
    #[serde(default)]
    pub total_first_level_comments: u64,
    /// All comments including replies.
    #[serde(default)]
    pub aggregated_total_comments: u64,
}

/// Like totals.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LikesSummary {
    /// Likes.
    #[serde(default)]
    pub total_likes: u64,
    /// Whether the caller liked the target.
    #[serde(default)]
    pub liked_by_current_user: bool,
}

/// A comment.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// The comment id within its target.
    #[serde(default)]
    pub id: Option<String>,
    /// The full comment URN.
    #[serde(default)]
    pub comment_urn: Option<Urn>,
    /// The commenter.
    pub actor: Urn,
    /// The commented target.
    #[serde(default)]
    pub object: Option<Urn>,
    /// The text.
    pub message: CommentMessage,
    /// The parent comment, for replies.
    #[serde(default)]
    pub parent_comment: Option<Urn>,
    /// Creation stamp.
    #[serde(default)]
    pub created: Option<AuditStamp>,
    /// Last modification stamp.
    #[serde(default)]
    pub last_modified: Option<AuditStamp>,
    /// Like totals of the comment.
    #[serde(default)]
    pub likes_summary: Option<LikesSummary>,
}

/// Comment text.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentMessage {
    /// The text.
    pub text: String,
}

/// A like.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    /// The member or organization liking.
    pub actor: Urn,
    /// The liked target.
    #[serde(default)]
    pub object: Option<Urn>,
    /// Creation stamp.
    #[serde(default)]
    pub created: Option<AuditStamp>,
}

impl LinkedInResource for SocialActions {
    type Id = Urn;
    const NAME: &'static str = "SocialActions";
    const PATH: &'static str = "rest/socialActions";
}

impl SocialActions {
    /// Fetches comment and like totals of a target.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::fetch_object`].
    pub async fn summary<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        target: &Urn,
    ) -> Result<Self, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        Self::find(client, target, &[]).await
    }

    /// Lists comments on a target.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::fetch_connection`].
    pub async fn comments<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        target: &Urn,
        params: &[Parameter],
    ) -> Result<Connection<Comment>, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        let path = build_path(COMMENTS_PATH, &[("target", target)]);
        client.fetch_connection(&path, params).await
    }

    /// Comments on a target as `actor`.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::publish`].
    pub async fn create_comment<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        target: &Urn,
        actor: &Urn,
        text: &str,
    ) -> Result<Created<Comment>, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        let path = build_path(COMMENTS_PATH, &[("target", target)]);
        let body = json!({
            "actor": actor,
            "object": target,
            "message": { "text": text },
        });
        client.publish(&path, &body, &[]).await
    }

    /// Deletes a comment made by `actor`.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::delete`].
    pub async fn delete_comment<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        target: &Urn,
        comment_id: &str,
        actor: &Urn,
    ) -> Result<(), LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        let path = build_path(
            COMMENT_PATH,
            &[("target", target), ("comment", &comment_id)],
        );
        client.delete(&path, &[Parameter::urn("actor", actor)]).await
    }

    /// Lists likes on a target.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::fetch_connection`].
    pub async fn likes<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        target: &Urn,
        params: &[Parameter],
    ) -> Result<Connection<Like>, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        let path = build_path(LIKES_PATH, &[("target", target)]);
        client.fetch_connection(&path, params).await
    }

    /// Likes a target as `actor`.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::publish`].
    pub async fn create_like<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        target: &Urn,
        actor: &Urn,
    ) -> Result<Created<Like>, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        let path = build_path(LIKES_PATH, &[("target", target)]);
        let body = json!({ "actor": actor, "object": target });
        client.publish(&path, &body, &[]).await
    }

    /// Removes `actor`'s like from a target.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::delete`].
    pub async fn delete_like<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        target: &Urn,
        actor: &Urn,
    ) -> Result<(), LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        let path = build_path(LIKE_PATH, &[("target", target), ("actor", actor)]);
        client.delete(&path, &[Parameter::urn("actor", actor)]).await
    }
}
