//! Organization social action notification payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::json::serde_helpers::epoch_millis_option;
use crate::urn::Urn;

/// The `type` LinkedIn sends for organization social action notifications.
pub const ORGANIZATION_SOCIAL_ACTION_NOTIFICATIONS: &str =
    "ORGANIZATION_SOCIAL_ACTION_NOTIFICATIONS";

/// A webhook delivery.
///
/// # Example
///
/// ```rust
/// use linkedin_api::webhooks::{SocialAction, WebhookEvent};
///
/// let body = r#"{
///     "type": "ORGANIZATION_SOCIAL_ACTION_NOTIFICATIONS",
///     "notifications": [{
///         "notificationId": 7,
///         "organizationalEntity": "urn:li:organization:2414183",
///         "action": "LIKE",
///         "sourcePost": "urn:li:share:6844785523593134080",
///         "lastModifiedAt": 1631811662000
///     }]
/// }"#;
/// let event = WebhookEvent::from_slice(body.as_bytes()).unwrap();
/// assert!(event.is_organization_social_action());
/// assert_eq!(event.notifications[0].action, SocialAction::Like);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebhookEvent {
    /// The delivery kind.
    #[serde(rename = "type", default)]
    pub event_type: String,
    /// The batched notifications.
    #[serde(default)]
    pub notifications: Vec<SocialActionNotification>,
}

impl WebhookEvent {
    /// Parses a raw webhook body.
    ///
    /// # Errors
    ///
    /// Returns the [`serde_json::Error`] if the body is not a notification payload.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Returns `true` for organization social action deliveries.
    #[must_use]
    pub fn is_organization_social_action(&self) -> bool {
        self.event_type == ORGANIZATION_SOCIAL_ACTION_NOTIFICATIONS
    }
}

/// The member action that triggered a notification.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SocialAction {
    /// A reaction on an organization post.
    Like,
    /// A comment on an organization post.
    Comment,
    /// A reshare of an organization post.
    Share,
    /// A post mentioning the organization.
    ShareMention,
    /// A comment by a page admin.
    AdminComment,
    /// An edited comment.
    CommentEdit,
    /// A deleted comment.
    CommentDelete,
    /// A value this crate does not know yet.
    #[serde(other)]
    Unknown,
}

/// One notification in a delivery.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SocialActionNotification {
    /// Unique per notification; use it to drop redeliveries.
    pub notification_id: u64,
    /// The organization the notification is about.
    pub organizational_entity: Urn,
    /// What happened.
    pub action: SocialAction,
    /// The organization post acted on.
    #[serde(default)]
    pub source_post: Option<Urn>,
    /// The resulting comment or share.
    #[serde(default)]
    pub generated_activity: Option<Urn>,
    /// Expanded source post.
    #[serde(default)]
    pub decorated_source_post: Option<DecoratedPost>,
    /// Expanded generated activity.
    #[serde(default)]
    pub decorated_generated_activity: Option<DecoratedActivity>,
    /// The member subscribed to the notifications.
    #[serde(default)]
    pub subscriber: Option<Urn>,
    /// When the action happened.
    #[serde(
        default,
        with = "epoch_millis_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_at: Option<DateTime<Utc>>,
}

/// An expanded post reference.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecoratedPost {
    /// The post URN.
    #[serde(default)]
    pub entity: Option<Urn>,
    /// The post author.
    #[serde(default)]
    pub owner: Option<Urn>,
}

/// An expanded comment or share.
///
/// Only the key matching the action is present.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DecoratedActivity {
    /// Set for comment actions.
    #[serde(default)]
    pub comment: Option<DecoratedComment>,
    /// Set for share and mention actions.
    #[serde(default)]
    pub share: Option<DecoratedPost>,
}

/// An expanded comment.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecoratedComment {
    /// The comment URN.
    #[serde(default)]
    pub entity: Option<Urn>,
    /// The commenter.
    #[serde(default)]
    pub owner: Option<Urn>,
    /// The comment text.
    #[serde(default)]
    pub text: Option<String>,
}
