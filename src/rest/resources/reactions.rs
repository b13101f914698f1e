//! Reactions (`rest/reactions`).
//!
//! Reactions are keyed by the Rest.li compound key `(actor:..,entity:..)`;
//! the key's delimiters stay literal and the URNs inside are encoded.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::clients::WebRequestor;
use crate::connection::Connection;
use crate::json::JsonMapper;
use crate::rest::resources::common::AuditStamp;
use crate::rest::{Created, ErrorMapper, LinkedInClient, LinkedInError, Parameter, Parameters};
use crate::urn::Urn;

const PATH: &str = "rest/reactions";

/// The kind of reaction.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReactionType {
    /// "Like".
    Like,
    /// "Celebrate".
    Praise,
    /// "Love".
    Empathy,
    /// "Insightful".
    Interest,
    /// "Support".
    Appreciation,
    /// "Funny".
    Entertainment,
    /// A value this crate does not know yet.
    #[serde(other)]
    Unknown,
}

/// A reaction.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    /// The reaction URN, `urn:li:reaction:(<actor>,<entity>)`.
    #[serde(default)]
    pub id: Option<Urn>,
    /// The kind of reaction.
    pub reaction_type: ReactionType,
    /// The post reacted to.
    #[serde(default)]
    pub root: Option<Urn>,
    /// Creation stamp.
    #[serde(default)]
    pub created: Option<AuditStamp>,
    /// Last modification stamp.
    #[serde(default)]
    pub last_modified: Option<AuditStamp>,
}

impl Reaction {
    /// Returns the reacting actor, taken from the reaction URN.
    #[must_use]
    pub fn actor(&self) -> Option<&str> {
        self.id
            .as_ref()
            .filter(|id| id.is_compound())
            .and_then(|id| id.id_parts().first().copied())
    }

    /// Reacts to `entity` as `actor`.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::publish`].
    pub async fn create<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        actor: &Urn,
        entity: &Urn,
        reaction_type: ReactionType,
    ) -> Result<Created<Self>, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        let body = json!({ "root": entity, "reactionType": reaction_type });
        client
            .publish(PATH, &body, &[Parameter::urn("actor", actor)])
            .await
    }

    /// Lists reactions on `entity`, newest first.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::fetch_connection`].
    pub async fn find_by_entity<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        entity: &Urn,
        params: &[Parameter],
    ) -> Result<Connection<Self>, LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        let path = format!("{PATH}/(entity:{})", entity.encoded());
        let params = Parameters::new()
            .with("q", "entity")
            .raw("sort", "(value:REVERSE_CHRONOLOGICAL)")
            .extend(params);
        client.fetch_connection(&path, &params).await
    }

    /// Removes `actor`'s reaction from `entity`.
    ///
    /// # Errors
    ///
    /// See [`LinkedInClient::delete`].
    pub async fn delete<R, M, E>(
        client: &LinkedInClient<R, M, E>,
        actor: &Urn,
        entity: &Urn,
    ) -> Result<(), LinkedInError>
    where
        R: WebRequestor,
        M: JsonMapper,
        E: ErrorMapper,
    {
        client.delete(&key_path(actor, entity), &[]).await
    }
}

fn key_path(actor: &Urn, entity: &Urn) -> String {
    format!(
        "{PATH}/(actor:{},entity:{})",
        actor.encoded(),
        entity.encoded()
    )
}
