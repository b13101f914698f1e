//! LinkedIn URN identifiers.
//!
//! Every LinkedIn entity is addressed by a URN of the form
//! `urn:li:<entity type>:<id>`. The id may itself be a parenthesised tuple
//! containing nested URNs, e.g.
//! `urn:li:share:(urn:li:person:abc,123)`.
//!
//! # Example
//!
//! ```rust
//! use linkedin_api::Urn;
//!
//! let urn: Urn = "urn:li:organization:2414183".parse().unwrap();
//! assert_eq!(urn.entity_type(), "organization");
//! assert_eq!(urn.id(), "2414183");
//! assert_eq!(urn.encoded(), "urn%3Ali%3Aorganization%3A2414183");
//! ```

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const PREFIX: &str = "urn:li:";

/// Errors produced while parsing a URN.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UrnError {
    /// The value does not start with `urn:li:`.
    #[error("URN '{0}' does not start with 'urn:li:'")]
    MissingPrefix(String),

    /// The entity type segment is empty or malformed.
    #[error("URN '{0}' has no entity type")]
    MissingEntityType(String),

    /// The id segment is empty.
    #[error("URN '{0}' has no id")]
    MissingId(String),

    /// Parentheses in a tuple id are unbalanced.
    #[error("URN '{0}' has unbalanced parentheses")]
    UnbalancedParentheses(String),
}

/// A parsed LinkedIn URN.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Urn {
    entity_type: String,
    id: String,
}

impl Urn {
    /// Builds a URN from an entity type and id.
    #[must_use]
    pub fn new(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Parses a URN string.
    ///
    /// # Errors
    ///
    /// Returns a [`UrnError`] describing the first problem found.
    pub fn parse(value: &str) -> Result<Self, UrnError> {
        let rest = value
            .strip_prefix(PREFIX)
            .ok_or_else(|| UrnError::MissingPrefix(value.to_string()))?;

        let (entity_type, id) = rest
            .split_once(':')
            .ok_or_else(|| UrnError::MissingId(value.to_string()))?;

        if entity_type.is_empty()
            || !entity_type
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(UrnError::MissingEntityType(value.to_string()));
        }
        if id.is_empty() {
            return Err(UrnError::MissingId(value.to_string()));
        }
        if !balanced(id) {
            return Err(UrnError::UnbalancedParentheses(value.to_string()));
        }

        Ok(Self::new(entity_type, id))
    }

    /// URN of a member (`urn:li:person:<id>`).
    #[must_use]
    pub fn person(id: impl Into<String>) -> Self {
        Self::new("person", id)
    }

    /// URN of an organization (`urn:li:organization:<id>`).
    #[must_use]
    pub fn organization(id: impl Into<String>) -> Self {
        Self::new("organization", id)
    }

    /// URN of a v2 share (`urn:li:share:<id>`).
    #[must_use]
    pub fn share(id: impl Into<String>) -> Self {
        Self::new("share", id)
    }

    /// URN of a UGC post (`urn:li:ugcPost:<id>`).
    #[must_use]
    pub fn ugc_post(id: impl Into<String>) -> Self {
        Self::new("ugcPost", id)
    }

    /// URN of an image (`urn:li:image:<id>`).
    #[must_use]
    pub fn image(id: impl Into<String>) -> Self {
        Self::new("image", id)
    }

    /// URN of a video (`urn:li:video:<id>`).
    #[must_use]
    pub fn video(id: impl Into<String>) -> Self {
        Self::new("video", id)
    }

    /// URN of a digital media asset (`urn:li:digitalmediaAsset:<id>`).
    #[must_use]
    pub fn digital_media_asset(id: impl Into<String>) -> Self {
        Self::new("digitalmediaAsset", id)
    }

    /// URN of a comment on an activity.
    #[must_use]
    pub fn comment(activity: &Self, id: impl fmt::Display) -> Self {
        Self::new("comment", format!("({activity},{id})"))
    }

    /// Returns the entity type, e.g. `organization`.
    #[must_use]
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// Returns the id segment (may be a tuple).
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns `true` if the id is a parenthesised tuple.
    #[must_use]
    pub fn is_compound(&self) -> bool {
        self.id.starts_with('(') && self.id.ends_with(')')
    }

    /// Splits a tuple id into its top-level members.
    ///
    /// Returns the plain id as a single element for non-tuple URNs.
    #[must_use]
    pub fn id_parts(&self) -> Vec<&str> {
        if !self.is_compound() {
            return vec![self.id.as_str()];
        }
        let inner = &self.id[1..self.id.len() - 1];
        let mut parts = Vec::new();
        let mut depth = 0usize;
        let mut start = 0usize;
        for (i, c) in inner.char_indices() {
            match c {
                '(' => depth += 1,
                ')' => depth = depth.saturating_sub(1),
                ',' if depth == 0 => {
                    parts.push(&inner[start..i]);
                    start = i + 1;
                }
                _ => {}
            }
        }
        parts.push(&inner[start..]);
        parts
    }

    /// Returns the percent-encoded URN, suitable for URL paths and
    /// Rest.li query values.
    #[must_use]
    pub fn encoded(&self) -> String {
        urlencoding::encode(&self.to_string()).into_owned()
    }
}

fn balanced(id: &str) -> bool {
    let mut depth: i32 = 0;
    for c in id.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

impl fmt::Display for Urn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PREFIX}{}:{}", self.entity_type, self.id)
    }
}

impl FromStr for Urn {
    type Err = UrnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Urn {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Urn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_urn() {
        let urn = Urn::parse("urn:li:person:abc123").unwrap();
        assert_eq!(urn.entity_type(), "person");
        assert_eq!(urn.id(), "abc123");
        assert!(!urn.is_compound());
        assert_eq!(urn.to_string(), "urn:li:person:abc123");
    }

    #[test]
    fn test_parse_compound_urn() {
        let urn = Urn::parse("urn:li:comment:(urn:li:activity:123,456)").unwrap();
        assert_eq!(urn.entity_type(), "comment");
        assert!(urn.is_compound());
        assert_eq!(urn.id_parts(), vec!["urn:li:activity:123", "456"]);
    }

    #[test]
    fn test_nested_compound_id_parts() {
        let urn =
            Urn::parse("urn:li:x:(urn:li:y:(urn:li:z:1,2),urn:li:organization:3)").unwrap();
        assert_eq!(
            urn.id_parts(),
            vec!["urn:li:y:(urn:li:z:1,2)", "urn:li:organization:3"]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Urn::parse("person:abc"),
            Err(UrnError::MissingPrefix(_))
        ));
        assert!(matches!(
            Urn::parse("urn:li:person"),
            Err(UrnError::MissingId(_))
        ));
        assert!(matches!(
            Urn::parse("urn:li::abc"),
            Err(UrnError::MissingEntityType(_))
        ));
        assert!(matches!(
            Urn::parse("urn:li:person:"),
            Err(UrnError::MissingId(_))
        ));
        assert!(matches!(
            Urn::parse("urn:li:comment:(urn:li:activity:1,2"),
            Err(UrnError::UnbalancedParentheses(_))
        ));
    }

    #[test]
    fn test_well_known_constructors() {
        assert_eq!(Urn::organization("1").to_string(), "urn:li:organization:1");
        assert_eq!(Urn::ugc_post("2").to_string(), "urn:li:ugcPost:2");
        assert_eq!(
            Urn::digital_media_asset("C5").to_string(),
            "urn:li:digitalmediaAsset:C5"
        );
        let activity = Urn::new("activity", "9");
        assert_eq!(
            Urn::comment(&activity, 7).to_string(),
            "urn:li:comment:(urn:li:activity:9,7)"
        );
    }

    #[test]
    fn test_encoded_escapes_reserved_characters() {
        let urn = Urn::parse("urn:li:comment:(urn:li:activity:1,2)").unwrap();
        assert_eq!(
            urn.encoded(),
            "urn%3Ali%3Acomment%3A%28urn%3Ali%3Aactivity%3A1%2C2%29"
        );
    }

    #[test]
    fn test_serde_as_string() {
        let urn = Urn::person("abc");
        let json = serde_json::to_string(&urn).unwrap();
        assert_eq!(json, r#""urn:li:person:abc""#);
        let back: Urn = serde_json::from_str(&json).unwrap();
        assert_eq!(back, urn);
        assert!(serde_json::from_str::<Urn>(r#""not-a-urn""#).is_err());
    }
}
