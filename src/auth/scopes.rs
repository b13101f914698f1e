//! OAuth scope handling for the LinkedIn API.
//!
//! LinkedIn scopes are flat permission names such as `openid`, `profile`,
//! `w_member_social` or `rw_organization_admin`. They are sent space
//! separated in the authorization URL, and token responses report granted
//! scopes comma separated, so both separators are accepted when parsing.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ConfigError;

/// A set of OAuth scopes.
///
/// Scopes are deduplicated and kept in sorted order, so the rendered
/// scope string is stable.
///
/// # Serialization
///
/// `AuthScopes` serializes to and deserializes from a space separated string.
///
/// # Example
///
/// ```rust
/// use linkedin_api::AuthScopes;
///
/// let scopes: AuthScopes = "openid profile w_member_social".parse().unwrap();
/// assert_eq!(scopes.to_scope_string(), "openid profile w_member_social");
///
/// let granted: AuthScopes = "openid,profile,w_member_social,email".parse().unwrap();
/// assert!(granted.covers(&scopes));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AuthScopes {
    scopes: BTreeSet<String>,
}

impl AuthScopes {
    /// Creates an empty scope set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the scope set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Returns the number of scopes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Returns `true` if the set contains `scope`.
    #[must_use]
    pub fn contains(&self, scope: &str) -> bool {
        self.scopes.contains(scope)
    }

    /// Returns `true` if every scope in `other` is also in this set.
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        other.scopes.is_subset(&self.scopes)
    }

    /// Returns an iterator over the scopes in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(String::as_str)
    }

    /// Renders the scopes space separated, as the authorization URL expects.
    #[must_use]
    pub fn to_scope_string(&self) -> String {
        self.iter().collect::<Vec<_>>().join(" ")
    }

    fn validate(scope: &str) -> Result<(), ConfigError> {
        if scope.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            Ok(())
        } else {
            Err(ConfigError::InvalidScopes {
                reason: format!("Invalid characters in scope: '{scope}'"),
            })
        }
    }
}

impl FromStr for AuthScopes {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scopes = BTreeSet::new();

        for scope in s.split(|c: char| c == ',' || c.is_whitespace()) {
            if scope.is_empty() {
                continue;
            }
            Self::validate(scope)?;
            scopes.insert(scope.to_string());
        }

        Ok(Self { scopes })
    }
}

impl TryFrom<Vec<String>> for AuthScopes {
    type Error = ConfigError;

    fn try_from(scopes: Vec<String>) -> Result<Self, Self::Error> {
        let mut set = BTreeSet::new();
        for scope in scopes {
            let scope = scope.trim();
            if scope.is_empty() {
                continue;
            }
            Self::validate(scope)?;
            set.insert(scope.to_string());
        }
        Ok(Self { scopes: set })
    }
}

impl fmt::Display for AuthScopes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_scope_string())
    }
}

impl Serialize for AuthScopes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_scope_string())
    }
}

impl<'de> Deserialize<'de> for AuthScopes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
