//! JSON to Rust value mapping.
//!
//! Response bodies are turned into typed values through the [`JsonMapper`]
//! trait. The default implementation, [`DefaultJsonMapper`], layers a few
//! LinkedIn-specific tolerances on top of `serde_json`:
//!
//! - A blank body or the literal `null` maps to JSON `null`, so an
//!   `Option<T>` target yields `None`.
//! - When an object is expected but an array arrives, the first element
//!   is used.
//! - When a list is expected, an empty object `{}` yields an empty list and
//!   a Rest.li collection (`{"elements": [...]}`) is unwrapped.
//! - Serialization can drop `null` members recursively.
//!
//! Per-field coercions (epoch-millisecond dates, numbers sent as strings,
//! `{}` in list position) live in [`serde_helpers`]. Several JSON keys can
//! feed the same field through serde's `alias` attribute.
//!
//! # Example
//!
//! ```rust
//! use linkedin_api::json::{DefaultJsonMapper, JsonMapper};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Named { name: String }
//!
//! let mapper = DefaultJsonMapper::new();
//! let list: Vec<Named> = mapper.to_list(r#"{"elements":[{"name":"a"}]}"#).unwrap();
//! assert_eq!(list[0].name, "a");
//!
//! let empty: Vec<Named> = mapper.to_list("{}").unwrap();
//! assert!(empty.is_empty());
//! ```

pub mod serde_helpers;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Errors produced while mapping between JSON and Rust values.
#[derive(Debug, Error)]
pub enum JsonMappingError {
    /// The input was not well-formed JSON.
    #[error("Malformed JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The JSON was well-formed but did not fit the target type.
    #[error("Unable to map JSON to {type_name}: {source}")]
    Mapping {
        /// Name of the target type.
        type_name: &'static str,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// A list was requested but the JSON is a non-collection object.
    #[error("Expected a JSON array or collection but found: {found}")]
    NotAList {
        /// Truncated rendering of the offending JSON.
        found: String,
    },

    /// The value could not be serialized.
    #[error("Unable to serialize value to JSON: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Converts between JSON text and typed values.
///
/// Implement this to change how response bodies are interpreted; the
/// [`LinkedInClient`](crate::LinkedInClient) is generic over it.
pub trait JsonMapper: Send + Sync {
    /// Maps a JSON document to a single value.
    ///
    /// # Errors
    ///
    /// Returns [`JsonMappingError`] if the JSON is malformed or does not fit `T`.
    fn to_object<T: DeserializeOwned>(&self, json: &str) -> Result<T, JsonMappingError>;

    /// Maps a JSON document to a list of values.
    ///
    /// # Errors
    ///
    /// Returns [`JsonMappingError`] if the JSON is malformed, is not a list,
    /// or an element does not fit `T`.
    fn to_list<T: DeserializeOwned>(&self, json: &str) -> Result<Vec<T>, JsonMappingError>;

    /// Serializes a value to JSON text, optionally dropping `null` members.
    ///
    /// # Errors
    ///
    /// Returns [`JsonMappingError::Serialize`] if serialization fails.
    fn to_json<T: Serialize>(&self, value: &T, ignore_nulls: bool)
        -> Result<String, JsonMappingError>;
}

/// The default [`JsonMapper`], backed by `serde_json`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultJsonMapper;

impl DefaultJsonMapper {
    /// Creates a new mapper.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn parse(json: &str) -> Result<Value, JsonMappingError> {
        let trimmed = json.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(Value::Null);
        }
        serde_json::from_str(trimmed).map_err(JsonMappingError::Malformed)
    }

    /// Maps an already-parsed value, applying the object-shape tolerances.
    ///
    /// # Errors
    ///
    /// Returns [`JsonMappingError::Mapping`] if no interpretation fits `T`.
    pub fn value_to_object<T: DeserializeOwned>(value: Value) -> Result<T, JsonMappingError> {
        let first_error = match serde_json::from_value::<T>(value.clone()) {
            Ok(mapped) => return Ok(mapped),
            Err(e) => e,
        };

        let fallback = match value {
            Value::Array(mut items) if !items.is_empty() => Some(items.swap_remove(0)),
            Value::Object(ref map) if map.is_empty() => Some(Value::Array(Vec::new())),
            _ => None,
        };

        if let Some(fallback) = fallback {
            if let Ok(mapped) = serde_json::from_value::<T>(fallback) {
                return Ok(mapped);
            }
        }

        Err(JsonMappingError::Mapping {
            type_name: std::any::type_name::<T>(),
            source: first_error,
        })
    }

    /// Maps an already-parsed value to a list.
    ///
    /// # Errors
    ///
    /// Returns [`JsonMappingError`] if the value is not a list-like shape or
    /// an element does not fit `T`.
    pub fn value_to_list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, JsonMappingError> {
        let items = match value {
            Value::Null => return Ok(Vec::new()),
            Value::Array(items) => items,
            Value::Object(mut map) => {
                if map.is_empty() {
                    return Ok(Vec::new());
                }
                match map.remove("elements") {
                    Some(Value::Array(items)) => items,
                    Some(Value::Null) => return Ok(Vec::new()),
                    Some(Value::Object(inner)) if inner.is_empty() => return Ok(Vec::new()),
                    _ => {
                        return Err(JsonMappingError::NotAList {
                            found: truncate(&Value::Object(map).to_string()),
                        })
                    }
                }
            }
            other => {
                return Err(JsonMappingError::NotAList {
                    found: truncate(&other.to_string()),
                })
            }
        };

        items.into_iter().map(Self::value_to_object).collect()
    }
}

impl JsonMapper for DefaultJsonMapper {
    fn to_object<T: DeserializeOwned>(&self, json: &str) -> Result<T, JsonMappingError> {
        Self::value_to_object(Self::parse(json)?)
    }

    fn to_list<T: DeserializeOwned>(&self, json: &str) -> Result<Vec<T>, JsonMappingError> {
        Self::value_to_list(Self::parse(json)?)
    }

    fn to_json<T: Serialize>(
        &self,
        value: &T,
        ignore_nulls: bool,
    ) -> Result<String, JsonMappingError> {
        let mut value = serde_json::to_value(value).map_err(JsonMappingError::Serialize)?;
        if ignore_nulls {
            strip_nulls(&mut value);
        }
        serde_json::to_string(&value).map_err(JsonMappingError::Serialize)
    }
}

/// Removes `null` members from objects, recursively.
///
/// `null` entries inside arrays are kept so positions stay stable.
pub fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}

fn truncate(s: &str) -> String {
    const MAX: usize = 120;
    if s.len() <= MAX {
        return s.to_string();
    }
    let mut end = MAX;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}
