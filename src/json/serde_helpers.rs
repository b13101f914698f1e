//! Field-level serde adapters for LinkedIn payload quirks.
//!
//! Use these with `#[serde(with = "...")]` or `#[serde(deserialize_with = "...")]`.

use chrono::{DateTime, TimeZone, Utc};
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

fn millis_to_datetime(millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis).single()
}

#[allow(clippy::cast_possible_truncation)]
fn datetime_from_value(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .and_then(millis_to_datetime),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().map_or_else(
                || {
                    DateTime::parse_from_rfc3339(s)
                        .ok()
                        .map(|d| d.with_timezone(&Utc))
                },
                millis_to_datetime,
            )
        }
        _ => None,
    }
}

/// Epoch-millisecond timestamps (`1695820341000`).
///
/// Also accepts the number as a string or an RFC 3339 timestamp.
pub mod epoch_millis {
    use super::{datetime_from_value, de, DateTime, Deserialize, Deserializer, Serializer, Utc, Value};

    /// Serializes as epoch milliseconds.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(value.timestamp_millis())
    }

    /// Deserializes from epoch milliseconds.
    ///
    /// # Errors
    ///
    /// Fails if the value is not a timestamp.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        datetime_from_value(&value)
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {value}")))
    }
}

/// Optional epoch-millisecond timestamps.
///
/// Unparseable values map to `None` rather than failing the whole document.
pub mod epoch_millis_option {
    use super::{datetime_from_value, DateTime, Deserialize, Deserializer, Serializer, Utc, Value};

    /// Serializes as epoch milliseconds or `null`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_some(&dt.timestamp_millis()),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes an optional timestamp.
    ///
    /// # Errors
    ///
    /// Only fails on errors from the underlying deserializer.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(|v| {
            let parsed = datetime_from_value(v);
            if parsed.is_none() && !v.is_null() {
                tracing::debug!("Ignoring unparseable timestamp value {}", v);
            }
            parsed
        }))
    }
}

/// Deserializes a list that LinkedIn may send as `{}` or `null` when empty.
///
/// # Errors
///
/// Fails if the value is a non-empty object or an element does not fit `T`.
pub fn empty_object_as_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::Object(map) if map.is_empty() => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(de::Error::custom))
            .collect(),
        other => Err(de::Error::custom(format!(
            "expected an array or empty object, found {other}"
        ))),
    }
}

/// Deserializes an optional integer sent either as a number or a string.
///
/// # Errors
///
/// Fails if a string value is not an integer.
pub fn lenient_i64_option<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("{n} is not an integer"))),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("'{s}' is not an integer"))),
        Some(other) => Err(de::Error::custom(format!("expected an integer, found {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Deserialize, Serialize)]
    struct Stamped {
        #[serde(with = "epoch_millis")]
        at: DateTime<Utc>,
        #[serde(default, with = "epoch_millis_option", skip_serializing_if = "Option::is_none")]
        maybe: Option<DateTime<Utc>>,
    }

    #[derive(Debug, Deserialize)]
    struct Listy {
        #[serde(default, deserialize_with = "empty_object_as_vec")]
        items: Vec<u32>,
        #[serde(default, deserialize_with = "lenient_i64_option")]
        count: Option<i64>,
    }

    #[test]
    fn test_epoch_millis_round_trip_shape() {
        let stamped: Stamped = serde_json::from_str(r#"{"at":1700000000000}"#).unwrap();
        assert_eq!(stamped.at.timestamp(), 1_700_000_000);
        assert!(stamped.maybe.is_none());

        let json = serde_json::to_value(&stamped).unwrap();
        assert_eq!(json, serde_json::json!({"at": 1_700_000_000_000_i64}));
    }

    #[test]
    fn test_epoch_millis_accepts_string_and_rfc3339() {
        let a: Stamped = serde_json::from_str(r#"{"at":"1700000000000"}"#).unwrap();
        let b: Stamped = serde_json::from_str(r#"{"at":"2023-11-14T22:13:20Z"}"#).unwrap();
        assert_eq!(a.at, b.at);
    }

    #[test]
    fn test_epoch_millis_option_is_lenient() {
        let stamped: Stamped =
            serde_json::from_str(r#"{"at":0,"maybe":"not a date"}"#).unwrap();
        assert!(stamped.maybe.is_none());

        let stamped: Stamped = serde_json::from_str(r#"{"at":0,"maybe":1000}"#).unwrap();
        assert_eq!(stamped.maybe.unwrap().timestamp(), 1);
    }

    #[test]
    fn test_empty_object_as_vec() {
        let l: Listy = serde_json::from_str(r#"{"items":{}}"#).unwrap();
        assert!(l.items.is_empty());
        let l: Listy = serde_json::from_str(r#"{"items":[1,2]}"#).unwrap();
        assert_eq!(l.items, vec![1, 2]);
        let l: Listy = serde_json::from_str(r#"{"items":null}"#).unwrap();
        assert!(l.items.is_empty());
        assert!(serde_json::from_str::<Listy>(r#"{"items":{"a":1}}"#).is_err());
    }

    #[test]
    fn test_lenient_i64_option() {
        let l: Listy = serde_json::from_str(r#"{"count":"42"}"#).unwrap();
        assert_eq!(l.count, Some(42));
        let l: Listy = serde_json::from_str(r#"{"count":7}"#).unwrap();
        assert_eq!(l.count, Some(7));
        let l: Listy = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(l.count, None);
        assert!(serde_json::from_str::<Listy>(r#"{"count":"x"}"#).is_err());
    }
}
