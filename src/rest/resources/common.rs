//! Types shared by several endpoint groups.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::json::serde_helpers::{epoch_millis, epoch_millis_option};
use crate::urn::Urn;

/// Who can see a post or share.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    /// Anyone on LinkedIn.
    #[default]
    Public,
    /// First-degree connections only.
    Connections,
    /// Signed-in members.
    LoggedIn,
    /// Members of a container, such as a group.
    Container,
    /// A value this crate does not know yet.
    #[serde(other)]
    Unknown,
}

/// Publication state of a post.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleState {
    /// Visible to its audience.
    #[default]
    Published,
    /// Saved but not published.
    Draft,
    /// Submitted for publishing.
    PublishRequested,
    /// Publishing failed.
    PublishFailed,
    /// Being processed.
    Processing,
    /// Processing failed.
    ProcessingFailed,
    /// A value this crate does not know yet.
    #[serde(other)]
    Unknown,
}

/// When and by whom something happened.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuditStamp {
    /// The moment of the event.
    #[serde(with = "epoch_millis")]
    pub time: DateTime<Utc>,
    /// The member or organization responsible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<Urn>,
}

/// A half-open time range, `[start, end)`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeRange {
    /// Inclusive start.
    #[serde(with = "epoch_millis")]
    pub start: DateTime<Utc>,
    /// Exclusive end; open-ended when absent.
    #[serde(default, with = "epoch_millis_option", skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
}

/// Bucket size for time-bound statistics.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeGranularity {
    /// One bucket per day.
    Day,
    /// One bucket per month.
    Month,
    /// A value this crate does not know yet.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for TimeGranularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "DAY"),
            Self::Month => write!(f, "MONTH"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// A statistics window, sent as the Rest.li object
/// `(timeRange:(start:S,end:E),timeGranularityType:G)`.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use linkedin_api::rest::resources::{TimeGranularity, TimeIntervals};
///
/// let intervals = TimeIntervals::new(
///     Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
///     Some(Utc.timestamp_millis_opt(1_700_086_400_000).unwrap()),
///     TimeGranularity::Day,
/// );
/// assert_eq!(
///     intervals.to_restli(),
///     "(timeRange:(start:1700000000000,end:1700086400000),timeGranularityType:DAY)"
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeIntervals {
    /// Window start.
    pub start: DateTime<Utc>,
    /// Window end; LinkedIn uses "now" when absent.
    pub end: Option<DateTime<Utc>>,
    /// Bucket size.
    pub granularity: TimeGranularity,
}

impl TimeIntervals {
    /// Creates a window.
    #[must_use]
    pub const fn new(
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
        granularity: TimeGranularity,
    ) -> Self {
        Self {
            start,
            end,
            granularity,
        }
    }

    /// Renders the Rest.li wire value.
    #[must_use]
    pub fn to_restli(&self) -> String {
        let range = match self.end {
            Some(end) => format!(
                "(start:{},end:{})",
                self.start.timestamp_millis(),
                end.timestamp_millis()
            ),
            None => format!("(start:{})", self.start.timestamp_millis()),
        };
        format!(
            "(timeRange:{range},timeGranularityType:{})",
            self.granularity
        )
    }
}

/// A language and country pair.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Locale {
    /// ISO 3166 country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// ISO 639 language code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// A string localized into several locales.
///
/// Keys of `localized` are `<language>_<COUNTRY>`, e.g. `en_US`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MultiLocaleString {
    /// Text per locale key.
    #[serde(default)]
    pub localized: HashMap<String, String>,
    /// The locale to show by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_locale: Option<Locale>,
}

impl MultiLocaleString {
    /// Returns the text in the preferred locale, or any text if the
    /// preferred one is missing.
    #[must_use]
    pub fn preferred(&self) -> Option<&str> {
        self.preferred_locale
            .as_ref()
            .and_then(|locale| {
                let key = format!(
                    "{}_{}",
                    locale.language.as_deref().unwrap_or_default(),
                    locale.country.as_deref().unwrap_or_default()
                );
                self.localized.get(&key)
            })
            .or_else(|| self.localized.values().next())
            .map(String::as_str)
    }
}
