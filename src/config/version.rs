//! LinkedIn API version definitions.
//!
//! LinkedIn's versioned marketing APIs are selected per request through the
//! `Linkedin-Version` header, whose value is a `YYYYMM` month string.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A LinkedIn API version (`YYYYMM`).
///
/// LinkedIn releases a version every month and supports each one for at
/// least a year. Versions order chronologically.
///
/// # Example
///
/// ```rust
/// use linkedin_api::ApiVersion;
///
/// let version: ApiVersion = "202401".parse().unwrap();
/// assert_eq!(version.to_string(), "202401");
/// assert!(version < ApiVersion::latest());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApiVersion {
    year: u16,
    month: u8,
}

impl ApiVersion {
    /// Number of months LinkedIn keeps a version available after release.
    pub const SUPPORT_WINDOW_MONTHS: u32 = 12;

    /// Creates a version from its year and month.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if the month is outside
    /// `1..=12` or the year is not a four digit year.
    pub fn new(year: u16, month: u8) -> Result<Self, ConfigError> {
        if !(1..=12).contains(&month) || !(1000..=9999).contains(&year) {
            return Err(ConfigError::InvalidApiVersion {
                version: format!("{year}{month:02}"),
            });
        }
        Ok(Self { year, month })
    }

    /// Returns the latest version known to this SDK.
    #[must_use]
    pub const fn latest() -> Self {
        Self {
            year: 2025,
            month: 10,
        }
    }

    /// Parses a `YYYYMM` string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if `value` is not six
    /// digits with a month in `01..=12`.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        value.parse()
    }

    /// Returns `true` if `value` is a well-formed `YYYYMM` version string.
    ///
    /// ```rust
    /// use linkedin_api::ApiVersion;
    ///
    /// assert!(ApiVersion::is_valid("202406"));
    /// assert!(!ApiVersion::is_valid("202413"));
    /// assert!(!ApiVersion::is_valid("2024-06"));
    /// ```
    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_ok()
    }

    /// Returns the oldest version still inside LinkedIn's support window,
    /// measured from [`latest()`](Self::latest).
    #[must_use]
    pub const fn minimum_supported() -> Self {
        Self::latest().minus_months(Self::SUPPORT_WINDOW_MONTHS - 1)
    }

    /// Returns `true` if this version is within LinkedIn's support window.
    ///
    /// Versions newer than [`latest()`](Self::latest) are assumed to be
    /// supported.
    ///
    /// # Example
    ///
    /// ```rust
    /// use linkedin_api::ApiVersion;
    ///
    /// assert!(ApiVersion::latest().is_supported());
    /// assert!(!"202201".parse::<ApiVersion>().unwrap().is_supported());
    /// ```
    #[must_use]
    pub fn is_supported(&self) -> bool {
        *self >= Self::minimum_supported()
    }

    /// Returns `true` if this version is past the support window.
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        !self.is_supported()
    }

    /// Returns the release year.
    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the release month (1-12).
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    const fn ordinal(&self) -> u32 {
        self.year as u32 * 12 + (self.month as u32 - 1)
    }

    #[allow(clippy::cast_possible_truncation)]
    const fn minus_months(self, months: u32) -> Self {
        let ordinal = self.ordinal() - months;
        Self {
            year: (ordinal / 12) as u16,
            month: (ordinal % 12) as u8 + 1,
        }
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}", self.year, self.month)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ConfigError::InvalidApiVersion {
            version: s.to_string(),
        };

        if s.len() != 6 || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let year: u16 = s[..4].parse().map_err(|_| invalid())?;
        let month: u8 = s[4..].parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}
