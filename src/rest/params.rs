//! Query parameters for LinkedIn requests.
//!
//! LinkedIn's Rest.li protocol gives some query values structure:
//! `ids=List(urn%3Ali%3Ashare%3A1,urn%3Ali%3Ashare%3A2)` or
//! `timeIntervals=(timeRange:(start:1,end:2),timeGranularityType:DAY)`.
//! The delimiters of those structures must reach LinkedIn unencoded while
//! the values inside them are percent-encoded, so [`Parameter`] tracks
//! whether its value is already in wire form.

use std::fmt::Display;
use std::ops::Deref;

use crate::clients::HttpRequestBuilder;
use crate::urn::Urn;

/// A single query parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    value: String,
    raw: bool,
}

impl Parameter {
    /// A plain parameter; the value is percent-encoded on the wire.
    ///
    /// ```rust
    /// use linkedin_api::rest::Parameter;
    ///
    /// let count = Parameter::with("count", 50);
    /// assert_eq!(count.to_query_pair(), "count=50");
    /// ```
    #[must_use]
    pub fn with(name: impl Into<String>, value: impl Display) -> Self {
        Self {
            name: name.into(),
            value: value.to_string(),
            raw: false,
        }
    }

    /// A URN-valued parameter.
    #[must_use]
    pub fn urn(name: impl Into<String>, urn: &Urn) -> Self {
        Self::with(name, urn)
    }

    /// A Rest.li list: `name=List(v1,v2,...)` with each value encoded.
    ///
    /// ```rust
    /// use linkedin_api::rest::Parameter;
    /// use linkedin_api::Urn;
    ///
    /// let ids = Parameter::list("ids", [Urn::share("1"), Urn::share("2")]);
    /// assert_eq!(ids.to_query_pair(), "ids=List(urn%3Ali%3Ashare%3A1,urn%3Ali%3Ashare%3A2)");
    /// ```
    #[must_use]
    pub fn list<I>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        Self::raw(name, restli_list(values))
    }

    /// A parameter whose value is already in wire form.
    ///
    /// Use for Rest.li object syntax; the caller encodes nested values.
    #[must_use]
    pub fn raw(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            raw: true,
        }
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unencoded (or raw wire) value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns `true` if the value is sent verbatim.
    #[must_use]
    pub const fn is_raw(&self) -> bool {
        self.raw
    }

    /// Renders `name=value` as it appears on the wire.
    #[must_use]
    pub fn to_query_pair(&self) -> String {
        if self.raw {
            format!("{}={}", self.name, self.value)
        } else {
            format!("{}={}", self.name, urlencoding::encode(&self.value))
        }
    }

    pub(crate) fn apply(&self, builder: HttpRequestBuilder) -> HttpRequestBuilder {
        if self.raw {
            builder.raw_query_param(&self.name, &self.value)
        } else {
            builder.query_param(&self.name, &self.value)
        }
    }
}

/// Renders values as a Rest.li `List(...)`, encoding each one.
#[must_use]
pub fn restli_list<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let items: Vec<String> = values
        .into_iter()
        .map(|v| urlencoding::encode(&v.to_string()).into_owned())
        .collect();
    format!("List({})", items.join(","))
}

/// An ordered collection of [`Parameter`]s.
///
/// # Example
///
/// ```rust
/// use linkedin_api::rest::Parameters;
/// use linkedin_api::Urn;
///
/// let params = Parameters::new()
///     .with("q", "author")
///     .urn("author", &Urn::organization("5515715"))
///     .with("count", 10);
/// assert_eq!(params.len(), 3);
/// assert_eq!(params.to_query_string(), "q=author&author=urn%3Ali%3Aorganization%3A5515715&count=10");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Parameters {
    params: Vec<Parameter>,
}

impl Parameters {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter.
    #[must_use]
    pub fn push(mut self, parameter: Parameter) -> Self {
        self.params.push(parameter);
        self
    }

    /// Appends a plain parameter.
    #[must_use]
    pub fn with(self, name: impl Into<String>, value: impl Display) -> Self {
        self.push(Parameter::with(name, value))
    }

    /// Appends a plain parameter when `value` is `Some`.
    #[must_use]
    pub fn with_opt(self, name: impl Into<String>, value: Option<impl Display>) -> Self {
        match value {
            Some(value) => self.with(name, value),
            None => self,
        }
    }

    /// Appends a URN parameter.
    #[must_use]
    pub fn urn(self, name: impl Into<String>, urn: &Urn) -> Self {
        self.push(Parameter::urn(name, urn))
    }

    /// Appends a Rest.li list parameter.
    #[must_use]
    pub fn list<I>(self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.push(Parameter::list(name, values))
    }

    /// Appends a raw parameter.
    #[must_use]
    pub fn raw(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(Parameter::raw(name, value))
    }

    /// Appends every parameter from `extra`.
    #[must_use]
    pub fn extend(mut self, extra: &[Parameter]) -> Self {
        self.params.extend_from_slice(extra);
        self
    }

    /// Renders the wire query string without the leading `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(Parameter::to_query_pair)
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl Deref for Parameters {
    type Target = [Parameter];

    fn deref(&self) -> &Self::Target {
        &self.params
    }
}

impl FromIterator<Parameter> for Parameters {
    fn from_iter<T: IntoIterator<Item = Parameter>>(iter: T) -> Self {
        Self {
            params: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Parameter>> for Parameters {
    fn from(params: Vec<Parameter>) -> Self {
        Self { params }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpMethod, HttpRequest};

    #[test]
    fn test_plain_value_is_encoded() {
        let p = Parameter::with("keywords", "rust & sdk");
        assert_eq!(p.to_query_pair(), "keywords=rust%20%26%20sdk");
        assert_eq!(p.value(), "rust & sdk");
        assert!(!p.is_raw());
    }

    #[test]
    fn test_list_encodes_items_but_not_delimiters() {
        let p = Parameter::list("ids", ["urn:li:organization:1", "a,b"]);
        assert_eq!(
            p.to_query_pair(),
            "ids=List(urn%3Ali%3Aorganization%3A1,a%2Cb)"
        );
        assert!(p.is_raw());
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(restli_list(Vec::<String>::new()), "List()");
    }

    #[test]
    fn test_raw_value_untouched() {
        let p = Parameter::raw(
            "timeIntervals",
            "(timeRange:(start:1,end:2),timeGranularityType:DAY)",
        );
        assert_eq!(
            p.to_query_pair(),
            "timeIntervals=(timeRange:(start:1,end:2),timeGranularityType:DAY)"
        );
    }

    #[test]
    fn test_parameters_preserve_order_and_skip_none() {
        let params = Parameters::new()
            .with("q", "owners")
            .with_opt("start", None::<u32>)
            .with_opt("count", Some(20))
            .extend(&[Parameter::with("sortBy", "LAST_MODIFIED")]);

        assert_eq!(
            params.to_query_string(),
            "q=owners&count=20&sortBy=LAST_MODIFIED"
        );
        assert_eq!(params[0].name(), "q");
    }

    #[test]
    fn test_apply_matches_request_query_string() {
        let params = Parameters::new()
            .urn("author", &Urn::person("abc"))
            .list("ids", [1, 2]);
        let builder = params
            .iter()
            .fold(HttpRequest::builder(HttpMethod::Get, "rest/posts"), |b, p| {
                p.apply(b)
            });
        let request = builder.build().unwrap();
        assert_eq!(request.query_string(), params.to_query_string());
    }
}
