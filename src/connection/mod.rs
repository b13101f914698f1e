//! Paged collection responses.
//!
//! LinkedIn returns collections ("connections") as
//!
//! ```json
//! {
//!   "elements": [ ... ],
//!   "paging": { "start": 0, "count": 10, "total": 42, "links": [ ... ] },
//!   "metadata": { ... }
//! }
//! ```
//!
//! [`Connection`] holds one page and knows how to reach its neighbours.
//! [`ConnectionIterator`] walks forward through the pages, fetching each one
//! only when asked.
//!
//! # Next and previous pages
//!
//! The next page URL comes from a `links` entry with `rel = "next"` when
//! LinkedIn provides one; relative hrefs resolve against the API base URL.
//! Otherwise it is derived from `paging` by rewriting the `start` parameter
//! of the request URL:
//!
//! - with a `total`, while `start + count < total`;
//! - without a `total`, while the page is full (`elements.len() == count`).
//!
//! The previous page comes from `rel = "prev"`, or from `start > 0`.

mod iterator;

pub use iterator::ConnectionIterator;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::clients::HttpResponse;
use crate::json::serde_helpers::empty_object_as_vec;
use crate::json::{JsonMapper, JsonMappingError};

/// A link in a paging block.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Link {
    /// Relation, e.g. `next` or `prev`.
    #[serde(default)]
    pub rel: String,
    /// Target URL, usually relative to the API host.
    #[serde(default)]
    pub href: String,
    /// Media type of the target.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
}

/// The paging block of a connection.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Paging {
    /// Offset of the first element of this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    /// Requested page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// Total number of elements, when LinkedIn reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// Navigation links.
    #[serde(default, deserialize_with = "empty_object_as_vec")]
    pub links: Vec<Link>,
}

impl Paging {
    /// Returns the href of the first link with relation `rel`.
    #[must_use]
    pub fn link(&self, rel: &str) -> Option<&str> {
        self.links
            .iter()
            .find(|l| l.rel.eq_ignore_ascii_case(rel) && !l.href.is_empty())
            .map(|l| l.href.as_str())
    }
}

/// One page of a LinkedIn collection.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection<T> {
    elements: Vec<T>,
    paging: Option<Paging>,
    metadata: Option<Value>,
    next_page_url: Option<String>,
    previous_page_url: Option<String>,
}

impl<T> Connection<T> {
    /// Builds a page from its parts, computing neighbour URLs.
    ///
    /// `request_url` is the URL that produced this page and `base_url` the
    /// API base relative links resolve against.
    #[must_use]
    pub fn new(
        elements: Vec<T>,
        paging: Option<Paging>,
        metadata: Option<Value>,
        request_url: &str,
        base_url: &str,
    ) -> Self {
        let next_page_url = paging
            .as_ref()
            .and_then(|p| next_page_url(p, elements.len(), request_url, base_url));
        let previous_page_url = paging
            .as_ref()
            .and_then(|p| previous_page_url(p, request_url, base_url));

        Self {
            elements,
            paging,
            metadata,
            next_page_url,
            previous_page_url,
        }
    }

    /// Returns the elements of this page.
    #[must_use]
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the page, returning its elements.
    #[must_use]
    pub fn into_elements(self) -> Vec<T> {
        self.elements
    }

    /// Returns the paging block, if the response had one.
    #[must_use]
    pub const fn paging(&self) -> Option<&Paging> {
        self.paging.as_ref()
    }

    /// Returns the `metadata` block, if the response had one.
    #[must_use]
    pub const fn metadata(&self) -> Option<&Value> {
        self.metadata.as_ref()
    }

    /// Returns the total element count reported by LinkedIn.
    #[must_use]
    pub fn total(&self) -> Option<u64> {
        self.paging.as_ref().and_then(|p| p.total)
    }

    /// Returns the absolute URL of the next page.
    #[must_use]
    pub fn next_page_url(&self) -> Option<&str> {
        self.next_page_url.as_deref()
    }

    /// Returns the absolute URL of the previous page.
    #[must_use]
    pub fn previous_page_url(&self) -> Option<&str> {
        self.previous_page_url.as_deref()
    }

    /// Returns `true` if there is a next page.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next_page_url.is_some()
    }

    /// Returns `true` if there is a previous page.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.previous_page_url.is_some()
    }

    /// Returns `true` if the page has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of elements on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

impl<T: DeserializeOwned> Connection<T> {
    /// Maps a collection response.
    ///
    /// A bare JSON array is accepted as a single page without paging.
    ///
    /// # Errors
    ///
    /// Returns [`JsonMappingError`] if the body is not JSON or the elements
    /// do not map to `T`.
    pub fn from_response<M: JsonMapper>(
        response: &HttpResponse,
        base_url: &str,
        mapper: &M,
    ) -> Result<Self, JsonMappingError> {
        let elements: Vec<T> = mapper.to_list(&response.body)?;

        let root: Value = if response.body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&response.body).map_err(JsonMappingError::Malformed)?
        };

        let paging = root
            .get("paging")
            .filter(|p| !p.is_null())
            .map(|p| serde_json::from_value::<Paging>(p.clone()))
            .transpose()
            .map_err(|source| JsonMappingError::Mapping {
                type_name: "Paging",
                source,
            })?;
        let metadata = root.get("metadata").filter(|m| !m.is_null()).cloned();

        Ok(Self::new(elements, paging, metadata, &response.url, base_url))
    }
}

impl<T> IntoIterator for Connection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Connection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

fn next_page_url(
    paging: &Paging,
    element_count: usize,
    request_url: &str,
    base_url: &str,
) -> Option<String> {
    if let Some(href) = paging.link("next") {
        return resolve_link(href, base_url);
    }

    let start = paging.start.unwrap_or(0);
    let count = paging.count?;
    if count == 0 {
        return None;
    }

    let next_start = start.checked_add(count)?;
    let has_more = match paging.total {
        Some(total) => next_start < total,
        None => element_count as u64 == count,
    };
    has_more.then(|| replace_query_param(request_url, "start", &next_start.to_string()))
}

fn previous_page_url(paging: &Paging, request_url: &str, base_url: &str) -> Option<String> {
    if let Some(href) = paging.link("prev") {
        return resolve_link(href, base_url);
    }

    let start = paging.start.unwrap_or(0);
    if start == 0 {
        return None;
    }
    let count = paging.count.unwrap_or(start);
    let previous = start.saturating_sub(count);
    Some(replace_query_param(request_url, "start", &previous.to_string()))
}

fn resolve_link(href: &str, base_url: &str) -> Option<String> {
    if href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_string());
    }
    let base = Url::parse(&format!("{}/", base_url.trim_end_matches('/'))).ok()?;
    base.join(href.trim_start_matches('/')).ok().map(String::from)
}

/// Sets `name=value` in a URL's query, appending it when absent.
///
/// Other parameters are kept byte for byte so Rest.li syntax survives.
pub(crate) fn replace_query_param(url: &str, name: &str, value: &str) -> String {
    let (base, query) = url.split_once('?').unwrap_or((url, ""));
    let prefix = format!("{name}=");

    let mut replaced = false;
    let mut pairs: Vec<String> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            if pair.starts_with(&prefix) || pair == name {
                replaced = true;
                format!("{name}={value}")
            } else {
                pair.to_string()
            }
        })
        .collect();
    if !replaced {
        pairs.push(format!("{name}={value}"));
    }

    format!("{base}?{}", pairs.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::DefaultJsonMapper;
    use std::collections::HashMap;

    const BASE: &str = "https://api.linkedin.com";

    fn paging(start: u64, count: u64, total: Option<u64>) -> Paging {
        Paging {
            start: Some(start),
            count: Some(count),
            total,
            links: Vec::new(),
        }
    }

    fn page(elements: usize, paging: Paging, url: &str) -> Connection<u32> {
        Connection::new(
            (0..elements as u32).collect(),
            Some(paging),
            None,
            url,
            BASE,
        )
    }

    #[test]
    fn test_next_from_total() {
        let url = "https://api.linkedin.com/rest/posts?q=author&start=0&count=10";
        let first = page(10, paging(0, 10, Some(25)), url);
        assert_eq!(
            first.next_page_url(),
            Some("https://api.linkedin.com/rest/posts?q=author&start=10&count=10")
        );
        assert!(!first.has_previous());

        let last = page(5, paging(20, 10, Some(25)), url);
        assert!(!last.has_next());
        assert_eq!(
            last.previous_page_url(),
            Some("https://api.linkedin.com/rest/posts?q=author&start=10&count=10")
        );
    }

    #[test]
    fn test_next_without_total_uses_full_page() {
        let url = "https://api.linkedin.com/v2/shares?q=owners&owners=List(urn%3Ali%3Aorganization%3A1)";
        let full = page(20, paging(0, 20, None), url);
        assert_eq!(
            full.next_page_url(),
            Some("https://api.linkedin.com/v2/shares?q=owners&owners=List(urn%3Ali%3Aorganization%3A1)&start=20")
        );

        let partial = page(7, paging(20, 20, None), url);
        assert!(!partial.has_next());
    }

    #[test]
    fn test_overflowing_start_has_no_next() {
        let url = "https://api.linkedin.com/rest/posts?q=author";
        let with_total = page(1, paging(u64::MAX, 1, Some(5)), url);
        assert!(!with_total.has_next());

        let without_total = page(1, paging(u64::MAX, 1, None), url);
        assert!(!without_total.has_next());
        assert!(without_total.has_previous());
    }

    #[test]
    fn test_zero_count_has_no_next() {
        let conn = page(0, paging(0, 0, None), "https://api.linkedin.com/rest/x");
        assert!(!conn.has_next());
    }

    #[test]
    fn test_links_take_precedence_and_resolve_relative() {
        let paging = Paging {
            start: Some(10),
            count: Some(10),
            total: Some(100),
            links: vec![
                Link {
                    rel: "prev".to_string(),
                    href: "/v2/ugcPosts?q=authors&start=0&count=10".to_string(),
                    link_type: Some("application/json".to_string()),
                },
                Link {
                    rel: "next".to_string(),
                    href: "/v2/ugcPosts?q=authors&start=20&count=10".to_string(),
                    link_type: Some("application/json".to_string()),
                },
            ],
        };
        let conn = page(10, paging, "https://api.linkedin.com/v2/ugcPosts?q=authors");
        assert_eq!(
            conn.next_page_url(),
            Some("https://api.linkedin.com/v2/ugcPosts?q=authors&start=20&count=10")
        );
        assert_eq!(
            conn.previous_page_url(),
            Some("https://api.linkedin.com/v2/ugcPosts?q=authors&start=0&count=10")
        );
    }

    #[test]
    fn test_previous_never_goes_negative() {
        let conn = page(10, paging(5, 10, Some(30)), "https://api.linkedin.com/rest/x?start=5");
        assert_eq!(
            conn.previous_page_url(),
            Some("https://api.linkedin.com/rest/x?start=0")
        );
    }

    #[test]
    fn test_no_paging_means_no_neighbours() {
        let conn: Connection<u32> = Connection::new(vec![1], None, None, "u", BASE);
        assert!(!conn.has_next());
        assert!(!conn.has_previous());
        assert_eq!(conn.total(), None);
    }

    #[test]
    fn test_replace_query_param() {
        assert_eq!(replace_query_param("https://h/p", "start", "5"), "https://h/p?start=5");
        assert_eq!(
            replace_query_param("https://h/p?a=1&start=0&b=List(x,y)", "start", "5"),
            "https://h/p?a=1&start=5&b=List(x,y)"
        );
        assert_eq!(
            replace_query_param("https://h/p?starts=1", "start", "2"),
            "https://h/p?starts=1&start=2"
        );
    }

    #[test]
    fn test_from_response_maps_elements_paging_and_metadata() {
        #[derive(Deserialize, Debug, PartialEq)]
        struct Element {
            id: String,
        }

        let body = r#"{
            "elements": [{"id": "a"}, {"id": "b"}],
            "paging": {"start": 0, "count": 2, "total": 3, "links": []},
            "metadata": {"nextCursor": "xyz"}
        }"#;
        let response = HttpResponse::new(
            200,
            HashMap::new(),
            body,
            "https://api.linkedin.com/rest/posts?q=author&count=2",
        );
        let conn: Connection<Element> =
            Connection::from_response(&response, BASE, &DefaultJsonMapper).unwrap();

        assert_eq!(conn.len(), 2);
        assert_eq!(conn.elements()[1].id, "b");
        assert_eq!(conn.total(), Some(3));
        assert_eq!(conn.metadata().unwrap()["nextCursor"], "xyz");
        assert_eq!(
            conn.next_page_url(),
            Some("https://api.linkedin.com/rest/posts?q=author&count=2&start=2")
        );
    }

    #[test]
    fn test_from_response_accepts_quirky_shapes() {
        let response = HttpResponse::new(
            200,
            HashMap::new(),
            r#"{"elements": {}, "paging": {"count": 10, "start": 0, "links": {}}}"#,
            "https://api.linkedin.com/v2/shares",
        );
        let conn: Connection<Value> =
            Connection::from_response(&response, BASE, &DefaultJsonMapper).unwrap();
        assert!(conn.is_empty());
        assert!(conn.paging().unwrap().links.is_empty());
        assert!(!conn.has_next());

        let bare = HttpResponse::new(200, HashMap::new(), "[1, 2, 3]", "u");
        let conn: Connection<u32> =
            Connection::from_response(&bare, BASE, &DefaultJsonMapper).unwrap();
        assert_eq!(conn.into_elements(), vec![1, 2, 3]);
    }
}
