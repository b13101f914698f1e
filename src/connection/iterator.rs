//! Forward iteration over paged collections.

use serde::de::DeserializeOwned;

use crate::clients::WebRequestor;
use crate::connection::Connection;
use crate::json::JsonMapper;
use crate::rest::{ErrorMapper, LinkedInClient, LinkedInError};

/// Walks a collection page by page.
///
/// The first call to [`next`](Self::next) yields the page the iterator was
/// created with; later calls fetch the following page on demand. Iteration
/// ends when a page has no next link, or a next link points back at the page
/// just fetched.
///
/// # Example
///
/// ```rust,ignore
/// let mut pages = client
///     .fetch_connection_iter::<Post>("rest/posts", &params)
///     .await?;
/// while let Some(page) = pages.next().await {
///     for post in page? {
///         println!("{}", post.id);
///     }
/// }
/// ```
pub struct ConnectionIterator<'a, T, R, M, E> {
    client: &'a LinkedInClient<R, M, E>,
    current: Option<Connection<T>>,
    next_url: Option<String>,
    pages_fetched: usize,
}

impl<'a, T, R, M, E> ConnectionIterator<'a, T, R, M, E>
where
    T: DeserializeOwned,
    R: WebRequestor,
    M: JsonMapper,
    E: ErrorMapper,
{
    /// Starts iterating at `first`.
    #[must_use]
    pub fn new(client: &'a LinkedInClient<R, M, E>, first: Connection<T>) -> Self {
        let next_url = first.next_page_url().map(ToString::to_string);
        Self {
            client,
            current: Some(first),
            next_url,
            pages_fetched: 1,
        }
    }

    /// Returns `true` if another call to [`next`](Self::next) can yield a page.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current.is_some() || self.next_url.is_some()
    }

    /// Returns the number of pages received so far, including the first.
    #[must_use]
    pub const fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Returns the next page, or `None` once the collection is exhausted.
    ///
    /// A failed fetch ends iteration after yielding the error.
    #[allow(clippy::should_implement_trait)]
    pub async fn next(&mut self) -> Option<Result<Connection<T>, LinkedInError>> {
        if let Some(page) = self.current.take() {
            return Some(Ok(page));
        }

        let url = self.next_url.take()?;
        tracing::debug!(url = %url, page = self.pages_fetched + 1, "Fetching next connection page");

        match self.client.fetch_connection_page::<T>(&url).await {
            Ok(page) => {
                self.pages_fetched += 1;
                self.next_url = page
                    .next_page_url()
                    .filter(|next| *next != url)
                    .map(ToString::to_string);
                Some(Ok(page))
            }
            Err(error) => Some(Err(error)),
        }
    }

    /// Drains every remaining page and returns all elements in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`LinkedInError`] encountered.
    pub async fn collect_all(mut self) -> Result<Vec<T>, LinkedInError> {
        let mut all = Vec::new();
        while let Some(page) = self.next().await {
            all.extend(page?.into_elements());
        }
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpError, HttpRequest, HttpResponse};
    use crate::config::{AccessToken, LinkedInConfig};
    use serde_json::Value;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct Pages {
        bodies: Mutex<Vec<(u16, &'static str)>>,
        urls: Mutex<Vec<String>>,
    }

    impl WebRequestor for Pages {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
            let url = if request.has_query() {
                format!("{}?{}", request.path, request.query_string())
            } else {
                request.path
            };
            self.urls.lock().unwrap().push(url.clone());
            let (code, body) = self.bodies.lock().unwrap().remove(0);
            Ok(HttpResponse::new(code, HashMap::new(), body, url))
        }

        fn base_url(&self) -> &str {
            "https://api.linkedin.com"
        }
    }

    fn client(bodies: Vec<(u16, &'static str)>) -> LinkedInClient<Pages> {
        let config = LinkedInConfig::builder()
            .access_token(AccessToken::new("token").unwrap())
            .build()
            .unwrap();
        LinkedInClient::with_requestor(
            &config,
            Pages {
                bodies: Mutex::new(bodies),
                urls: Mutex::new(Vec::new()),
            },
        )
    }

    fn first_page() -> Connection<Value> {
        Connection::new(
            vec![Value::from(1), Value::from(2)],
            Some(crate::connection::Paging {
                start: Some(0),
                count: Some(2),
                total: Some(5),
                links: Vec::new(),
            }),
            None,
            "https://api.linkedin.com/rest/posts?q=author&start=0&count=2",
            "https://api.linkedin.com",
        )
    }

    #[test]
    fn test_first_page_is_yielded_without_request() {
        let client = client(Vec::new());
        let mut pages = ConnectionIterator::new(&client, first_page());

        let page = tokio_test::block_on(pages.next()).unwrap().unwrap();
        assert_eq!(page.len(), 2);
        assert!(client.requestor().urls.lock().unwrap().is_empty());
        assert!(pages.has_next());
    }

    #[test]
    fn test_collect_all_follows_paging() {
        let client = client(vec![
            (200, r#"{"elements":[3,4],"paging":{"start":2,"count":2,"total":5}}"#),
            (200, r#"{"elements":[5],"paging":{"start":4,"count":2,"total":5}}"#),
        ]);
        let pages = ConnectionIterator::new(&client, first_page());

        let all = tokio_test::block_on(pages.collect_all()).unwrap();
        assert_eq!(all, vec![1, 2, 3, 4, 5]);

        let urls = client.requestor().urls.lock().unwrap().clone();
        assert_eq!(
            urls,
            vec![
                "https://api.linkedin.com/rest/posts?q=author&start=2&count=2",
                "https://api.linkedin.com/rest/posts?q=author&start=4&count=2",
            ]
        );
    }

    #[test]
    fn test_error_is_yielded_then_iteration_stops() {
        let client = client(vec![(500, r#"{"message":"boom"}"#)]);
        let mut pages = ConnectionIterator::new(&client, first_page());

        assert!(tokio_test::block_on(pages.next()).unwrap().is_ok());
        let second = tokio_test::block_on(pages.next()).unwrap();
        assert!(matches!(second, Err(LinkedInError::InternalServer(_))));
        assert!(tokio_test::block_on(pages.next()).is_none());
        assert!(!pages.has_next());
    }

    #[test]
    fn test_self_referencing_next_link_stops() {
        let client = client(vec![(
            200,
            r#"{"elements":[3],"paging":{"start":2,"count":2,"links":[{"rel":"next","href":"/rest/posts?q=author&start=2&count=2"}]}}"#,
        )]);
        let pages = ConnectionIterator::new(&client, first_page());

        let all = tokio_test::block_on(pages.collect_all()).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(client.requestor().urls.lock().unwrap().len(), 1);
    }
}
