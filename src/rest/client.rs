//! The LinkedIn API client.
//!
//! [`LinkedInClient`] wraps a transport ([`WebRequestor`]), a JSON mapper
//! ([`JsonMapper`]) and an error mapper ([`ErrorMapper`]) and exposes one
//! method per Rest.li request shape. Endpoint groups in
//! [`resources`](crate::rest::resources) are thin layers over these methods.
//!
//! # Example
//!
//! ```rust,ignore
//! use linkedin_api::{LinkedInClient, LinkedInConfig, AccessToken};
//! use linkedin_api::rest::Parameter;
//! use serde_json::Value;
//!
//! let config = LinkedInConfig::builder()
//!     .access_token(AccessToken::new("AQV...")?)
//!     .build()?;
//! let client = LinkedInClient::new(&config)?;
//!
//! let org: Value = client.fetch_object("rest/organizations/2414183", &[]).await?;
//! let posts = client
//!     .fetch_connection::<Value>("rest/posts", &[
//!         Parameter::with("q", "author"),
//!         Parameter::with("author", "urn:li:organization:2414183"),
//!     ])
//!     .await?;
//! ```

use std::collections::HashMap;
use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use crate::auth::oauth::{authorization_url, AuthorizationRequest, OAuthError, Pkce, StateParam};
use crate::auth::AuthScopes;
use crate::clients::{
    BinaryAttachment, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, WebRequestor,
};
use crate::config::LinkedInConfig;
use crate::connection::{Connection, ConnectionIterator};
use crate::error::ConfigError;
use crate::json::{DefaultJsonMapper, JsonMapper, JsonMappingError};
use crate::rest::error_mapper::{DefaultErrorMapper, ErrorMapper};
use crate::rest::errors::LinkedInError;
use crate::rest::params::{restli_list, Parameter};

/// Header selecting the Rest.li method for overloaded POST and DELETE.
pub const RESTLI_METHOD_HEADER: &str = "X-RestLi-Method";

/// The id and optional body of a newly created entity.
#[derive(Clone, Debug, PartialEq)]
pub struct Created<T> {
    /// The new entity's id, usually a URN.
    pub id: String,
    /// The created entity, when LinkedIn returned it.
    pub entity: Option<T>,
    /// The `Location` header, if present.
    pub location: Option<String>,
}

/// The result of a Rest.li `BATCH_GET`.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchResult<T> {
    /// Entities keyed by the requested id.
    pub results: HashMap<String, T>,
    /// Per-id HTTP statuses.
    pub statuses: HashMap<String, u16>,
    /// Per-id error bodies.
    pub errors: HashMap<String, Value>,
}

impl<T> BatchResult<T> {
    /// Returns the entity for `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.results.get(id)
    }

    /// Returns `true` if any id failed.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl<T> Default for BatchResult<T> {
    fn default() -> Self {
        Self {
            results: HashMap::new(),
            statuses: HashMap::new(),
            errors: HashMap::new(),
        }
    }
}

/// The outcome of an upload to an upload URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadResponse {
    /// HTTP status of the upload.
    pub status: u16,
    /// The part's `ETag`, required to finalize multipart video uploads.
    pub etag: Option<String>,
    /// The response body, usually empty.
    pub body: String,
}

/// Client for the LinkedIn REST API.
///
/// The type parameters select the transport, the JSON mapper and the error
/// mapper; the defaults talk to LinkedIn over HTTPS.
///
/// # Thread Safety
///
/// `LinkedInClient` is `Send + Sync` when its parts are, so it can be shared
/// across tasks behind an `Arc`.
#[derive(Clone, Debug)]
pub struct LinkedInClient<
    R = HttpClient,
    M = DefaultJsonMapper,
    E = DefaultErrorMapper,
> {
    config: LinkedInConfig,
    requestor: R,
    mapper: M,
    error_mapper: E,
    tries: u32,
}

// Verify LinkedInClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LinkedInClient>();
};

impl LinkedInClient {
    /// Creates a client using the HTTPS transport.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the HTTP client cannot be built.
    pub fn new(config: &LinkedInConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_requestor(config, HttpClient::new(config)?))
    }
}

impl<R: WebRequestor> LinkedInClient<R> {
    /// Creates a client over a custom transport.
    #[must_use]
    pub fn with_requestor(config: &LinkedInConfig, requestor: R) -> Self {
        Self {
            config: config.clone(),
            requestor,
            mapper: DefaultJsonMapper,
            error_mapper: DefaultErrorMapper,
            tries: 1,
        }
    }
}

impl<R: WebRequestor, M: JsonMapper, E: ErrorMapper> LinkedInClient<R, M, E> {
    /// Replaces the JSON mapper.
    #[must_use]
    pub fn with_json_mapper<M2: JsonMapper>(self, mapper: M2) -> LinkedInClient<R, M2, E> {
        LinkedInClient {
            config: self.config,
            requestor: self.requestor,
            mapper,
            error_mapper: self.error_mapper,
            tries: self.tries,
        }
    }

    /// Replaces the error mapper.
    #[must_use]
    pub fn with_error_mapper<E2: ErrorMapper>(self, error_mapper: E2) -> LinkedInClient<R, M, E2> {
        LinkedInClient {
            config: self.config,
            requestor: self.requestor,
            mapper: self.mapper,
            error_mapper,
            tries: self.tries,
        }
    }

    /// Sets how many times each request is attempted.
    ///
    /// The default of 1 disables retries. Higher values retry 429 and 5xx
    /// responses.
    #[must_use]
    pub fn with_retries(mut self, tries: u32) -> Self {
        self.tries = tries.max(1);
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &LinkedInConfig {
        &self.config
    }

    /// Returns the transport.
    #[must_use]
    pub const fn requestor(&self) -> &R {
        &self.requestor
    }

    /// Returns the JSON mapper.
    #[must_use]
    pub const fn json_mapper(&self) -> &M {
        &self.mapper
    }

    /// Returns the number of attempts per request.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Fetches a single entity.
    ///
    /// # Errors
    ///
    /// Returns [`LinkedInError`] for error statuses, transport failures, or
    /// bodies that do not map to `T`.
    pub async fn fetch_object<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[Parameter],
    ) -> Result<T, LinkedInError> {
        let request = self.request(HttpMethod::Get, path, params).build()?;
        let response = self.send(request).await?;
        Ok(self.mapper.to_object(&response.body)?)
    }

    /// Fetches the first page of a collection.
    ///
    /// # Errors
    ///
    /// See [`fetch_object`](Self::fetch_object).
    pub async fn fetch_connection<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[Parameter],
    ) -> Result<Connection<T>, LinkedInError> {
        let request = self.request(HttpMethod::Get, path, params).build()?;
        self.connection_from(request).await
    }

    /// Fetches a page by absolute URL, as returned by
    /// [`Connection::next_page_url`] or [`Connection::previous_page_url`].
    ///
    /// # Errors
    ///
    /// See [`fetch_object`](Self::fetch_object).
    pub async fn fetch_connection_page<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<Connection<T>, LinkedInError> {
        let request = self.request(HttpMethod::Get, url, &[]).build()?;
        self.connection_from(request).await
    }

    /// Fetches the first page of a collection and returns a forward
    /// iterator over all pages.
    ///
    /// # Errors
    ///
    /// See [`fetch_object`](Self::fetch_object).
    pub async fn fetch_connection_iter<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[Parameter],
    ) -> Result<ConnectionIterator<'_, T, R, M, E>, LinkedInError> {
        let first = self.fetch_connection(path, params).await?;
        Ok(ConnectionIterator::new(self, first))
    }

    /// Fetches several entities in one Rest.li `BATCH_GET`.
    ///
    /// Sends `ids=List(...)`, encoding each id.
    ///
    /// # Errors
    ///
    /// See [`fetch_object`](Self::fetch_object).
    pub async fn batch_get<T, I>(
        &self,
        path: &str,
        ids: I,
        params: &[Parameter],
    ) -> Result<BatchResult<T>, LinkedInError>
    where
        T: DeserializeOwned,
        I: IntoIterator,
        I::Item: Display,
    {
        let request = self
            .request(HttpMethod::Get, path, params)
            .raw_query_param("ids", restli_list(ids))
            .build()?;
        let response = self.send(request).await?;
        self.batch_result(&response.body)
    }

    // ------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------

    /// Creates an entity.
    ///
    /// The new id comes from the `x-restli-id` header (or the body's `id`).
    ///
    /// # Errors
    ///
    /// Returns [`LinkedInError::MissingHeader`] if LinkedIn reported no id,
    /// plus the errors of [`fetch_object`](Self::fetch_object).
    pub async fn publish<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        params: &[Parameter],
    ) -> Result<Created<T>, LinkedInError> {
        let request = self
            .request(HttpMethod::Post, path, params)
            .json(self.body_value(body)?)
            .build()?;
        let response = self.send(request).await?;

        let entity = if response.body.trim().is_empty() {
            None
        } else {
            Some(self.mapper.to_object::<T>(&response.body)?)
        };

        let id = response
            .created_entity_id()
            .map(ToString::to_string)
            .or_else(|| match response.json().get("id") {
                Some(Value::String(s)) => Some(s.clone()),
                Some(Value::Number(n)) => Some(n.to_string()),
                _ => None,
            })
            .ok_or(LinkedInError::MissingHeader {
                header: "x-restli-id",
            })?;

        Ok(Created {
            id,
            entity,
            location: response.location().map(ToString::to_string),
        })
    }

    /// Applies a Rest.li partial update, setting the given fields.
    ///
    /// Sends `{"patch": {"$set": <patch>}}` with
    /// `X-RestLi-Method: PARTIAL_UPDATE`.
    ///
    /// # Errors
    ///
    /// See [`fetch_object`](Self::fetch_object).
    pub async fn partial_update<B: Serialize>(
        &self,
        path: &str,
        patch: &B,
        params: &[Parameter],
    ) -> Result<(), LinkedInError> {
        let body = json!({ "patch": { "$set": self.body_value(patch)? } });
        let request = self
            .request(HttpMethod::Post, path, params)
            .header(RESTLI_METHOD_HEADER, "PARTIAL_UPDATE")
            .json(body)
            .build()?;
        self.send(request).await?;
        Ok(())
    }

    /// Invokes a Rest.li action (`POST path?action=<name>`).
    ///
    /// Action results wrapped as `{"value": ...}` are unwrapped. Use `()` or
    /// `Option<T>` for actions that return no body.
    ///
    /// # Errors
    ///
    /// See [`fetch_object`](Self::fetch_object).
    pub async fn action<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        action: &str,
        body: &B,
    ) -> Result<T, LinkedInError> {
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .query_param("action", action)
            .json(self.body_value(body)?)
            .tries(self.tries)
            .build()?;
        let response = self.send(request).await?;

        let root = response.json();
        match root {
            Value::Object(mut map) if map.len() == 1 && map.contains_key("value") => {
                let inner = map.remove("value").unwrap_or(Value::Null);
                Ok(self.mapper.to_object(&inner.to_string())?)
            }
            _ => Ok(self.mapper.to_object(&response.body)?),
        }
    }

    /// Deletes an entity.
    ///
    /// # Errors
    ///
    /// See [`fetch_object`](Self::fetch_object).
    pub async fn delete(&self, path: &str, params: &[Parameter]) -> Result<(), LinkedInError> {
        let request = self
            .request(HttpMethod::Delete, path, params)
            .header(RESTLI_METHOD_HEADER, "DELETE")
            .build()?;
        self.send(request).await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Uploads
    // ------------------------------------------------------------------

    /// Uploads raw bytes to an upload URL with `PUT`.
    ///
    /// # Errors
    ///
    /// See [`fetch_object`](Self::fetch_object).
    pub async fn upload(
        &self,
        url: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<UploadResponse, LinkedInError> {
        let request = HttpRequest::builder(HttpMethod::Put, url)
            .binary(data, content_type)
            .tries(self.tries)
            .build()?;
        let response = self.send(request).await?;
        Ok(Self::upload_response(response))
    }

    /// Uploads files to an upload URL as `multipart/form-data`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkedInError::InvalidRequest`] if `attachments` is empty,
    /// plus the errors of [`fetch_object`](Self::fetch_object).
    pub async fn upload_multipart(
        &self,
        url: &str,
        attachments: Vec<BinaryAttachment>,
    ) -> Result<UploadResponse, LinkedInError> {
        let request = HttpRequest::builder(HttpMethod::Post, url)
            .multipart(Vec::new(), attachments)
            .tries(self.tries)
            .build()?;
        let response = self.send(request).await?;
        Ok(Self::upload_response(response))
    }

    // ------------------------------------------------------------------
    // OAuth
    // ------------------------------------------------------------------

    /// Builds the member authorization URL for this client's configuration.
    ///
    /// # Errors
    ///
    /// See [`authorization_url`].
    pub fn login_dialog_url(
        &self,
        scopes: Option<&AuthScopes>,
        state: StateParam,
        pkce: Option<&Pkce>,
    ) -> Result<AuthorizationRequest, OAuthError> {
        authorization_url(&self.config, scopes, state, pkce)
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn request(&self, method: HttpMethod, path: &str, params: &[Parameter]) -> HttpRequestBuilder {
        params.iter().fold(
            HttpRequest::builder(method, path).tries(self.tries),
            |builder, param| param.apply(builder),
        )
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, LinkedInError> {
        let method = request.http_method;
        let response = match self.requestor.execute(request).await {
            Ok(response) => response,
            Err(HttpError::MaxRetries(e)) => {
                tracing::warn!(
                    "LinkedIn API {} {} still failing after {} tries",
                    method,
                    e.response.url,
                    e.tries
                );
                e.response
            }
            Err(e) => return Err(e.into()),
        };
        if response.is_ok() {
            return Ok(response);
        }

        tracing::debug!(
            "LinkedIn API {} {} failed with status {}",
            method,
            response.url,
            response.code
        );
        Err(self.error_mapper.map_error(&response))
    }

    async fn connection_from<T: DeserializeOwned>(
        &self,
        request: HttpRequest,
    ) -> Result<Connection<T>, LinkedInError> {
        let response = self.send(request).await?;
        Ok(Connection::from_response(
            &response,
            self.requestor.base_url(),
            &self.mapper,
        )?)
    }

    fn body_value<B: Serialize>(&self, body: &B) -> Result<Value, LinkedInError> {
        let text = self.mapper.to_json(body, true)?;
        Ok(serde_json::from_str(&text).map_err(JsonMappingError::Malformed)?)
    }

    fn batch_result<T: DeserializeOwned>(&self, body: &str) -> Result<BatchResult<T>, LinkedInError> {
        let root: Value = self.mapper.to_object(body)?;
        let mut result = BatchResult::default();

        if let Some(Value::Object(results)) = root.get("results") {
            for (id, value) in results {
                let entity = self.mapper.to_object::<T>(&value.to_string())?;
                result.results.insert(id.clone(), entity);
            }
        }
        if let Some(Value::Object(statuses)) = root.get("statuses") {
            for (id, status) in statuses {
                if let Some(code) = status.as_u64().and_then(|c| u16::try_from(c).ok()) {
                    result.statuses.insert(id.clone(), code);
                }
            }
        }
        if let Some(Value::Object(errors)) = root.get("errors") {
            for (id, error) in errors {
                result.errors.insert(id.clone(), error.clone());
            }
        }

        Ok(result)
    }

    fn upload_response(response: HttpResponse) -> UploadResponse {
        UploadResponse {
            status: response.code,
            etag: response.etag().map(ToString::to_string),
            body: response.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpError, RequestBody};
    use crate::config::AccessToken;
    use std::sync::Mutex;

    /// Records requests and replays canned responses in order.
    struct Recorder {
        responses: Mutex<Vec<HttpResponse>>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl Recorder {
        fn new(responses: Vec<HttpResponse>) -> Self {
            Self {
                responses: Mutex::new(responses.into_iter().rev().collect()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl WebRequestor for Recorder {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
            self.requests.lock().unwrap().push(request);
            Ok(self.responses.lock().unwrap().pop().unwrap())
        }

        fn base_url(&self) -> &str {
            "https://api.linkedin.com"
        }
    }

    fn response(code: u16, headers: &[(&str, &str)], body: &str) -> HttpResponse {
        let headers = headers
            .iter()
            .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
            .collect();
        HttpResponse::new(code, headers, body, "https://api.linkedin.com/rest/x")
    }

    fn client(responses: Vec<HttpResponse>) -> LinkedInClient<Recorder> {
        let config = LinkedInConfig::builder()
            .access_token(AccessToken::new("token").unwrap())
            .build()
            .unwrap();
        LinkedInClient::with_requestor(&config, Recorder::new(responses))
    }

    #[test]
    fn test_fetch_object_applies_params() {
        let client = client(vec![response(200, &[], r#"{"id": 7, "name": "Acme"}"#)]);
        let value: Value = tokio_test::block_on(client.fetch_object(
            "rest/organizations/7",
            &[Parameter::with("projection", "(id,name)")],
        ))
        .unwrap();

        assert_eq!(value["name"], "Acme");
        let sent = &client.requestor().requests()[0];
        assert_eq!(sent.http_method, HttpMethod::Get);
        assert_eq!(sent.query_string(), "projection=%28id%2Cname%29");
    }

    #[test]
    fn test_error_status_goes_through_error_mapper() {
        let client = client(vec![response(
            404,
            &[],
            r#"{"status":404,"message":"Not found"}"#,
        )]);
        let result: Result<Value, _> =
            tokio_test::block_on(client.fetch_object("rest/posts/1", &[]));
        assert!(matches!(result, Err(LinkedInError::NotFound(_))));
    }

    #[test]
    fn test_publish_reads_id_from_header() {
        let client = client(vec![response(
            201,
            &[("x-restli-id", "urn:li:share:123")],
            "",
        )]);
        let created: Created<Value> = tokio_test::block_on(client.publish(
            "rest/posts",
            &json!({"commentary": "hi", "content": null}),
            &[],
        ))
        .unwrap();

        assert_eq!(created.id, "urn:li:share:123");
        assert!(created.entity.is_none());
        match &client.requestor().requests()[0].body {
            Some(RequestBody::Json(body)) => assert_eq!(body, &json!({"commentary": "hi"})),
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn test_publish_without_id_is_missing_header() {
        let client = client(vec![response(201, &[], "")]);
        let result: Result<Created<Value>, _> =
            tokio_test::block_on(client.publish("rest/posts", &json!({}), &[]));
        assert!(matches!(
            result,
            Err(LinkedInError::MissingHeader {
                header: "x-restli-id"
            })
        ));
    }

    #[test]
    fn test_partial_update_wraps_patch() {
        let client = client(vec![response(204, &[], "")]);
        tokio_test::block_on(client.partial_update(
            "rest/posts/urn%3Ali%3Ashare%3A1",
            &json!({"commentary": "edited"}),
            &[],
        ))
        .unwrap();

        let sent = &client.requestor().requests()[0];
        assert_eq!(
            sent.extra_headers.as_ref().unwrap()[RESTLI_METHOD_HEADER],
            "PARTIAL_UPDATE"
        );
        assert_eq!(
            sent.body,
            Some(RequestBody::Json(
                json!({"patch": {"$set": {"commentary": "edited"}}})
            ))
        );
    }

    #[test]
    fn test_action_unwraps_value() {
        let client = client(vec![response(
            200,
            &[],
            r#"{"value": {"uploadUrl": "https://upload", "image": "urn:li:image:1"}}"#,
        )]);
        let value: Value = tokio_test::block_on(client.action(
            "rest/images",
            "initializeUpload",
            &json!({"initializeUploadRequest": {"owner": "urn:li:person:1"}}),
        ))
        .unwrap();

        assert_eq!(value["image"], "urn:li:image:1");
        assert_eq!(
            client.requestor().requests()[0].query_string(),
            "action=initializeUpload"
        );
    }

    #[test]
    fn test_action_with_empty_body() {
        let client = client(vec![response(200, &[], "")]);
        tokio_test::block_on(client.action::<_, ()>(
            "rest/videos",
            "finalizeUpload",
            &json!({}),
        ))
        .unwrap();
    }

    #[test]
    fn test_batch_get() {
        let client = client(vec![response(
            200,
            &[],
            r#"{
                "results": {"urn:li:image:1": {"id": "urn:li:image:1"}},
                "statuses": {"urn:li:image:1": 200, "urn:li:image:2": 404},
                "errors": {"urn:li:image:2": {"status": 404}}
            }"#,
        )]);
        let batch: BatchResult<Value> = tokio_test::block_on(client.batch_get(
            "rest/images",
            ["urn:li:image:1", "urn:li:image:2"],
            &[],
        ))
        .unwrap();

        assert_eq!(batch.results.len(), 1);
        assert_eq!(batch.statuses["urn:li:image:2"], 404);
        assert!(batch.has_errors());
        assert_eq!(
            client.requestor().requests()[0].query_string(),
            "ids=List(urn%3Ali%3Aimage%3A1,urn%3Ali%3Aimage%3A2)"
        );
    }

    #[test]
    fn test_delete_sends_restli_method() {
        let client = client(vec![response(204, &[], "")]);
        tokio_test::block_on(client.delete("rest/posts/1", &[])).unwrap();
        let sent = &client.requestor().requests()[0];
        assert_eq!(sent.http_method, HttpMethod::Delete);
        assert_eq!(
            sent.extra_headers.as_ref().unwrap()[RESTLI_METHOD_HEADER],
            "DELETE"
        );
    }

    #[test]
    fn test_upload_returns_etag() {
        let client = client(vec![response(200, &[("etag", "\"abc\"")], "")]);
        let upload = tokio_test::block_on(client.upload(
            "https://www.linkedin.com/dms-uploads/x",
            vec![1, 2, 3],
            "application/octet-stream",
        ))
        .unwrap();
        assert_eq!(upload.etag.as_deref(), Some("abc"));
        assert_eq!(client.requestor().requests()[0].http_method, HttpMethod::Put);
    }

    #[test]
    fn test_upload_multipart_requires_attachment() {
        let client = client(Vec::new());
        let result = tokio_test::block_on(client.upload_multipart("https://upload", Vec::new()));
        assert!(matches!(result, Err(LinkedInError::InvalidRequest(_))));
        assert!(client.requestor().requests().is_empty());
    }

    #[test]
    fn test_with_retries_sets_tries_on_requests() {
        let client = client(vec![response(200, &[], "{}")]).with_retries(3);
        let _: Value = tokio_test::block_on(client.fetch_object("rest/x", &[])).unwrap();
        assert_eq!(client.requestor().requests()[0].tries, 3);
    }
}
