//! HTTP request types for the LinkedIn API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder. Requests
//! target either a path relative to the API base URL (`rest/posts`) or an
//! absolute URL (upload URLs and pagination links).

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the LinkedIn API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources, actions, and partial updates.
    Post,
    /// HTTP PUT method for binary uploads.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    pub(crate) const fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Content type for HTTP request bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// JSON content type (`application/json`).
    Json,
    /// URL-encoded form (`application/x-www-form-urlencoded`).
    Form,
    /// Raw bytes with a caller-provided content type.
    Binary,
    /// `multipart/form-data` with a generated boundary.
    Multipart,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    ///
    /// For [`DataType::Binary`] the real type comes from the body itself.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Form => "application/x-www-form-urlencoded",
            Self::Binary => "application/octet-stream",
            Self::Multipart => "multipart/form-data",
        }
    }
}

/// A file part of a multipart upload.
#[derive(Clone, PartialEq, Eq)]
pub struct BinaryAttachment {
    /// The form field name.
    pub field_name: String,
    /// The file name sent in the part's `Content-Disposition`.
    pub filename: String,
    /// The MIME type of the data.
    pub content_type: String,
    /// The file contents.
    pub data: Vec<u8>,
}

impl BinaryAttachment {
    /// Creates an attachment.
    #[must_use]
    pub fn new(
        field_name: impl Into<String>,
        filename: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            filename: filename.into(),
            content_type: content_type.into(),
            data,
        }
    }
}

impl fmt::Debug for BinaryAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryAttachment")
            .field("field_name", &self.field_name)
            .field("filename", &self.filename)
            .field("content_type", &self.content_type)
            .field("len", &self.data.len())
            .finish()
    }
}

/// The body of an HTTP request.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// A JSON document.
    Json(serde_json::Value),
    /// URL-encoded form fields, in order.
    Form(Vec<(String, String)>),
    /// Raw bytes.
    Binary {
        /// The payload.
        data: Vec<u8>,
        /// The MIME type sent as `Content-Type`.
        content_type: String,
    },
    /// A multipart form with text fields and file attachments.
    Multipart {
        /// Plain text fields.
        fields: Vec<(String, String)>,
        /// File parts.
        attachments: Vec<BinaryAttachment>,
    },
}

impl RequestBody {
    /// Returns the [`DataType`] of this body.
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        match self {
            Self::Json(_) => DataType::Json,
            Self::Form(_) => DataType::Form,
            Self::Binary { .. } => DataType::Binary,
            Self::Multipart { .. } => DataType::Multipart,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct QueryParam {
    name: String,
    value: String,
    raw: bool,
}

/// An HTTP request to be sent to the LinkedIn API.
///
/// # Example
///
/// ```rust
/// use linkedin_api::clients::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "rest/posts")
///     .query_param("q", "author")
///     .query_param("author", "urn:li:organization:1")
///     .build()
///     .unwrap();
/// assert_eq!(get_request.query_string(), "q=author&author=urn%3Ali%3Aorganization%3A1");
///
/// let post_request = HttpRequest::builder(HttpMethod::Post, "rest/posts")
///     .json(json!({"commentary": "Hello"}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// A path relative to the API base URL, or an absolute URL.
    pub path: String,
    /// The request body, if any.
    pub body: Option<RequestBody>,
    query: Vec<QueryParam>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
    /// Number of times to attempt the request (default: 1).
    pub tries: u32,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Returns `true` if `path` is an absolute `http(s)` URL.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.path.starts_with("http://") || self.path.starts_with("https://")
    }

    /// Returns the body's [`DataType`], if there is a body.
    #[must_use]
    pub fn body_type(&self) -> Option<DataType> {
        self.body.as_ref().map(RequestBody::data_type)
    }

    /// Renders the query string (without the leading `?`).
    ///
    /// Regular values are percent-encoded; raw values are emitted verbatim
    /// so Rest.li structures such as `List(...)` keep their syntax.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|p| {
                if p.raw {
                    format!("{}={}", p.name, p.value)
                } else {
                    format!("{}={}", p.name, urlencoding::encode(&p.value))
                }
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Returns `true` if the request carries any query parameter.
    #[must_use]
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `http_method` is `Post` or `Put` but `body` is `None`
    /// - a multipart body has no attachment
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Put) && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        if let Some(RequestBody::Multipart { attachments, .. }) = &self.body {
            if attachments.is_empty() {
                return Err(InvalidHttpRequestError::EmptyMultipart);
            }
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<RequestBody>,
    query: Vec<QueryParam>,
    extra_headers: Option<HashMap<String, String>>,
    tries: u32,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: Vec::new(),
            extra_headers: None,
            tries: 1,
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets a JSON request body.
    #[must_use]
    pub fn json(self, body: impl Into<serde_json::Value>) -> Self {
        self.body(RequestBody::Json(body.into()))
    }

    /// Sets a URL-encoded form body.
    #[must_use]
    pub fn form(self, fields: Vec<(String, String)>) -> Self {
        self.body(RequestBody::Form(fields))
    }

    /// Sets a raw binary body.
    #[must_use]
    pub fn binary(self, data: Vec<u8>, content_type: impl Into<String>) -> Self {
        self.body(RequestBody::Binary {
            data,
            content_type: content_type.into(),
        })
    }

    /// Sets a multipart body.
    #[must_use]
    pub fn multipart(
        self,
        fields: Vec<(String, String)>,
        attachments: Vec<BinaryAttachment>,
    ) -> Self {
        self.body(RequestBody::Multipart {
            fields,
            attachments,
        })
    }

    /// Adds a query parameter whose value is percent-encoded.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push(QueryParam {
            name: key.into(),
            value: value.into(),
            raw: false,
        });
        self
    }

    /// Adds a query parameter whose value is sent verbatim.
    ///
    /// The caller is responsible for encoding any nested values.
    #[must_use]
    pub fn raw_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push(QueryParam {
            name: key.into(),
            value: value.into(),
            raw: true,
        });
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the number of times to attempt the request.
    ///
    /// Default is 1 (no retries). Higher values retry 429 and 5xx responses.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = tries;
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
            extra_headers: self.extra_headers,
            tries: self.tries.max(1),
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display_lowercase() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Put.to_string(), "put");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_post_and_put_require_body() {
        let post = HttpRequest::builder(HttpMethod::Post, "rest/posts").build();
        assert!(matches!(
            post,
            Err(InvalidHttpRequestError::MissingBody { ref method }) if method == "post"
        ));

        let put = HttpRequest::builder(HttpMethod::Put, "https://upload").build();
        assert!(put.is_err());

        let delete = HttpRequest::builder(HttpMethod::Delete, "rest/posts/1").build();
        assert!(delete.is_ok());
    }

    #[test]
    fn test_multipart_requires_attachment() {
        let result = HttpRequest::builder(HttpMethod::Post, "https://upload")
            .multipart(vec![("a".to_string(), "b".to_string())], Vec::new())
            .build();
        assert_eq!(result.unwrap_err(), InvalidHttpRequestError::EmptyMultipart);
    }

    #[test]
    fn test_query_string_keeps_order_and_raw_values() {
        let request = HttpRequest::builder(HttpMethod::Get, "rest/posts")
            .query_param("q", "author")
            .raw_query_param("ids", "List(urn%3Ali%3Ashare%3A1,urn%3Ali%3Ashare%3A2)")
            .query_param("text", "a b&c")
            .build()
            .unwrap();

        assert_eq!(
            request.query_string(),
            "q=author&ids=List(urn%3Ali%3Ashare%3A1,urn%3Ali%3Ashare%3A2)&text=a%20b%26c"
        );
        assert!(request.has_query());
    }

    #[test]
    fn test_body_type_follows_body() {
        let request = HttpRequest::builder(HttpMethod::Post, "rest/posts")
            .json(json!({"a": 1}))
            .build()
            .unwrap();
        assert_eq!(request.body_type(), Some(DataType::Json));

        let request = HttpRequest::builder(HttpMethod::Put, "https://upload.example")
            .binary(vec![1, 2, 3], "image/png")
            .build()
            .unwrap();
        assert_eq!(request.body_type(), Some(DataType::Binary));
        assert!(request.is_absolute());
    }

    #[test]
    fn test_tries_defaults_to_one_and_never_zero() {
        let request = HttpRequest::builder(HttpMethod::Get, "x").build().unwrap();
        assert_eq!(request.tries, 1);
        let request = HttpRequest::builder(HttpMethod::Get, "x").tries(0).build().unwrap();
        assert_eq!(request.tries, 1);
    }

    #[test]
    fn test_attachment_debug_hides_bytes() {
        let attachment = BinaryAttachment::new("file", "a.png", "image/png", vec![0; 1024]);
        let debug = format!("{attachment:?}");
        assert!(debug.contains("len: 1024"));
        assert!(!debug.contains("[0, 0"));
    }
}
