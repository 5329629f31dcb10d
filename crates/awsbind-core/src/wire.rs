//! Protocol-neutral HTTP request and response values.
//!
//! Marshallers produce a [`WireRequest`]; the runtime decorates and signs it,
//! and a [`Transport`](crate::transport::Transport) turns it into a
//! [`WireResponse`].

use bytes::Bytes;
use http::{HeaderMap, HeaderValue, Method, StatusCode, header::HeaderName};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::{BuildError, MarshalError};

/// Characters left unencoded in path labels and query components: the RFC 3986
/// unreserved set.
pub(crate) const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// An outgoing HTTP request, before it is bound to an endpoint.
#[derive(Debug, Clone)]
pub struct WireRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute path, already percent-encoded.
    pub path: String,
    /// Query parameters in insertion order, not yet encoded.
    pub query: Vec<(String, String)>,
    /// Request headers.
    pub headers: HeaderMap,
    /// Request body; empty when the operation sends none.
    pub body: Bytes,
}

impl WireRequest {
    /// Create a request with no query, headers or body.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// Set a header, replacing any previous value.
    pub fn set_header(&mut self, name: &'static str, value: &str) -> Result<(), MarshalError> {
        let value = HeaderValue::from_str(value).map_err(|_| MarshalError::InvalidHeader(name))?;
        self.headers.insert(HeaderName::from_static(name), value);
        Ok(())
    }

    /// Look up a header as a string.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The encoded query string, without the leading `?`.
    ///
    /// # Examples
    ///
    /// ```
    /// use awsbind_core::WireRequest;
    ///
    /// let mut req = WireRequest::new(http::Method::GET, "/2015-01-01/tags/");
    /// req.query.push(("arn".to_owned(), "arn:aws:es:us-east-1:1:domain/a b".to_owned()));
    /// assert_eq!(req.query_string(), "arn=arn%3Aaws%3Aes%3Aus-east-1%3A1%3Adomain%2Fa%20b");
    /// ```
    #[must_use]
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(k, UNRESERVED),
                    utf8_percent_encode(v, UNRESERVED)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Path followed by the encoded query string, if any.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query_string())
        }
    }

    /// The body parsed as JSON, if it is JSON.
    #[must_use]
    pub fn json_body(&self) -> Option<serde_json::Value> {
        serde_json::from_slice(&self.body).ok()
    }
}

/// An HTTP response as handed back by a transport.
#[derive(Debug, Clone)]
pub struct WireResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body.
    pub body: Bytes,
}

impl WireResponse {
    /// Create a response with no headers.
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Whether the status is 2xx.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Look up a header as a string.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// A resolved service endpoint: scheme, authority and optional base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    url: String,
    host: String,
}

impl Endpoint {
    /// Parse an absolute `http` or `https` URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use awsbind_core::Endpoint;
    ///
    /// let ep = Endpoint::parse("http://localhost:4566/").unwrap();
    /// assert_eq!(ep.host(), "localhost:4566");
    /// assert_eq!(ep.url_for("/"), "http://localhost:4566/");
    /// ```
    pub fn parse(url: &str) -> Result<Self, BuildError> {
        let invalid = |reason: &str| BuildError::InvalidEndpoint {
            url: url.to_owned(),
            reason: reason.to_owned(),
        };

        let uri: http::Uri = url.parse().map_err(|_| invalid("not a valid URI"))?;
        match uri.scheme_str() {
            Some("http" | "https") => {}
            Some(_) => return Err(invalid("scheme must be http or https")),
            None => return Err(invalid("missing scheme")),
        }
        let host = uri
            .authority()
            .map(ToString::to_string)
            .ok_or_else(|| invalid("missing host"))?;
        // Requests are signed over their own path, so a base path would break
        // the signature.
        if !matches!(uri.path(), "" | "/") || uri.query().is_some() {
            return Err(invalid("must not contain a path or query"));
        }

        Ok(Self {
            url: url.trim_end_matches('/').to_owned(),
            host,
        })
    }

    /// The URL without a trailing slash.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Value for the `host` header.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Full URL for a request's path and query.
    #[must_use]
    pub fn url_for(&self, path_and_query: &str) -> String {
        format!("{}{path_and_query}", self.url)
    }
}
