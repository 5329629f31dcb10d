//! Request marshalling for the two JSON protocols.
//!
//! - `awsJson1_x`: every call is `POST /` with the operation named in
//!   `X-Amz-Target` and the whole input as the JSON body.
//! - `restJson1`: each operation has its own method and URI template; some
//!   members are bound to path labels or query parameters, the rest form the
//!   JSON body.

use http::Method;
use percent_encoding::utf8_percent_encode;
use serde::Serialize;

use crate::error::MarshalError;
use crate::wire::{UNRESERVED, WireRequest};

/// `Content-Type` for restJson1 bodies.
pub const REST_JSON_CONTENT_TYPE: &str = "application/json";

/// Wire protocol spoken by a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// awsJson: `POST /` with `X-Amz-Target`.
    AwsJson {
        /// Protocol minor version, `"1.0"` or `"1.1"`.
        version: &'static str,
        /// Prefix of the `X-Amz-Target` header value.
        target_prefix: &'static str,
    },
    /// restJson1: per-operation method and URI.
    RestJson,
}

/// Static description of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceMetadata {
    /// Human-readable service name, used in logs.
    pub service_name: &'static str,
    /// Hostname prefix of the default endpoint.
    pub endpoint_prefix: &'static str,
    /// SigV4 signing name.
    pub signing_name: &'static str,
    /// Wire protocol.
    pub protocol: Protocol,
}

impl ServiceMetadata {
    /// The `Content-Type` this service expects for request bodies.
    #[must_use]
    pub fn content_type(&self) -> &'static str {
        match self.protocol {
            Protocol::AwsJson { version: "1.0", .. } => "application/x-amz-json-1.0",
            Protocol::AwsJson { .. } => "application/x-amz-json-1.1",
            Protocol::RestJson => REST_JSON_CONTENT_TYPE,
        }
    }
}

/// Client-side checks on a request value, run before it is marshalled.
pub trait Validate {
    /// Return an error describing the first invalid member.
    fn validate(&self) -> Result<(), MarshalError>;
}

/// Fail unless a required string member is non-empty.
pub fn require(field: &str, value: &str) -> Result<(), MarshalError> {
    if value.is_empty() {
        return Err(MarshalError::InvalidArgument(format!(
            "{field} is required and must not be empty"
        )));
    }
    Ok(())
}

/// Fail unless a required list member is non-empty.
pub fn require_items<T>(field: &str, value: &[T]) -> Result<(), MarshalError> {
    if value.is_empty() {
        return Err(MarshalError::InvalidArgument(format!(
            "{field} must contain at least one item"
        )));
    }
    Ok(())
}

/// Build an awsJson request for `operation`.
///
/// # Examples
///
/// ```
/// use awsbind_core::protocol::{Protocol, ServiceMetadata, aws_json_request};
///
/// const META: ServiceMetadata = ServiceMetadata {
///     service_name: "Example",
///     endpoint_prefix: "example",
///     signing_name: "example",
///     protocol: Protocol::AwsJson { version: "1.1", target_prefix: "Example_20200101" },
/// };
///
/// let req = aws_json_request(&META, "DoThing", &serde_json::json!({})).unwrap();
/// assert_eq!(req.header("x-amz-target"), Some("Example_20200101.DoThing"));
/// assert_eq!(&req.body[..], b"{}");
/// ```
pub fn aws_json_request<T>(
    metadata: &ServiceMetadata,
    operation: &str,
    input: &T,
) -> Result<WireRequest, MarshalError>
where
    T: Serialize + ?Sized,
{
    let Protocol::AwsJson { target_prefix, .. } = metadata.protocol else {
        return Err(MarshalError::InvalidArgument(format!(
            "{} does not use the awsJson protocol",
            metadata.service_name
        )));
    };

    let mut request = WireRequest::new(Method::POST, "/");
    request.set_header("x-amz-target", &format!("{target_prefix}.{operation}"))?;
    request.set_header("content-type", metadata.content_type())?;
    request.body = serde_json::to_vec(input)?.into();
    Ok(request)
}

/// Builder for restJson1 requests.
///
/// Path labels are percent-encoded as single segments; empty labels are
/// rejected because they would change which resource the URI names.
#[derive(Debug)]
pub struct RestRequest {
    request: WireRequest,
}

impl RestRequest {
    /// Start a request with a literal path.
    #[must_use]
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            request: WireRequest::new(method, path),
        }
    }

    /// Append `/{label}` to the path.
    pub fn label(mut self, name: &str, value: &str) -> Result<Self, MarshalError> {
        require(name, value)?;
        self.request.path.push('/');
        self.request
            .path
            .extend(utf8_percent_encode(value, UNRESERVED));
        Ok(self)
    }

    /// Append a literal path segment.
    #[must_use]
    pub fn segment(mut self, literal: &str) -> Self {
        self.request.path.push('/');
        self.request.path.push_str(literal);
        self
    }

    /// Add a query parameter.
    #[must_use]
    pub fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.request.query.push((name.to_owned(), value.to_string()));
        self
    }

    /// Add a query parameter when the value is present.
    #[must_use]
    pub fn query_opt<V: ToString>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query(name, v),
            None => self,
        }
    }

    /// Set the JSON body.
    pub fn json<T>(mut self, body: &T) -> Result<Self, MarshalError>
    where
        T: Serialize + ?Sized,
    {
        self.request.body = serde_json::to_vec(body)?.into();
        self.request
            .set_header("content-type", REST_JSON_CONTENT_TYPE)?;
        Ok(self)
    }

    /// Finish the request.
    #[must_use]
    pub fn build(self) -> WireRequest {
        self.request
    }
}
