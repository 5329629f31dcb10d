//! Service error decoding and registries.
//!
//! An error response is first reduced to an [`ErrorBody`]: the sanitized error
//! code, the message, the request id, the status and the raw JSON members.
//! Each service then owns a static [`ErrorRegistry`] that maps the code to a
//! variant of its error enum. Matchers are tried in registration order and
//! the first match wins; when nothing matches the registry's fallback builds
//! the catch-all variant, so resolution never fails.

use std::fmt;

use http::{HeaderMap, StatusCode};
use serde_json::{Map, Value};

/// Header carrying the error code on restJson and some awsJson responses.
pub const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";

const REQUEST_ID_HEADERS: &[&str] = &["x-amzn-requestid", "x-amz-request-id"];

/// Strip the namespace prefix and any trailing URL from a raw error code.
///
/// # Examples
///
/// ```
/// use awsbind_core::sanitize_error_code;
///
/// assert_eq!(sanitize_error_code("aws.protocoltests#FooError"), "FooError");
/// assert_eq!(
///     sanitize_error_code("FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"),
///     "FooError"
/// );
/// assert_eq!(sanitize_error_code("FooError"), "FooError");
/// ```
#[must_use]
pub fn sanitize_error_code(raw: &str) -> &str {
    let code = raw.split_once(':').map_or(raw, |(code, _)| code);
    code.rsplit_once('#').map_or(code, |(_, code)| code)
}

/// Details common to every service error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMetadata {
    /// Sanitized error code.
    pub code: Option<String>,
    /// Human-readable message.
    pub message: Option<String>,
    /// Request id assigned by the service.
    pub request_id: Option<String>,
    /// HTTP status of the error response.
    pub status: Option<StatusCode>,
}

impl ErrorMetadata {
    /// The error code, if the service sent one.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// The error message, if the service sent one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The request id, if the service sent one.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

impl fmt::Display for ErrorMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code().unwrap_or("Unknown"))?;
        if let Some(message) = self.message() {
            write!(f, ": {message}")?;
        }
        if let Some(request_id) = self.request_id() {
            write!(f, " (request id: {request_id})")?;
        }
        Ok(())
    }
}

/// A decoded error response.
#[derive(Debug, Clone, Default)]
pub struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
    status: Option<StatusCode>,
    fields: Map<String, Value>,
}

impl ErrorBody {
    /// Decode an HTTP error response.
    ///
    /// The code comes from the `x-amzn-ErrorType` header when present,
    /// otherwise from the body's `__type`, `code` or `Code` member. A body
    /// that is not a JSON object contributes no members.
    #[must_use]
    pub fn parse(status: StatusCode, headers: &HeaderMap, body: &[u8]) -> Self {
        let mut parsed = Self::from_json(body);
        if let Some(code) = header_str(headers, ERROR_TYPE_HEADER) {
            parsed.code = Some(sanitize_error_code(code).to_owned());
        }
        parsed.request_id = REQUEST_ID_HEADERS
            .iter()
            .find_map(|name| header_str(headers, name))
            .map(ToOwned::to_owned);
        parsed.status = Some(status);
        parsed
    }

    /// Decode an error body without any HTTP context.
    #[must_use]
    pub fn from_json(body: &[u8]) -> Self {
        let fields = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };

        let code = ["__type", "code", "Code"]
            .iter()
            .find_map(|k| fields.get(*k).and_then(Value::as_str))
            .map(|raw| sanitize_error_code(raw).to_owned())
            .filter(|c| !c.is_empty());
        let message = ["message", "Message", "errorMessage"]
            .iter()
            .find_map(|k| fields.get(*k).and_then(Value::as_str))
            .map(ToOwned::to_owned);

        Self {
            code,
            message,
            request_id: None,
            status: None,
            fields,
        }
    }

    /// Sanitized error code.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Error message.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// HTTP status, when decoded from a response.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// A raw body member. Matches the exact name first, then ignores ASCII
    /// case.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).or_else(|| {
            self.fields
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v)
        })
    }

    /// A string body member, see [`ErrorBody::field`].
    #[must_use]
    pub fn string_field(&self, name: &str) -> Option<String> {
        self.field(name)
            .and_then(Value::as_str)
            .map(ToOwned::to_owned)
    }

    /// Metadata shared by every error variant.
    #[must_use]
    pub fn metadata(&self) -> ErrorMetadata {
        ErrorMetadata {
            code: self.code.clone(),
            message: self.message.clone(),
            request_id: self.request_id.clone(),
            status: self.status,
        }
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
}

/// Maps one error code to a constructor of the service error.
pub struct ErrorMatcher<E> {
    code: &'static str,
    build: fn(&ErrorBody) -> E,
}

impl<E> ErrorMatcher<E> {
    /// Create a matcher for `code`.
    #[must_use]
    pub const fn new(code: &'static str, build: fn(&ErrorBody) -> E) -> Self {
        Self { code, build }
    }

    /// The error code this matcher accepts.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Whether this matcher accepts `code`. Comparison is exact.
    #[must_use]
    pub fn matches(&self, code: &str) -> bool {
        self.code == code
    }

    /// Build the service error from a body.
    #[must_use]
    pub fn build(&self, body: &ErrorBody) -> E {
        (self.build)(body)
    }
}

impl<E> fmt::Debug for ErrorMatcher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorMatcher")
            .field("code", &self.code)
            .finish_non_exhaustive()
    }
}

/// Ordered error matchers plus a fallback.
pub struct ErrorRegistry<E: 'static> {
    matchers: &'static [ErrorMatcher<E>],
    fallback: fn(&ErrorBody) -> E,
}

impl<E: 'static> ErrorRegistry<E> {
    /// Create a registry. `matchers` are tried in order.
    #[must_use]
    pub const fn new(matchers: &'static [ErrorMatcher<E>], fallback: fn(&ErrorBody) -> E) -> Self {
        Self { matchers, fallback }
    }

    /// The registered matchers, in order.
    #[must_use]
    pub fn matchers(&self) -> &'static [ErrorMatcher<E>] {
        self.matchers
    }

    /// Resolve a body to a service error. Never fails.
    #[must_use]
    pub fn resolve(&self, body: &ErrorBody) -> E {
        body.code()
            .and_then(|code| self.matchers.iter().find(|m| m.matches(code)))
            .map_or_else(|| (self.fallback)(body), |m| m.build(body))
    }
}

impl<E: 'static> fmt::Debug for ErrorRegistry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorRegistry")
            .field("matchers", &self.matchers)
            .finish_non_exhaustive()
    }
}
