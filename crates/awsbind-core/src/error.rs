//! Error types for the client runtime.
//!
//! Every service operation returns [`ClientError`], generic over the
//! service's own error enum. Failures that happen before anything is sent
//! (validation, JSON encoding) come out of the marshalling layer as
//! [`MarshalError`] and are tagged with the operation name by the client.

use crate::signer::SigningError;
use crate::transport::TransportError;

/// Error returned by every service operation.
#[derive(Debug, thiserror::Error)]
pub enum ClientError<E> {
    /// The request value cannot be sent: a required member is absent or empty.
    #[error("{operation}: invalid argument: {message}")]
    InvalidArgument {
        /// Operation name.
        operation: &'static str,
        /// What is wrong with the input.
        message: String,
    },

    /// The request body could not be encoded as JSON.
    #[error("{operation}: failed to serialize request")]
    Serialization {
        /// Operation name.
        operation: &'static str,
        /// Underlying encoder error.
        #[source]
        source: serde_json::Error,
    },

    /// The request could not be signed.
    #[error("{operation}: failed to sign request")]
    Signing {
        /// Operation name.
        operation: &'static str,
        /// Underlying signer error.
        #[source]
        source: SigningError,
    },

    /// The transport failed to deliver the request or read the response.
    #[error("{operation}: transport failure")]
    Transport {
        /// Operation name.
        operation: &'static str,
        /// Underlying transport error.
        #[source]
        source: TransportError,
    },

    /// The response body does not match its `x-amz-crc32` header.
    #[error("{operation}: response checksum mismatch (expected {expected}, computed {actual})")]
    ChecksumMismatch {
        /// Operation name.
        operation: &'static str,
        /// Value announced by the service.
        expected: u32,
        /// Value computed over the received body.
        actual: u32,
    },

    /// A successful response body could not be decoded.
    #[error("{operation}: failed to deserialize response")]
    Deserialization {
        /// Operation name.
        operation: &'static str,
        /// Underlying decoder error.
        #[source]
        source: serde_json::Error,
    },

    /// The service answered with an error.
    #[error(transparent)]
    Service(E),
}

impl<E> ClientError<E> {
    /// Tag a marshalling failure with the operation it belongs to.
    #[must_use]
    pub fn marshal(operation: &'static str, error: MarshalError) -> Self {
        match error {
            MarshalError::InvalidArgument(message) => Self::InvalidArgument { operation, message },
            MarshalError::Serialization(source) => Self::Serialization { operation, source },
            MarshalError::InvalidHeader(name) => Self::InvalidArgument {
                operation,
                message: format!("value for header {name} is not a valid header value"),
            },
        }
    }

    /// The service error, if the service answered with one.
    #[must_use]
    pub fn as_service_error(&self) -> Option<&E> {
        match self {
            Self::Service(e) => Some(e),
            _ => None,
        }
    }

    /// Consume the error, returning the service error if there is one.
    #[must_use]
    pub fn into_service_error(self) -> Option<E> {
        match self {
            Self::Service(e) => Some(e),
            _ => None,
        }
    }

    /// The operation the error was raised for; `None` for service errors.
    #[must_use]
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { operation, .. }
            | Self::Serialization { operation, .. }
            | Self::Signing { operation, .. }
            | Self::Transport { operation, .. }
            | Self::ChecksumMismatch { operation, .. }
            | Self::Deserialization { operation, .. } => Some(*operation),
            Self::Service(_) => None,
        }
    }
}

/// Failure while turning a request value into a wire request.
#[derive(Debug, thiserror::Error)]
pub enum MarshalError {
    /// A required member is absent or empty.
    #[error("{0}")]
    InvalidArgument(String),

    /// The body could not be encoded.
    #[error("failed to serialize request body")]
    Serialization(#[from] serde_json::Error),

    /// A header value contains bytes HTTP does not allow.
    #[error("invalid value for header {0}")]
    InvalidHeader(&'static str),
}

/// Failure while constructing a client.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The configured endpoint is not an absolute http(s) URL.
    #[error("invalid endpoint URL {url}: {reason}")]
    InvalidEndpoint {
        /// The offending URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The configured user agent is not a valid header value.
    #[error("invalid user agent {0:?}")]
    InvalidUserAgent(String),

    /// The default transport could not be created.
    #[error("failed to initialize transport")]
    Transport(#[from] TransportError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_tag_invalid_argument_with_operation() {
        let err: ClientError<std::io::Error> = ClientError::marshal(
            "DeleteFileSystem",
            MarshalError::InvalidArgument("FileSystemId must not be empty".to_owned()),
        );
        assert_eq!(err.operation(), Some("DeleteFileSystem"));
        assert_eq!(
            err.to_string(),
            "DeleteFileSystem: invalid argument: FileSystemId must not be empty"
        );
    }

    #[test]
    fn test_should_expose_service_error() {
        let err: ClientError<std::io::Error> =
            ClientError::Service(std::io::Error::other("boom"));
        assert!(err.operation().is_none());
        assert_eq!(err.as_service_error().map(ToString::to_string).as_deref(), Some("boom"));
        assert!(err.into_service_error().is_some());
    }
}
