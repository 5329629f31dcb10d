//! CloudWatch Logs error types.

use awsbind_core::service_error::{ErrorMatcher, ErrorMetadata, ErrorRegistry};

/// An error returned by CloudWatch Logs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum LogsError {
    /// The batch was already accepted; retrying with the same token is a
    /// no-op.
    #[error("{meta}")]
    DataAlreadyAcceptedException {
        meta: ErrorMetadata,
        expected_sequence_token: Option<String>,
    },

    #[error("{meta}")]
    InvalidOperationException { meta: ErrorMetadata },

    #[error("{meta}")]
    InvalidParameterException { meta: ErrorMetadata },

    /// The sequence token is stale. Retry with `expected_sequence_token`.
    #[error("{meta}")]
    InvalidSequenceTokenException {
        meta: ErrorMetadata,
        expected_sequence_token: Option<String>,
    },

    #[error("{meta}")]
    LimitExceededException { meta: ErrorMetadata },

    /// A conflicting operation is running on the resource.
    #[error("{meta}")]
    OperationAbortedException { meta: ErrorMetadata },

    #[error("{meta}")]
    ResourceAlreadyExistsException { meta: ErrorMetadata },

    #[error("{meta}")]
    ResourceNotFoundException { meta: ErrorMetadata },

    #[error("{meta}")]
    ServiceUnavailableException { meta: ErrorMetadata },

    /// Usually an invalid access key id or secret.
    #[error("{meta}")]
    UnrecognizedClientException { meta: ErrorMetadata },

    /// An error code this client does not model.
    #[error("{meta}")]
    Unhandled { meta: ErrorMetadata },
}

impl LogsError {
    /// Metadata shared by every variant.
    #[must_use]
    pub fn meta(&self) -> &ErrorMetadata {
        match self {
            Self::DataAlreadyAcceptedException { meta, .. }
            | Self::InvalidOperationException { meta }
            | Self::InvalidParameterException { meta }
            | Self::InvalidSequenceTokenException { meta, .. }
            | Self::LimitExceededException { meta }
            | Self::OperationAbortedException { meta }
            | Self::ResourceAlreadyExistsException { meta }
            | Self::ResourceNotFoundException { meta }
            | Self::ServiceUnavailableException { meta }
            | Self::UnrecognizedClientException { meta }
            | Self::Unhandled { meta } => meta,
        }
    }

    /// The error code sent by the service.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.meta().code()
    }

    /// The error message sent by the service.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.meta().message()
    }

    /// The sequence token the service expected, for the two sequence errors.
    #[must_use]
    pub fn expected_sequence_token(&self) -> Option<&str> {
        match self {
            Self::DataAlreadyAcceptedException {
                expected_sequence_token,
                ..
            }
            | Self::InvalidSequenceTokenException {
                expected_sequence_token,
                ..
            } => expected_sequence_token.as_deref(),
            _ => None,
        }
    }

    /// Whether this is an error code the client does not model.
    #[must_use]
    pub fn is_unhandled(&self) -> bool {
        matches!(self, Self::Unhandled { .. })
    }
}

static LOGS_MATCHERS: [ErrorMatcher<LogsError>; 10] = [
    ErrorMatcher::new("DataAlreadyAcceptedException", |b| {
        LogsError::DataAlreadyAcceptedException {
            meta: b.metadata(),
            expected_sequence_token: b.string_field("expectedSequenceToken"),
        }
    }),
    ErrorMatcher::new("InvalidOperationException", |b| {
        LogsError::InvalidOperationException { meta: b.metadata() }
    }),
    ErrorMatcher::new("InvalidParameterException", |b| {
        LogsError::InvalidParameterException { meta: b.metadata() }
    }),
    ErrorMatcher::new("InvalidSequenceTokenException", |b| {
        LogsError::InvalidSequenceTokenException {
            meta: b.metadata(),
            expected_sequence_token: b.string_field("expectedSequenceToken"),
        }
    }),
    ErrorMatcher::new("LimitExceededException", |b| {
        LogsError::LimitExceededException { meta: b.metadata() }
    }),
    ErrorMatcher::new("OperationAbortedException", |b| {
        LogsError::OperationAbortedException { meta: b.metadata() }
    }),
    ErrorMatcher::new("ResourceAlreadyExistsException", |b| {
        LogsError::ResourceAlreadyExistsException { meta: b.metadata() }
    }),
    ErrorMatcher::new("ResourceNotFoundException", |b| {
        LogsError::ResourceNotFoundException { meta: b.metadata() }
    }),
    ErrorMatcher::new("ServiceUnavailableException", |b| {
        LogsError::ServiceUnavailableException { meta: b.metadata() }
    }),
    ErrorMatcher::new("UnrecognizedClientException", |b| {
        LogsError::UnrecognizedClientException { meta: b.metadata() }
    }),
];

/// Error registry for CloudWatch Logs.
pub static LOGS_ERRORS: ErrorRegistry<LogsError> =
    ErrorRegistry::new(&LOGS_MATCHERS, |b| LogsError::Unhandled { meta: b.metadata() });

#[cfg(test)]
mod tests {
    use awsbind_core::service_error::ErrorBody;

    use super::*;

    fn resolve(body: &str) -> LogsError {
        LOGS_ERRORS.resolve(&ErrorBody::from_json(body.as_bytes()))
    }

    #[test]
    fn test_should_capture_expected_sequence_token() {
        let err = resolve(
            r#"{"__type":"InvalidSequenceTokenException","message":"stale","expectedSequenceToken":"4963"}"#,
        );
        assert!(matches!(err, LogsError::InvalidSequenceTokenException { .. }));
        assert_eq!(err.expected_sequence_token(), Some("4963"));
        assert_eq!(err.message(), Some("stale"));
    }

    #[test]
    fn test_should_resolve_resource_not_found() {
        let err = resolve(r#"{"__type":"ResourceNotFoundException","message":"no group"}"#);
        assert!(matches!(err, LogsError::ResourceNotFoundException { .. }));
        assert_eq!(err.to_string(), "ResourceNotFoundException: no group");
    }

    #[test]
    fn test_should_fall_back_to_unhandled() {
        let err = resolve(r#"{"__type":"ThrottlingException"}"#);
        assert!(err.is_unhandled());
        assert_eq!(err.code(), Some("ThrottlingException"));
        assert_eq!(err.expected_sequence_token(), None);
    }

    #[test]
    fn test_should_match_registration_order() {
        let codes: Vec<_> = LOGS_ERRORS.matchers().iter().map(ErrorMatcher::code).collect();
        assert_eq!(codes.first(), Some(&"DataAlreadyAcceptedException"));
        assert_eq!(codes.last(), Some(&"UnrecognizedClientException"));
    }
}
