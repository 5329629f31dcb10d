//! Amazon Elasticsearch Service error types.
//!
//! restJson1 services report the code in the `x-amzn-errortype` header as
//! well as the body; the core error body parser accepts either.

use awsbind_core::service_error::{ErrorMatcher, ErrorMetadata, ErrorRegistry};

/// An error returned by Amazon Elasticsearch Service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ElasticsearchError {
    #[error("{meta}")]
    AccessDeniedException { meta: ErrorMetadata },

    /// Generic service-side failure with no more specific code.
    #[error("{meta}")]
    BaseException { meta: ErrorMetadata },

    /// A concurrent change to the same resource is in progress.
    #[error("{meta}")]
    ConflictException { meta: ErrorMetadata },

    /// The account is not allowed to perform this operation.
    #[error("{meta}")]
    DisabledOperationException { meta: ErrorMetadata },

    #[error("{meta}")]
    InternalException { meta: ErrorMetadata },

    /// A parameter has an unsupported type, such as an instance type.
    #[error("{meta}")]
    InvalidTypeException { meta: ErrorMetadata },

    #[error("{meta}")]
    LimitExceededException { meta: ErrorMetadata },

    #[error("{meta}")]
    ResourceAlreadyExistsException { meta: ErrorMetadata },

    #[error("{meta}")]
    ResourceNotFoundException { meta: ErrorMetadata },

    #[error("{meta}")]
    ValidationException { meta: ErrorMetadata },

    /// An error code this client does not model.
    #[error("{meta}")]
    Unhandled { meta: ErrorMetadata },
}

impl ElasticsearchError {
    /// Metadata shared by every variant.
    #[must_use]
    pub fn meta(&self) -> &ErrorMetadata {
        match self {
            Self::AccessDeniedException { meta }
            | Self::BaseException { meta }
            | Self::ConflictException { meta }
            | Self::DisabledOperationException { meta }
            | Self::InternalException { meta }
            | Self::InvalidTypeException { meta }
            | Self::LimitExceededException { meta }
            | Self::ResourceAlreadyExistsException { meta }
            | Self::ResourceNotFoundException { meta }
            | Self::ValidationException { meta }
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

    /// Whether this is an error code the client does not model.
    #[must_use]
    pub fn is_unhandled(&self) -> bool {
        matches!(self, Self::Unhandled { .. })
    }
}

static ES_MATCHERS: [ErrorMatcher<ElasticsearchError>; 10] = [
    ErrorMatcher::new("AccessDeniedException", |b| {
        ElasticsearchError::AccessDeniedException { meta: b.metadata() }
    }),
    ErrorMatcher::new("BaseException", |b| ElasticsearchError::BaseException {
        meta: b.metadata(),
    }),
    ErrorMatcher::new("ConflictException", |b| {
        ElasticsearchError::ConflictException { meta: b.metadata() }
    }),
    ErrorMatcher::new("DisabledOperationException", |b| {
        ElasticsearchError::DisabledOperationException { meta: b.metadata() }
    }),
    ErrorMatcher::new("InternalException", |b| {
        ElasticsearchError::InternalException { meta: b.metadata() }
    }),
    ErrorMatcher::new("InvalidTypeException", |b| {
        ElasticsearchError::InvalidTypeException { meta: b.metadata() }
    }),
    ErrorMatcher::new("LimitExceededException", |b| {
        ElasticsearchError::LimitExceededException { meta: b.metadata() }
    }),
    ErrorMatcher::new("ResourceAlreadyExistsException", |b| {
        ElasticsearchError::ResourceAlreadyExistsException { meta: b.metadata() }
    }),
    ErrorMatcher::new("ResourceNotFoundException", |b| {
        ElasticsearchError::ResourceNotFoundException { meta: b.metadata() }
    }),
    ErrorMatcher::new("ValidationException", |b| {
        ElasticsearchError::ValidationException { meta: b.metadata() }
    }),
];

/// Error registry for Amazon Elasticsearch Service.
pub static ES_ERRORS: ErrorRegistry<ElasticsearchError> =
    ErrorRegistry::new(&ES_MATCHERS, |b| ElasticsearchError::Unhandled { meta: b.metadata() });
