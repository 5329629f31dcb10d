//! Amazon FSx error types.
//!
//! FSx error codes carry no `Exception` suffix (`BadRequest`,
//! `FileSystemNotFound`). Codes are matched exactly, in registry order;
//! anything unrecognized becomes [`FsxError::Unhandled`].

use awsbind_core::service_error::{ErrorMatcher, ErrorMetadata, ErrorRegistry};

use crate::types::ActiveDirectoryErrorType;

/// An error returned by Amazon FSx.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum FsxError {
    /// The Active Directory could not be reached or is misconfigured.
    #[error("{meta}")]
    ActiveDirectoryError {
        meta: ErrorMetadata,
        active_directory_id: Option<String>,
        error_type: Option<ActiveDirectoryErrorType>,
    },

    /// Another backup of the file system is already running.
    #[error("{meta}")]
    BackupInProgress { meta: ErrorMetadata },

    #[error("{meta}")]
    BackupNotFound { meta: ErrorMetadata },

    /// A file system is being restored from this backup.
    #[error("{meta}")]
    BackupRestoring {
        meta: ErrorMetadata,
        file_system_id: Option<String>,
    },

    #[error("{meta}")]
    BadRequest { meta: ErrorMetadata },

    /// The task has already finished.
    #[error("{meta}")]
    DataRepositoryTaskEnded { meta: ErrorMetadata },

    /// Another task is running on the file system.
    #[error("{meta}")]
    DataRepositoryTaskExecuting { meta: ErrorMetadata },

    #[error("{meta}")]
    DataRepositoryTaskNotFound { meta: ErrorMetadata },

    #[error("{meta}")]
    FileSystemNotFound { meta: ErrorMetadata },

    /// Two parameters cannot be used together.
    #[error("{meta}")]
    IncompatibleParameterError {
        meta: ErrorMetadata,
        parameter: Option<String>,
    },

    #[error("{meta}")]
    InternalServerError { meta: ErrorMetadata },

    #[error("{meta}")]
    InvalidExportPath { meta: ErrorMetadata },

    #[error("{meta}")]
    InvalidImportPath { meta: ErrorMetadata },

    /// A subnet or security group is unusable.
    #[error("{meta}")]
    InvalidNetworkSettings {
        meta: ErrorMetadata,
        invalid_subnet_id: Option<String>,
        invalid_security_group_id: Option<String>,
    },

    #[error("{meta}")]
    InvalidPerUnitStorageThroughput { meta: ErrorMetadata },

    #[error("{meta}")]
    MissingFileSystemConfiguration { meta: ErrorMetadata },

    /// The resource is owned by another AWS service.
    #[error("{meta}")]
    NotServiceResourceError {
        meta: ErrorMetadata,
        resource_arn: Option<String>,
    },

    #[error("{meta}")]
    ResourceDoesNotSupportTagging {
        meta: ErrorMetadata,
        resource_arn: Option<String>,
    },

    #[error("{meta}")]
    ResourceNotFound {
        meta: ErrorMetadata,
        resource_arn: Option<String>,
    },

    /// An account quota was hit.
    #[error("{meta}")]
    ServiceLimitExceeded {
        meta: ErrorMetadata,
        limit: Option<String>,
    },

    #[error("{meta}")]
    UnsupportedOperation { meta: ErrorMetadata },

    /// An error code this client does not model.
    #[error("{meta}")]
    Unhandled { meta: ErrorMetadata },
}

impl FsxError {
    /// Metadata shared by every variant.
    #[must_use]
    pub fn meta(&self) -> &ErrorMetadata {
        match self {
            Self::ActiveDirectoryError { meta, .. }
            | Self::BackupInProgress { meta }
            | Self::BackupNotFound { meta }
            | Self::BackupRestoring { meta, .. }
            | Self::BadRequest { meta }
            | Self::DataRepositoryTaskEnded { meta }
            | Self::DataRepositoryTaskExecuting { meta }
            | Self::DataRepositoryTaskNotFound { meta }
            | Self::FileSystemNotFound { meta }
            | Self::IncompatibleParameterError { meta, .. }
            | Self::InternalServerError { meta }
            | Self::InvalidExportPath { meta }
            | Self::InvalidImportPath { meta }
            | Self::InvalidNetworkSettings { meta, .. }
            | Self::InvalidPerUnitStorageThroughput { meta }
            | Self::MissingFileSystemConfiguration { meta }
            | Self::NotServiceResourceError { meta, .. }
            | Self::ResourceDoesNotSupportTagging { meta, .. }
            | Self::ResourceNotFound { meta, .. }
            | Self::ServiceLimitExceeded { meta, .. }
            | Self::UnsupportedOperation { meta }
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

static FSX_MATCHERS: [ErrorMatcher<FsxError>; 21] = [
    ErrorMatcher::new("ActiveDirectoryError", |b| FsxError::ActiveDirectoryError {
        meta: b.metadata(),
        active_directory_id: b.string_field("ActiveDirectoryId"),
        error_type: b.string_field("Type").map(ActiveDirectoryErrorType::from),
    }),
    ErrorMatcher::new("BackupInProgress", |b| FsxError::BackupInProgress {
        meta: b.metadata(),
    }),
    ErrorMatcher::new("BackupNotFound", |b| FsxError::BackupNotFound {
        meta: b.metadata(),
    }),
    ErrorMatcher::new("BackupRestoring", |b| FsxError::BackupRestoring {
        meta: b.metadata(),
        file_system_id: b.string_field("FileSystemId"),
    }),
    ErrorMatcher::new("BadRequest", |b| FsxError::BadRequest { meta: b.metadata() }),
    ErrorMatcher::new("DataRepositoryTaskEnded", |b| {
        FsxError::DataRepositoryTaskEnded { meta: b.metadata() }
    }),
    ErrorMatcher::new("DataRepositoryTaskExecuting", |b| {
        FsxError::DataRepositoryTaskExecuting { meta: b.metadata() }
    }),
    ErrorMatcher::new("DataRepositoryTaskNotFound", |b| {
        FsxError::DataRepositoryTaskNotFound { meta: b.metadata() }
    }),
    ErrorMatcher::new("FileSystemNotFound", |b| FsxError::FileSystemNotFound {
        meta: b.metadata(),
    }),
    ErrorMatcher::new("IncompatibleParameterError", |b| {
        FsxError::IncompatibleParameterError {
            meta: b.metadata(),
            parameter: b.string_field("Parameter"),
        }
    }),
    ErrorMatcher::new("InternalServerError", |b| FsxError::InternalServerError {
        meta: b.metadata(),
    }),
    ErrorMatcher::new("InvalidExportPath", |b| FsxError::InvalidExportPath {
        meta: b.metadata(),
    }),
    ErrorMatcher::new("InvalidImportPath", |b| FsxError::InvalidImportPath {
        meta: b.metadata(),
    }),
    ErrorMatcher::new("InvalidNetworkSettings", |b| {
        FsxError::InvalidNetworkSettings {
            meta: b.metadata(),
            invalid_subnet_id: b.string_field("InvalidSubnetId"),
            invalid_security_group_id: b.string_field("InvalidSecurityGroupId"),
        }
    }),
    ErrorMatcher::new("InvalidPerUnitStorageThroughput", |b| {
        FsxError::InvalidPerUnitStorageThroughput { meta: b.metadata() }
    }),
    ErrorMatcher::new("MissingFileSystemConfiguration", |b| {
        FsxError::MissingFileSystemConfiguration { meta: b.metadata() }
    }),
    ErrorMatcher::new("NotServiceResourceError", |b| {
        FsxError::NotServiceResourceError {
            meta: b.metadata(),
            resource_arn: b.string_field("ResourceARN"),
        }
    }),
    ErrorMatcher::new("ResourceDoesNotSupportTagging", |b| {
        FsxError::ResourceDoesNotSupportTagging {
            meta: b.metadata(),
            resource_arn: b.string_field("ResourceARN"),
        }
    }),
    ErrorMatcher::new("ResourceNotFound", |b| FsxError::ResourceNotFound {
        meta: b.metadata(),
        resource_arn: b.string_field("ResourceARN"),
    }),
    ErrorMatcher::new("ServiceLimitExceeded", |b| FsxError::ServiceLimitExceeded {
        meta: b.metadata(),
        limit: b.string_field("Limit"),
    }),
    ErrorMatcher::new("UnsupportedOperation", |b| FsxError::UnsupportedOperation {
        meta: b.metadata(),
    }),
];

/// Error registry for Amazon FSx.
pub static FSX_ERRORS: ErrorRegistry<FsxError> =
    ErrorRegistry::new(&FSX_MATCHERS, |b| FsxError::Unhandled { meta: b.metadata() });
