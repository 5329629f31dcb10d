//! Amazon FSx operation enum and service metadata.

use std::fmt;

use awsbind_core::protocol::{Protocol, ServiceMetadata};

/// Amazon FSx speaks awsJson 1.1 under the `AWSSimbaAPIService_v20180301`
/// target prefix.
pub static FSX_METADATA: ServiceMetadata = ServiceMetadata {
    service_name: "FSx",
    endpoint_prefix: "fsx",
    signing_name: "fsx",
    protocol: Protocol::AwsJson {
        version: "1.1",
        target_prefix: "AWSSimbaAPIService_v20180301",
    },
};

/// All supported Amazon FSx operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FsxOperation {
    // File systems
    CreateFileSystem,
    CreateFileSystemFromBackup,
    DeleteFileSystem,
    DescribeFileSystems,
    UpdateFileSystem,

    // Backups
    CreateBackup,
    DeleteBackup,
    DescribeBackups,

    // Data repository tasks
    CreateDataRepositoryTask,
    CancelDataRepositoryTask,
    DescribeDataRepositoryTasks,

    // Tagging
    ListTagsForResource,
    TagResource,
    UntagResource,
}

impl FsxOperation {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 14] = [
        Self::CreateFileSystem,
        Self::CreateFileSystemFromBackup,
        Self::DeleteFileSystem,
        Self::DescribeFileSystems,
        Self::UpdateFileSystem,
        Self::CreateBackup,
        Self::DeleteBackup,
        Self::DescribeBackups,
        Self::CreateDataRepositoryTask,
        Self::CancelDataRepositoryTask,
        Self::DescribeDataRepositoryTasks,
        Self::ListTagsForResource,
        Self::TagResource,
        Self::UntagResource,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateFileSystem => "CreateFileSystem",
            Self::CreateFileSystemFromBackup => "CreateFileSystemFromBackup",
            Self::DeleteFileSystem => "DeleteFileSystem",
            Self::DescribeFileSystems => "DescribeFileSystems",
            Self::UpdateFileSystem => "UpdateFileSystem",
            Self::CreateBackup => "CreateBackup",
            Self::DeleteBackup => "DeleteBackup",
            Self::DescribeBackups => "DescribeBackups",
            Self::CreateDataRepositoryTask => "CreateDataRepositoryTask",
            Self::CancelDataRepositoryTask => "CancelDataRepositoryTask",
            Self::DescribeDataRepositoryTasks => "DescribeDataRepositoryTasks",
            Self::ListTagsForResource => "ListTagsForResource",
            Self::TagResource => "TagResource",
            Self::UntagResource => "UntagResource",
        }
    }

    /// Parse an operation name string into an `FsxOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == name)
    }
}

impl fmt::Display for FsxOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_round_trip_operation_names() {
        for op in FsxOperation::ALL {
            assert_eq!(FsxOperation::from_name(op.as_str()), Some(op));
        }
        assert_eq!(FsxOperation::from_name("DescribeVolumes"), None);
    }

    #[test]
    fn test_should_use_json_1_1_content_type() {
        assert_eq!(FSX_METADATA.content_type(), "application/x-amz-json-1.1");
    }
}
