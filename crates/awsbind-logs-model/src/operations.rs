//! CloudWatch Logs operation enum and service metadata.

use std::fmt;

use awsbind_core::protocol::{Protocol, ServiceMetadata};

/// CloudWatch Logs speaks awsJson 1.1 under the `Logs_20140328` target
/// prefix.
pub static LOGS_METADATA: ServiceMetadata = ServiceMetadata {
    service_name: "CloudWatch Logs",
    endpoint_prefix: "logs",
    signing_name: "logs",
    protocol: Protocol::AwsJson {
        version: "1.1",
        target_prefix: "Logs_20140328",
    },
};

/// All supported CloudWatch Logs operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogsOperation {
    // Log groups
    CreateLogGroup,
    DeleteLogGroup,
    DescribeLogGroups,

    // Log streams
    CreateLogStream,
    DeleteLogStream,
    DescribeLogStreams,

    // Log events
    PutLogEvents,
    GetLogEvents,
    FilterLogEvents,

    // Retention
    PutRetentionPolicy,
    DeleteRetentionPolicy,

    // Tags
    TagLogGroup,
    UntagLogGroup,
    ListTagsLogGroup,

    // Export tasks
    CreateExportTask,
    CancelExportTask,
    DescribeExportTasks,

    // Metric filters
    PutMetricFilter,
    DeleteMetricFilter,
    DescribeMetricFilters,
    TestMetricFilter,

    // Subscription filters
    PutSubscriptionFilter,
    DeleteSubscriptionFilter,
    DescribeSubscriptionFilters,
}

impl LogsOperation {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 24] = [
        Self::CreateLogGroup,
        Self::DeleteLogGroup,
        Self::DescribeLogGroups,
        Self::CreateLogStream,
        Self::DeleteLogStream,
        Self::DescribeLogStreams,
        Self::PutLogEvents,
        Self::GetLogEvents,
        Self::FilterLogEvents,
        Self::PutRetentionPolicy,
        Self::DeleteRetentionPolicy,
        Self::TagLogGroup,
        Self::UntagLogGroup,
        Self::ListTagsLogGroup,
        Self::CreateExportTask,
        Self::CancelExportTask,
        Self::DescribeExportTasks,
        Self::PutMetricFilter,
        Self::DeleteMetricFilter,
        Self::DescribeMetricFilters,
        Self::TestMetricFilter,
        Self::PutSubscriptionFilter,
        Self::DeleteSubscriptionFilter,
        Self::DescribeSubscriptionFilters,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateLogGroup => "CreateLogGroup",
            Self::DeleteLogGroup => "DeleteLogGroup",
            Self::DescribeLogGroups => "DescribeLogGroups",
            Self::CreateLogStream => "CreateLogStream",
            Self::DeleteLogStream => "DeleteLogStream",
            Self::DescribeLogStreams => "DescribeLogStreams",
            Self::PutLogEvents => "PutLogEvents",
            Self::GetLogEvents => "GetLogEvents",
            Self::FilterLogEvents => "FilterLogEvents",
            Self::PutRetentionPolicy => "PutRetentionPolicy",
            Self::DeleteRetentionPolicy => "DeleteRetentionPolicy",
            Self::TagLogGroup => "TagLogGroup",
            Self::UntagLogGroup => "UntagLogGroup",
            Self::ListTagsLogGroup => "ListTagsLogGroup",
            Self::CreateExportTask => "CreateExportTask",
            Self::CancelExportTask => "CancelExportTask",
            Self::DescribeExportTasks => "DescribeExportTasks",
            Self::PutMetricFilter => "PutMetricFilter",
            Self::DeleteMetricFilter => "DeleteMetricFilter",
            Self::DescribeMetricFilters => "DescribeMetricFilters",
            Self::TestMetricFilter => "TestMetricFilter",
            Self::PutSubscriptionFilter => "PutSubscriptionFilter",
            Self::DeleteSubscriptionFilter => "DeleteSubscriptionFilter",
            Self::DescribeSubscriptionFilters => "DescribeSubscriptionFilters",
        }
    }

    /// Parse an operation name string into a `LogsOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == name)
    }
}

impl fmt::Display for LogsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
