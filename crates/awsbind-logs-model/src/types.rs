//! CloudWatch Logs shared data types.
//!
//! Logs uses `camelCase` member names and models every timestamp as
//! milliseconds since the Unix epoch.

use std::collections::HashMap;

use awsbind_core::string_enum;
use serde::{Deserialize, Serialize};

string_enum! {
    /// Sort order for `DescribeLogStreams`.
    pub enum OrderBy {
        LogStreamName => "LogStreamName",
        LastEventTime => "LastEventTime",
    }
}

string_enum! {
    /// Export task state.
    pub enum ExportTaskStatusCode {
        Cancelled => "CANCELLED",
        Completed => "COMPLETED",
        Failed => "FAILED",
        Pending => "PENDING",
        PendingCancel => "PENDING_CANCEL",
        Running => "RUNNING",
    }
}

string_enum! {
    /// How a subscription filter spreads events over a Kinesis stream's
    /// shards.
    pub enum Distribution {
        Random => "Random",
        ByLogStream => "ByLogStream",
    }
}

/// A log group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_group_name: Option<String>,
    /// Milliseconds since the epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_in_days: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_filter_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
}

/// A log stream within a log group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogStream {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_stream_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_event_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_event_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_ingestion_time: Option<i64>,
    /// Token to pass to the next `PutLogEvents` call on this stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_sequence_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_bytes: Option<i64>,
}

/// A log event to upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputLogEvent {
    /// Milliseconds since the epoch.
    pub timestamp: i64,
    pub message: String,
}

impl InputLogEvent {
    /// Create an event.
    pub fn new(timestamp: i64, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            message: message.into(),
        }
    }
}

/// A log event returned by `GetLogEvents`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputLogEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingestion_time: Option<i64>,
}

/// A log event matched by `FilterLogEvents`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilteredLogEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_stream_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingestion_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
}

/// Whether a stream was fully searched by `FilterLogEvents`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchedLogStream {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_stream_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub searched_completely: Option<bool>,
}

/// Indexes of events the service refused in a `PutLogEvents` batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedLogEventsInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub too_new_log_event_start_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub too_old_log_event_end_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired_log_event_end_index: Option<i32>,
}

/// State of an export task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportTaskStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ExportTaskStatusCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// When an export task was created and completed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportTaskExecutionInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<i64>,
}

/// An export of log data to S3.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<i64>,
    /// Destination S3 bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_prefix: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub status: Option<ExportTaskStatus>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub execution_info: Option<ExportTaskExecutionInfo>,
}

// ---------------------------------------------------------------------------
// Metric and subscription filters
// ---------------------------------------------------------------------------

/// How matched events become a CloudWatch metric.
///
/// Members missing from a response decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetricTransformation {
    pub metric_name: String,
    pub metric_namespace: String,
    /// Value published per match: a number or a `$.field` selector.
    pub metric_value: String,
    /// Published when no event matched during a period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<f64>,
}

impl MetricTransformation {
    /// A transformation without a default value.
    pub fn new(
        metric_name: impl Into<String>,
        metric_namespace: impl Into<String>,
        metric_value: impl Into<String>,
    ) -> Self {
        Self {
            metric_name: metric_name.into(),
            metric_namespace: metric_namespace.into(),
            metric_value: metric_value.into(),
            default_value: None,
        }
    }
}

/// A metric filter on a log group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_pattern: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub metric_transformations: Option<Vec<MetricTransformation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_group_name: Option<String>,
}

/// An event message a filter pattern matched in `TestMetricFilter`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricFilterMatchRecord {
    /// Position of the message in the request, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_message: Option<String>,
    /// Values captured by the pattern, keyed by `$`-prefixed token.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub extracted_values: Option<HashMap<String, String>>,
}

/// A subscription filter streaming a log group to a destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution: Option<Distribution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_decode_log_stream_in_camel_case() {
        let stream: LogStream = serde_json::from_str(
            r#"{"logStreamName":"app","creationTime":1577836800123,"uploadSequenceToken":"4963","newMember":true}"#,
        )
        .unwrap();
        assert_eq!(stream.log_stream_name.as_deref(), Some("app"));
        assert_eq!(stream.creation_time, Some(1_577_836_800_123));
        assert_eq!(stream.upload_sequence_token.as_deref(), Some("4963"));
    }

    #[test]
    fn test_should_decode_export_task_status() {
        let task: ExportTask = serde_json::from_str(
            r#"{"taskId":"t-1","status":{"code":"PENDING_CANCEL"},"executionInfo":"n/a"}"#,
        )
        .unwrap();
        assert_eq!(
            task.status.unwrap().code,
            Some(ExportTaskStatusCode::PendingCancel)
        );
        assert!(task.execution_info.is_none());
    }

    #[test]
    fn test_should_encode_input_event() {
        let event = InputLogEvent::new(1000, "hello");
        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"{"timestamp":1000,"message":"hello"}"#
        );
    }

    #[test]
    fn test_should_decode_metric_filter_with_partial_transformation() {
        let filter: MetricFilter = serde_json::from_str(
            r#"{"filterName":"errors","filterPattern":"ERROR",
                "metricTransformations":[{"metricName":"Errors","metricValue":"1","defaultValue":0.0}],
                "creationTime":1577836800000}"#,
        )
        .unwrap();
        let transformation = &filter.metric_transformations.unwrap()[0];
        assert_eq!(transformation.metric_name, "Errors");
        assert_eq!(transformation.metric_namespace, "");
        assert_eq!(transformation.default_value, Some(0.0));
    }

    #[test]
    fn test_should_keep_unknown_distribution() {
        let filter: SubscriptionFilter =
            serde_json::from_str(r#"{"filterName":"ship","distribution":"ByShard"}"#).unwrap();
        assert_eq!(
            filter.distribution,
            Some(Distribution::Unknown("ByShard".to_owned()))
        );
    }
}
