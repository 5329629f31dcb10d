//! CloudWatch Logs input types for the 24 operations.

use std::collections::HashMap;

use awsbind_core::MarshalError;
use awsbind_core::protocol::{Validate, require, require_items};
use serde::{Deserialize, Serialize};

use crate::types::{
    Distribution, ExportTaskStatusCode, InputLogEvent, MetricTransformation, OrderBy,
};

/// Most messages a single `TestMetricFilter` call accepts.
pub const MAX_TEST_MESSAGES: usize = 50;

/// Most events a single `PutLogEvents` call accepts.
pub const MAX_BATCH_EVENTS: usize = 10_000;

/// Largest `PutLogEvents` payload: message bytes plus
/// [`EVENT_OVERHEAD_BYTES`] per event.
pub const MAX_BATCH_BYTES: usize = 1_048_576;

/// Bytes counted against [`MAX_BATCH_BYTES`] for each event besides its
/// message.
pub const EVENT_OVERHEAD_BYTES: usize = 26;

/// Widest time span a `PutLogEvents` batch may cover, in milliseconds.
pub const MAX_BATCH_SPAN_MILLIS: i64 = 24 * 60 * 60 * 1000;

// ---------------------------------------------------------------------------
// Log groups
// ---------------------------------------------------------------------------

/// Input for the `CreateLogGroup` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLogGroupInput {
    pub log_group_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

impl Validate for CreateLogGroupInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("logGroupName", &self.log_group_name)
    }
}

/// Input for the `DeleteLogGroup` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteLogGroupInput {
    pub log_group_name: String,
}

impl Validate for DeleteLogGroupInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("logGroupName", &self.log_group_name)
    }
}

/// Input for the `DescribeLogGroups` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeLogGroupsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_group_name_prefix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

impl Validate for DescribeLogGroupsInput {
    fn validate(&self) -> Result<(), MarshalError> {
        validate_limit(self.limit)
    }
}

// ---------------------------------------------------------------------------
// Log streams
// ---------------------------------------------------------------------------

/// Input for the `CreateLogStream` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLogStreamInput {
    pub log_group_name: String,
    pub log_stream_name: String,
}

impl Validate for CreateLogStreamInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("logGroupName", &self.log_group_name)?;
        require("logStreamName", &self.log_stream_name)
    }
}

/// Input for the `DeleteLogStream` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteLogStreamInput {
    pub log_group_name: String,
    pub log_stream_name: String,
}

impl Validate for DeleteLogStreamInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("logGroupName", &self.log_group_name)?;
        require("logStreamName", &self.log_stream_name)
    }
}

/// Input for the `DescribeLogStreams` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeLogStreamsInput {
    pub log_group_name: String,

    /// Cannot be combined with ordering by `LastEventTime`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_stream_name_prefix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub descending: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

impl Validate for DescribeLogStreamsInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("logGroupName", &self.log_group_name)?;
        if self.log_stream_name_prefix.is_some() && self.order_by == Some(OrderBy::LastEventTime) {
            return Err(MarshalError::InvalidArgument(
                "logStreamNamePrefix cannot be used when ordering by LastEventTime".to_owned(),
            ));
        }
        validate_limit(self.limit)
    }
}

// ---------------------------------------------------------------------------
// Log events
// ---------------------------------------------------------------------------

/// Input for the `PutLogEvents` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutLogEventsInput {
    pub log_group_name: String,
    pub log_stream_name: String,

    /// Events in chronological order.
    pub log_events: Vec<InputLogEvent>,

    /// The `nextSequenceToken` of the previous upload; absent for a new
    /// stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_token: Option<String>,
}

impl Validate for PutLogEventsInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("logGroupName", &self.log_group_name)?;
        require("logStreamName", &self.log_stream_name)?;
        require_items("logEvents", &self.log_events)?;

        if self.log_events.len() > MAX_BATCH_EVENTS {
            return Err(MarshalError::InvalidArgument(format!(
                "logEvents holds {} events, the limit is {MAX_BATCH_EVENTS}",
                self.log_events.len()
            )));
        }

        let size: usize = self
            .log_events
            .iter()
            .map(|e| e.message.len() + EVENT_OVERHEAD_BYTES)
            .sum();
        if size > MAX_BATCH_BYTES {
            return Err(MarshalError::InvalidArgument(format!(
                "logEvents batch is {size} bytes, the limit is {MAX_BATCH_BYTES}"
            )));
        }

        if self
            .log_events
            .windows(2)
            .any(|pair| pair[1].timestamp < pair[0].timestamp)
        {
            return Err(MarshalError::InvalidArgument(
                "logEvents must be in chronological order".to_owned(),
            ));
        }

        // Sorted, so the span is last minus first.
        if let (Some(first), Some(last)) = (self.log_events.first(), self.log_events.last()) {
            if last
                .timestamp
                .checked_sub(first.timestamp)
                .is_none_or(|span| span > MAX_BATCH_SPAN_MILLIS)
            {
                return Err(MarshalError::InvalidArgument(
                    "logEvents cannot span more than 24 hours".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// Input for the `GetLogEvents` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetLogEventsInput {
    pub log_group_name: String,
    pub log_stream_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_from_head: Option<bool>,
}

impl Validate for GetLogEventsInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("logGroupName", &self.log_group_name)?;
        require("logStreamName", &self.log_stream_name)?;
        validate_time_range(self.start_time, self.end_time)?;
        validate_limit(self.limit)
    }
}

/// Input for the `FilterLogEvents` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterLogEventsInput {
    pub log_group_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_stream_names: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_stream_name_prefix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_pattern: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub interleaved: Option<bool>,
}

impl Validate for FilterLogEventsInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("logGroupName", &self.log_group_name)?;
        if self.log_stream_names.is_some() && self.log_stream_name_prefix.is_some() {
            return Err(MarshalError::InvalidArgument(
                "logStreamNames and logStreamNamePrefix are mutually exclusive".to_owned(),
            ));
        }
        validate_time_range(self.start_time, self.end_time)?;
        validate_limit(self.limit)
    }
}

// ---------------------------------------------------------------------------
// Retention and tags
// ---------------------------------------------------------------------------

/// Input for the `PutRetentionPolicy` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutRetentionPolicyInput {
    pub log_group_name: String,

    /// One of the retention periods the service accepts, e.g. 1, 7, 30, 365.
    pub retention_in_days: i32,
}

impl Validate for PutRetentionPolicyInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("logGroupName", &self.log_group_name)?;
        if self.retention_in_days <= 0 {
            return Err(MarshalError::InvalidArgument(
                "retentionInDays must be positive".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Input for the `DeleteRetentionPolicy` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRetentionPolicyInput {
    pub log_group_name: String,
}

impl Validate for DeleteRetentionPolicyInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("logGroupName", &self.log_group_name)
    }
}

/// Input for the `TagLogGroup` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagLogGroupInput {
    pub log_group_name: String,
    pub tags: HashMap<String, String>,
}

impl Validate for TagLogGroupInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("logGroupName", &self.log_group_name)?;
        if self.tags.is_empty() {
            return Err(MarshalError::InvalidArgument(
                "tags must contain at least one item".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Input for the `UntagLogGroup` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UntagLogGroupInput {
    pub log_group_name: String,

    /// Tag keys to remove.
    pub tags: Vec<String>,
}

impl Validate for UntagLogGroupInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("logGroupName", &self.log_group_name)?;
        require_items("tags", &self.tags)
    }
}

/// Input for the `ListTagsLogGroup` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTagsLogGroupInput {
    pub log_group_name: String,
}

impl Validate for ListTagsLogGroupInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("logGroupName", &self.log_group_name)
    }
}

// ---------------------------------------------------------------------------
// Export tasks
// ---------------------------------------------------------------------------

/// Input for the `CreateExportTask` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExportTaskInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_name: Option<String>,

    pub log_group_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_stream_name_prefix: Option<String>,

    /// Start of the exported range, inclusive, in epoch milliseconds.
    pub from: i64,

    /// End of the exported range, in epoch milliseconds.
    pub to: i64,

    /// S3 bucket name.
    pub destination: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_prefix: Option<String>,
}

impl Validate for CreateExportTaskInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("logGroupName", &self.log_group_name)?;
        require("destination", &self.destination)?;
        validate_time_range(Some(self.from), Some(self.to))
    }
}

/// Input for the `CancelExportTask` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelExportTaskInput {
    pub task_id: String,
}

impl Validate for CancelExportTaskInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("taskId", &self.task_id)
    }
}

/// Input for the `DescribeExportTasks` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeExportTasksInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<ExportTaskStatusCode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

impl Validate for DescribeExportTasksInput {
    fn validate(&self) -> Result<(), MarshalError> {
        validate_limit(self.limit)
    }
}

// ---------------------------------------------------------------------------
// Metric filters
// ---------------------------------------------------------------------------

/// Input for the `PutMetricFilter` operation. Creates the filter or replaces
/// the one with the same name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutMetricFilterInput {
    pub log_group_name: String,
    pub filter_name: String,

    /// An empty pattern matches every event.
    pub filter_pattern: String,

    pub metric_transformations: Vec<MetricTransformation>,
}

impl Validate for PutMetricFilterInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("logGroupName", &self.log_group_name)?;
        require("filterName", &self.filter_name)?;
        require_items("metricTransformations", &self.metric_transformations)?;
        for t in &self.metric_transformations {
            require("metricTransformations.metricName", &t.metric_name)?;
            require("metricTransformations.metricNamespace", &t.metric_namespace)?;
            require("metricTransformations.metricValue", &t.metric_value)?;
        }
        Ok(())
    }
}

/// Input for the `DeleteMetricFilter` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMetricFilterInput {
    pub log_group_name: String,
    pub filter_name: String,
}

impl Validate for DeleteMetricFilterInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("logGroupName", &self.log_group_name)?;
        require("filterName", &self.filter_name)
    }
}

/// Input for the `DescribeMetricFilters` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeMetricFiltersInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_group_name: Option<String>,

    /// Only valid together with `log_group_name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_name_prefix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,

    /// Set together with `metric_namespace`, or not at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_namespace: Option<String>,
}

impl Validate for DescribeMetricFiltersInput {
    fn validate(&self) -> Result<(), MarshalError> {
        if self.filter_name_prefix.is_some() && self.log_group_name.is_none() {
            return Err(MarshalError::InvalidArgument(
                "filterNamePrefix requires logGroupName".to_owned(),
            ));
        }
        if self.metric_name.is_some() != self.metric_namespace.is_some() {
            return Err(MarshalError::InvalidArgument(
                "metricName and metricNamespace must be given together".to_owned(),
            ));
        }
        validate_limit(self.limit)
    }
}

/// Input for the `TestMetricFilter` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestMetricFilterInput {
    pub filter_pattern: String,

    /// Sample messages, at most [`MAX_TEST_MESSAGES`].
    pub log_event_messages: Vec<String>,
}

impl Validate for TestMetricFilterInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require_items("logEventMessages", &self.log_event_messages)?;
        if self.log_event_messages.len() > MAX_TEST_MESSAGES {
            return Err(MarshalError::InvalidArgument(format!(
                "logEventMessages holds {} messages, the limit is {MAX_TEST_MESSAGES}",
                self.log_event_messages.len()
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Subscription filters
// ---------------------------------------------------------------------------

/// Input for the `PutSubscriptionFilter` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutSubscriptionFilterInput {
    pub log_group_name: String,

    /// Must name the existing filter when replacing one.
    pub filter_name: String,

    pub filter_pattern: String,

    /// Kinesis stream, Firehose delivery stream, Lambda function or logical
    /// destination.
    pub destination_arn: String,

    /// Role that lets CloudWatch Logs write to a Kinesis destination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution: Option<Distribution>,
}

impl Validate for PutSubscriptionFilterInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("logGroupName", &self.log_group_name)?;
        require("filterName", &self.filter_name)?;
        require("destinationArn", &self.destination_arn)
    }
}

/// Input for the `DeleteSubscriptionFilter` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSubscriptionFilterInput {
    pub log_group_name: String,
    pub filter_name: String,
}

impl Validate for DeleteSubscriptionFilterInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("logGroupName", &self.log_group_name)?;
        require("filterName", &self.filter_name)
    }
}

/// Input for the `DescribeSubscriptionFilters` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeSubscriptionFiltersInput {
    pub log_group_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_name_prefix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

impl Validate for DescribeSubscriptionFiltersInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("logGroupName", &self.log_group_name)?;
        validate_limit(self.limit)
    }
}

fn validate_limit(limit: Option<i32>) -> Result<(), MarshalError> {
    match limit {
        Some(n) if n < 1 => Err(MarshalError::InvalidArgument(format!(
            "limit must be at least 1, got {n}"
        ))),
        _ => Ok(()),
    }
}

fn validate_time_range(start: Option<i64>, end: Option<i64>) -> Result<(), MarshalError> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => Err(MarshalError::InvalidArgument(format!(
            "end time {end} is before start time {start}"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn put(events: Vec<InputLogEvent>) -> PutLogEventsInput {
        PutLogEventsInput {
            log_group_name: "app".to_owned(),
            log_stream_name: "web-1".to_owned(),
            log_events: events,
            sequence_token: None,
        }
    }

    #[test]
    fn test_should_marshal_put_log_events_in_camel_case() {
        let input = put(vec![InputLogEvent::new(1, "a"), InputLogEvent::new(2, "b")]);
        input.validate().unwrap();
        assert_eq!(
            serde_json::to_string(&input).unwrap(),
            r#"{"logGroupName":"app","logStreamName":"web-1","logEvents":[{"timestamp":1,"message":"a"},{"timestamp":2,"message":"b"}]}"#
        );
    }

    #[test]
    fn test_should_reject_unordered_events() {
        let input = put(vec![InputLogEvent::new(5, "late"), InputLogEvent::new(1, "early")]);
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("chronological"));
    }

    #[test]
    fn test_should_reject_batches_over_limits() {
        assert!(put(vec![]).validate().is_err());

        let too_many = vec![InputLogEvent::new(0, ""); MAX_BATCH_EVENTS + 1];
        assert!(put(too_many).validate().is_err());

        let big = "x".repeat(MAX_BATCH_BYTES);
        assert!(put(vec![InputLogEvent::new(0, big)]).validate().is_err());

        let wide = vec![
            InputLogEvent::new(0, "a"),
            InputLogEvent::new(MAX_BATCH_SPAN_MILLIS + 1, "b"),
        ];
        assert!(put(wide).validate().is_err());
    }

    #[test]
    fn test_should_reject_span_that_overflows() {
        let input = put(vec![
            InputLogEvent::new(i64::MIN, "a"),
            InputLogEvent::new(1, "b"),
        ]);
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("24 hours"));

        let edge = put(vec![
            InputLogEvent::new(0, "a"),
            InputLogEvent::new(MAX_BATCH_SPAN_MILLIS, "b"),
        ]);
        edge.validate().unwrap();
    }

    #[test]
    fn test_should_round_trip_put_log_events() {
        let input = PutLogEventsInput {
            sequence_token: Some("49590302963451322853".to_owned()),
            ..put(vec![
                InputLogEvent::new(1_574_000_000_000, "GET /health 200"),
                InputLogEvent::new(1_574_000_000_500, "GET /index.html 304"),
            ])
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["sequenceToken"], "49590302963451322853");
        let decoded: PutLogEventsInput = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn test_should_keep_empty_and_absent_tags_distinct() {
        let absent = CreateLogGroupInput {
            log_group_name: "g".to_owned(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&absent).unwrap(),
            r#"{"logGroupName":"g"}"#
        );

        let empty = CreateLogGroupInput {
            log_group_name: "g".to_owned(),
            tags: Some(HashMap::new()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&empty).unwrap(),
            r#"{"logGroupName":"g","tags":{}}"#
        );
    }

    #[test]
    fn test_should_reject_prefix_with_last_event_time_order() {
        let input = DescribeLogStreamsInput {
            log_group_name: "g".to_owned(),
            log_stream_name_prefix: Some("web".to_owned()),
            order_by: Some(OrderBy::LastEventTime),
            ..Default::default()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_should_reject_inverted_export_range() {
        let input = CreateExportTaskInput {
            log_group_name: "g".to_owned(),
            from: 10,
            to: 5,
            destination: "bucket".to_owned(),
            ..Default::default()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_should_marshal_metric_filter() {
        let input = PutMetricFilterInput {
            log_group_name: "app".to_owned(),
            filter_name: "errors".to_owned(),
            filter_pattern: String::new(),
            metric_transformations: vec![MetricTransformation {
                default_value: Some(0.0),
                ..MetricTransformation::new("Errors", "App", "1")
            }],
        };
        input.validate().unwrap();
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            serde_json::json!({
                "logGroupName": "app",
                "filterName": "errors",
                "filterPattern": "",
                "metricTransformations": [{
                    "metricName": "Errors",
                    "metricNamespace": "App",
                    "metricValue": "1",
                    "defaultValue": 0.0
                }]
            })
        );

        let missing = PutMetricFilterInput {
            metric_transformations: vec![MetricTransformation::new("Errors", "", "1")],
            ..input
        };
        let err = missing.validate().unwrap_err();
        assert!(err.to_string().contains("metricNamespace"));
    }

    #[test]
    fn test_should_pair_metric_name_and_namespace() {
        let input = DescribeMetricFiltersInput {
            metric_name: Some("Errors".to_owned()),
            ..Default::default()
        };
        assert!(input.validate().is_err());

        let input = DescribeMetricFiltersInput {
            filter_name_prefix: Some("err".to_owned()),
            ..Default::default()
        };
        assert!(input.validate().is_err());

        let input = DescribeMetricFiltersInput {
            metric_name: Some("Errors".to_owned()),
            metric_namespace: Some("App".to_owned()),
            ..Default::default()
        };
        input.validate().unwrap();
    }

    #[test]
    fn test_should_limit_test_messages() {
        let input = TestMetricFilterInput {
            filter_pattern: "ERROR".to_owned(),
            log_event_messages: vec!["ERROR x".to_owned(); MAX_TEST_MESSAGES + 1],
        };
        assert!(input.validate().is_err());
        assert!(TestMetricFilterInput::default().validate().is_err());
    }

    #[test]
    fn test_should_marshal_subscription_filter() {
        let input = PutSubscriptionFilterInput {
            log_group_name: "app".to_owned(),
            filter_name: "ship".to_owned(),
            filter_pattern: "[ip, user, ...]".to_owned(),
            destination_arn: "arn:aws:kinesis:us-east-1:123456789012:stream/logs".to_owned(),
            role_arn: None,
            distribution: Some(Distribution::ByLogStream),
        };
        input.validate().unwrap();
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["distribution"], "ByLogStream");
        assert!(value.get("roleArn").is_none());
    }
}
