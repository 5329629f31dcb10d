//! CloudWatch Logs output types.
//!
//! Operations that return no members (`CreateLogGroup`, `PutRetentionPolicy`,
//! `CancelExportTask`, ...) have no output type; their client methods return
//! `()`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{
    ExportTask, FilteredLogEvent, LogGroup, LogStream, MetricFilter, MetricFilterMatchRecord,
    OutputLogEvent, RejectedLogEventsInfo, SearchedLogStream, SubscriptionFilter,
};

/// Output of the `DescribeLogGroups` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeLogGroupsOutput {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub log_groups: Option<Vec<LogGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output of the `DescribeLogStreams` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeLogStreamsOutput {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub log_streams: Option<Vec<LogStream>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output of the `PutLogEvents` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutLogEventsOutput {
    /// Sequence token for the next upload to the same stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_sequence_token: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub rejected_log_events_info: Option<RejectedLogEventsInfo>,
}

/// Output of the `GetLogEvents` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetLogEventsOutput {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub events: Option<Vec<OutputLogEvent>>,
    /// Returned even at the end of the stream; the end is reached when it
    /// equals the token that was sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_forward_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_backward_token: Option<String>,
}

/// Output of the `FilterLogEvents` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterLogEventsOutput {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub events: Option<Vec<FilteredLogEvent>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub searched_log_streams: Option<Vec<SearchedLogStream>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output of the `ListTagsLogGroup` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTagsLogGroupOutput {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub tags: Option<HashMap<String, String>>,
}

/// Output of the `CreateExportTask` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExportTaskOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

/// Output of the `DescribeExportTasks` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeExportTasksOutput {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub export_tasks: Option<Vec<ExportTask>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output of the `DescribeMetricFilters` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeMetricFiltersOutput {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub metric_filters: Option<Vec<MetricFilter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output of the `TestMetricFilter` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestMetricFilterOutput {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub matches: Option<Vec<MetricFilterMatchRecord>>,
}

/// Output of the `DescribeSubscriptionFilters` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeSubscriptionFiltersOutput {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub subscription_filters: Option<Vec<SubscriptionFilter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use awsbind_core::json::from_body;

    use super::*;

    #[test]
    fn test_should_decode_put_log_events_output() {
        let output: PutLogEventsOutput = from_body(
            br#"{"nextSequenceToken":"4963","rejectedLogEventsInfo":{"tooOldLogEventEndIndex":2}}"#,
        )
        .unwrap();
        assert_eq!(output.next_sequence_token.as_deref(), Some("4963"));
        assert_eq!(
            output.rejected_log_events_info.unwrap().too_old_log_event_end_index,
            Some(2)
        );
    }

    #[test]
    fn test_should_treat_non_object_tags_as_absent() {
        let output: ListTagsLogGroupOutput = from_body(br#"{"tags":["a","b"]}"#).unwrap();
        assert!(output.tags.is_none());

        let output: ListTagsLogGroupOutput = from_body(br#"{"tags":{"team":"core"}}"#).unwrap();
        assert_eq!(output.tags.unwrap()["team"], "core");
    }

    #[test]
    fn test_should_decode_filter_log_events_output() {
        let output: FilterLogEventsOutput = from_body(
            br#"{"events":[{"logStreamName":"web-1","timestamp":5,"message":"GET /","eventId":"e1"}],
                 "searchedLogStreams":[{"logStreamName":"web-1","searchedCompletely":true}]}"#,
        )
        .unwrap();
        let events = output.events.unwrap();
        assert_eq!(events[0].event_id.as_deref(), Some("e1"));
        assert_eq!(
            output.searched_log_streams.unwrap()[0].searched_completely,
            Some(true)
        );
        assert!(output.next_token.is_none());
    }

    #[test]
    fn test_should_decode_test_metric_filter_matches() {
        let output: TestMetricFilterOutput = from_body(
            br#"{"matches":[{"eventNumber":1,"eventMessage":"ERROR 500","extractedValues":{"$code":"500"}},
                            {"eventNumber":3,"extractedValues":[]}]}"#,
        )
        .unwrap();
        let matches = output.matches.unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(
            matches[0].extracted_values.as_ref().unwrap()["$code"],
            "500"
        );
        assert!(matches[1].extracted_values.is_none());
    }
}
