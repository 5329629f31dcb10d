//! The CloudWatch Logs client.

use awsbind_core::protocol::{Validate, aws_json_request};
use awsbind_core::{BuildError, ClientConfig, ClientError, ClientRuntime, WireRequest};
use awsbind_logs_model::input::{
    CancelExportTaskInput, CreateExportTaskInput, CreateLogGroupInput, CreateLogStreamInput,
    DeleteLogGroupInput, DeleteLogStreamInput, DeleteMetricFilterInput,
    DeleteRetentionPolicyInput, DeleteSubscriptionFilterInput, DescribeExportTasksInput,
    DescribeLogGroupsInput, DescribeLogStreamsInput, DescribeMetricFiltersInput,
    DescribeSubscriptionFiltersInput, FilterLogEventsInput, GetLogEventsInput,
    ListTagsLogGroupInput, PutLogEventsInput, PutMetricFilterInput, PutRetentionPolicyInput,
    PutSubscriptionFilterInput, TagLogGroupInput, TestMetricFilterInput, UntagLogGroupInput,
};
use awsbind_logs_model::output::{
    CreateExportTaskOutput, DescribeExportTasksOutput, DescribeLogGroupsOutput,
    DescribeLogStreamsOutput, DescribeMetricFiltersOutput, DescribeSubscriptionFiltersOutput,
    FilterLogEventsOutput, GetLogEventsOutput, ListTagsLogGroupOutput, PutLogEventsOutput,
    TestMetricFilterOutput,
};
use awsbind_logs_model::types::LogGroup;
use awsbind_logs_model::{LOGS_ERRORS, LOGS_METADATA, LogsError, LogsOperation};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Result of a CloudWatch Logs call.
pub type LogsResult<T> = Result<T, ClientError<LogsError>>;

/// Blocking CloudWatch Logs client.
#[derive(Debug, Clone)]
pub struct LogsClient {
    runtime: ClientRuntime,
}

impl LogsClient {
    /// Build a client from `config`.
    pub fn new(config: &ClientConfig) -> Result<Self, BuildError> {
        Ok(Self {
            runtime: ClientRuntime::new(&LOGS_METADATA, config)?,
        })
    }

    /// The runtime this client sends requests through.
    #[must_use]
    pub fn runtime(&self) -> &ClientRuntime {
        &self.runtime
    }

    // -- Log groups --------------------------------------------------------

    /// Create a log group.
    pub fn create_log_group(&self, input: &CreateLogGroupInput) -> LogsResult<()> {
        self.call_unit(LogsOperation::CreateLogGroup, input)
    }

    /// Delete a log group and every stream in it.
    pub fn delete_log_group(&self, input: &DeleteLogGroupInput) -> LogsResult<()> {
        self.call_unit(LogsOperation::DeleteLogGroup, input)
    }

    /// List log groups, one page at a time.
    pub fn describe_log_groups(
        &self,
        input: &DescribeLogGroupsInput,
    ) -> LogsResult<DescribeLogGroupsOutput> {
        self.call(LogsOperation::DescribeLogGroups, input)
    }

    /// List every log group matching `prefix`, following `nextToken`.
    pub fn describe_all_log_groups(&self, prefix: Option<&str>) -> LogsResult<Vec<LogGroup>> {
        let mut input = DescribeLogGroupsInput {
            log_group_name_prefix: prefix.map(ToOwned::to_owned),
            ..Default::default()
        };
        let mut groups = Vec::new();
        loop {
            let page = self.describe_log_groups(&input)?;
            groups.extend(page.log_groups.unwrap_or_default());
            match page.next_token {
                // An echoed token would repeat the same page forever.
                Some(token) if !token.is_empty() && input.next_token.as_ref() != Some(&token) => {
                    input.next_token = Some(token);
                }
                _ => break,
            }
        }
        debug!(count = groups.len(), "described all log groups");
        Ok(groups)
    }

    // -- Log streams -------------------------------------------------------

    /// Create a log stream in an existing group.
    pub fn create_log_stream(&self, input: &CreateLogStreamInput) -> LogsResult<()> {
        self.call_unit(LogsOperation::CreateLogStream, input)
    }

    /// Delete a log stream.
    pub fn delete_log_stream(&self, input: &DeleteLogStreamInput) -> LogsResult<()> {
        self.call_unit(LogsOperation::DeleteLogStream, input)
    }

    /// List the streams of a group.
    pub fn describe_log_streams(
        &self,
        input: &DescribeLogStreamsInput,
    ) -> LogsResult<DescribeLogStreamsOutput> {
        self.call(LogsOperation::DescribeLogStreams, input)
    }

    // -- Log events --------------------------------------------------------

    /// Upload a batch of events.
    ///
    /// A stale `sequence_token` fails with
    /// [`LogsError::InvalidSequenceTokenException`]; the error carries the
    /// token the service expected. The call is not retried.
    pub fn put_log_events(&self, input: &PutLogEventsInput) -> LogsResult<PutLogEventsOutput> {
        self.call(LogsOperation::PutLogEvents, input)
    }

    /// Read events from a single stream.
    pub fn get_log_events(&self, input: &GetLogEventsInput) -> LogsResult<GetLogEventsOutput> {
        self.call(LogsOperation::GetLogEvents, input)
    }

    /// Search events across the streams of a group.
    pub fn filter_log_events(
        &self,
        input: &FilterLogEventsInput,
    ) -> LogsResult<FilterLogEventsOutput> {
        self.call(LogsOperation::FilterLogEvents, input)
    }

    // -- Retention and tags ------------------------------------------------

    /// Set how many days events in a group are kept.
    pub fn put_retention_policy(&self, input: &PutRetentionPolicyInput) -> LogsResult<()> {
        self.call_unit(LogsOperation::PutRetentionPolicy, input)
    }

    /// Keep events in a group forever.
    pub fn delete_retention_policy(&self, input: &DeleteRetentionPolicyInput) -> LogsResult<()> {
        self.call_unit(LogsOperation::DeleteRetentionPolicy, input)
    }

    /// Add or overwrite tags on a log group.
    pub fn tag_log_group(&self, input: &TagLogGroupInput) -> LogsResult<()> {
        self.call_unit(LogsOperation::TagLogGroup, input)
    }

    /// Remove tags from a log group by key.
    pub fn untag_log_group(&self, input: &UntagLogGroupInput) -> LogsResult<()> {
        self.call_unit(LogsOperation::UntagLogGroup, input)
    }

    /// List the tags on a log group.
    pub fn list_tags_log_group(
        &self,
        input: &ListTagsLogGroupInput,
    ) -> LogsResult<ListTagsLogGroupOutput> {
        self.call(LogsOperation::ListTagsLogGroup, input)
    }

    // -- Export tasks ------------------------------------------------------

    /// Start exporting a group's events to S3.
    pub fn create_export_task(
        &self,
        input: &CreateExportTaskInput,
    ) -> LogsResult<CreateExportTaskOutput> {
        self.call(LogsOperation::CreateExportTask, input)
    }

    /// Cancel a pending or running export task.
    pub fn cancel_export_task(&self, input: &CancelExportTaskInput) -> LogsResult<()> {
        self.call_unit(LogsOperation::CancelExportTask, input)
    }

    /// List export tasks, optionally filtered by id or status.
    pub fn describe_export_tasks(
        &self,
        input: &DescribeExportTasksInput,
    ) -> LogsResult<DescribeExportTasksOutput> {
        self.call(LogsOperation::DescribeExportTasks, input)
    }

    // -- Metric filters ----------------------------------------------------

    /// Create or replace a metric filter on a log group.
    pub fn put_metric_filter(&self, input: &PutMetricFilterInput) -> LogsResult<()> {
        self.call_unit(LogsOperation::PutMetricFilter, input)
    }

    /// Delete a metric filter.
    pub fn delete_metric_filter(&self, input: &DeleteMetricFilterInput) -> LogsResult<()> {
        self.call_unit(LogsOperation::DeleteMetricFilter, input)
    }

    /// List metric filters by group, name prefix or metric, one page at a
    /// time.
    pub fn describe_metric_filters(
        &self,
        input: &DescribeMetricFiltersInput,
    ) -> LogsResult<DescribeMetricFiltersOutput> {
        self.call(LogsOperation::DescribeMetricFilters, input)
    }

    /// Run a filter pattern over sample messages without creating a filter.
    pub fn test_metric_filter(
        &self,
        input: &TestMetricFilterInput,
    ) -> LogsResult<TestMetricFilterOutput> {
        self.call(LogsOperation::TestMetricFilter, input)
    }

    // -- Subscription filters ----------------------------------------------

    /// Create or replace the subscription filter that streams a group's
    /// events to a destination.
    pub fn put_subscription_filter(&self, input: &PutSubscriptionFilterInput) -> LogsResult<()> {
        self.call_unit(LogsOperation::PutSubscriptionFilter, input)
    }

    /// Delete a subscription filter.
    pub fn delete_subscription_filter(
        &self,
        input: &DeleteSubscriptionFilterInput,
    ) -> LogsResult<()> {
        self.call_unit(LogsOperation::DeleteSubscriptionFilter, input)
    }

    /// List a group's subscription filters, sorted by name.
    pub fn describe_subscription_filters(
        &self,
        input: &DescribeSubscriptionFiltersInput,
    ) -> LogsResult<DescribeSubscriptionFiltersOutput> {
        self.call(LogsOperation::DescribeSubscriptionFilters, input)
    }

    fn call<I, O>(&self, operation: LogsOperation, input: &I) -> LogsResult<O>
    where
        I: Serialize + Validate,
        O: DeserializeOwned + Default,
    {
        let request = marshal(operation, input)?;
        self.runtime.invoke(operation.as_str(), request, &LOGS_ERRORS)
    }

    fn call_unit<I>(&self, operation: LogsOperation, input: &I) -> LogsResult<()>
    where
        I: Serialize + Validate,
    {
        let request = marshal(operation, input)?;
        self.runtime
            .invoke_unit(operation.as_str(), request, &LOGS_ERRORS)
    }
}

fn marshal<I>(operation: LogsOperation, input: &I) -> LogsResult<WireRequest>
where
    I: Serialize + Validate,
{
    let name = operation.as_str();
    input
        .validate()
        .map_err(|e| ClientError::marshal(name, e))?;
    aws_json_request(&LOGS_METADATA, name, input).map_err(|e| ClientError::marshal(name, e))
}
