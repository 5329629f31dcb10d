//! CloudWatch Logs integration tests.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use awsbind_core::test_util::MockTransport;
    use awsbind_logs::LogsClient;
    use awsbind_logs::model::LogsError;
    use awsbind_logs::model::input::{
        CreateLogGroupInput, CreateLogStreamInput, DeleteLogGroupInput, GetLogEventsInput,
        PutLogEventsInput,
    };
    use awsbind_logs::model::types::InputLogEvent;

    use crate::{live_config, mock_config, test_resource_name};

    fn put_input(token: Option<&str>) -> PutLogEventsInput {
        PutLogEventsInput {
            log_group_name: "/app/web".to_owned(),
            log_stream_name: "web-1".to_owned(),
            log_events: vec![InputLogEvent::new(1_000, "first"), InputLogEvent::new(2_000, "second")],
            sequence_token: token.map(ToOwned::to_owned),
        }
    }

    #[test]
    fn test_should_retry_with_expected_sequence_token() -> anyhow::Result<()> {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(
            400,
            r#"{"__type":"InvalidSequenceTokenException","message":"stale","expectedSequenceToken":"49"}"#,
        );
        mock.push_json(200, r#"{"nextSequenceToken":"50"}"#);
        let client = LogsClient::new(&mock_config(&mock))?;

        let err = client.put_log_events(&put_input(Some("48"))).unwrap_err();
        let service = err.into_service_error().expect("service error");
        assert!(matches!(service, LogsError::InvalidSequenceTokenException { .. }));
        let expected = service.expected_sequence_token().expect("token");

        let output = client.put_log_events(&put_input(Some(expected)))?;
        assert_eq!(output.next_sequence_token.as_deref(), Some("50"));

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        let body = requests[1].json_body().expect("json body");
        assert_eq!(body["sequenceToken"], "49");
        assert_eq!(body["logEvents"][1]["message"], "second");
        Ok(())
    }

    #[test]
    fn test_should_send_camel_case_members_for_void_operation() -> anyhow::Result<()> {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(200, "");
        LogsClient::new(&mock_config(&mock))?.create_log_stream(&CreateLogStreamInput {
            log_group_name: "/app/web".to_owned(),
            log_stream_name: "web-1".to_owned(),
        })?;

        let request = mock.last_request().expect("request was sent");
        assert_eq!(request.header("x-amz-target"), Some("Logs_20140328.CreateLogStream"));
        assert_eq!(
            request.json_body(),
            Some(serde_json::json!({"logGroupName": "/app/web", "logStreamName": "web-1"}))
        );
        Ok(())
    }

    #[test]
    #[ignore = "requires running server"]
    fn test_should_round_trip_events_on_live_server() -> anyhow::Result<()> {
        let client = LogsClient::new(&live_config())?;
        let group = format!("/awsbind/{}", test_resource_name("it"));

        client.create_log_group(&CreateLogGroupInput {
            log_group_name: group.clone(),
            ..Default::default()
        })?;
        client.create_log_stream(&CreateLogStreamInput {
            log_group_name: group.clone(),
            log_stream_name: "s1".to_owned(),
        })?;

        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_millis();
        let now = i64::try_from(now)?;
        client.put_log_events(&PutLogEventsInput {
            log_group_name: group.clone(),
            log_stream_name: "s1".to_owned(),
            log_events: vec![InputLogEvent::new(now, "hello from awsbind")],
            sequence_token: None,
        })?;

        let events = client.get_log_events(&GetLogEventsInput {
            log_group_name: group.clone(),
            log_stream_name: "s1".to_owned(),
            start_from_head: Some(true),
            ..Default::default()
        })?;
        let messages: Vec<_> = events
            .events
            .unwrap_or_default()
            .into_iter()
            .filter_map(|e| e.message)
            .collect();
        assert_eq!(messages, ["hello from awsbind"]);

        client.delete_log_group(&DeleteLogGroupInput {
            log_group_name: group,
        })?;
        Ok(())
    }
}
