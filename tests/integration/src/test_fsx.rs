//! Amazon FSx integration tests.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use awsbind_core::ClientError;
    use awsbind_core::test_util::MockTransport;
    use awsbind_fsx::FsxClient;
    use awsbind_fsx::model::FsxError;
    use awsbind_fsx::model::input::{
        DeleteFileSystemInput, DescribeDataRepositoryTasksInput, DescribeFileSystemsInput,
    };
    use awsbind_fsx::model::types::FileSystemLifecycle;

    use crate::{live_config, mock_config};

    fn delete_input(id: &str) -> DeleteFileSystemInput {
        DeleteFileSystemInput {
            file_system_id: id.to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn test_should_omit_absent_client_request_token() -> anyhow::Result<()> {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(200, "{}");
        FsxClient::new(&mock_config(&mock))?.delete_file_system(&delete_input("fs-123"))?;

        let request = mock.last_request().expect("request was sent");
        assert_eq!(&request.body[..], br#"{"FileSystemId":"fs-123"}"#);
        Ok(())
    }

    #[test]
    fn test_should_ignore_unknown_response_members() -> anyhow::Result<()> {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(
            200,
            r#"{"FileSystemId":"fs-123","Lifecycle":"DELETING","UnknownField":42}"#,
        );
        let output =
            FsxClient::new(&mock_config(&mock))?.delete_file_system(&delete_input("fs-123"))?;

        assert_eq!(output.file_system_id.as_deref(), Some("fs-123"));
        assert_eq!(output.lifecycle, Some(FileSystemLifecycle::Deleting));
        Ok(())
    }

    #[test]
    fn test_should_surface_non_object_body_as_deserialization_error() -> anyhow::Result<()> {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(200, "[]");
        let err = FsxClient::new(&mock_config(&mock))?
            .describe_file_systems(&DescribeFileSystemsInput::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::Deserialization {
                operation: "DescribeFileSystems",
                ..
            }
        ));
        Ok(())
    }

    #[test]
    fn test_should_resolve_error_code_from_header() -> anyhow::Result<()> {
        let mock = Arc::new(MockTransport::new());
        let mut response = awsbind_core::WireResponse::new(
            http::StatusCode::BAD_REQUEST,
            r#"{"Message":"fs-9 does not exist"}"#,
        );
        response.headers.insert(
            "x-amzn-errortype",
            http::HeaderValue::from_static("FileSystemNotFound:http://internal.amazon.com/"),
        );
        mock.push_response(response);

        let err = FsxClient::new(&mock_config(&mock))?
            .delete_file_system(&delete_input("fs-9"))
            .unwrap_err();
        let service = err.into_service_error().expect("service error");
        assert!(matches!(service, FsxError::FileSystemNotFound { .. }));
        assert_eq!(service.message(), Some("fs-9 does not exist"));
        Ok(())
    }

    #[test]
    fn test_should_decode_partial_tags_and_reports() -> anyhow::Result<()> {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(
            200,
            r#"{"FileSystems":[{"FileSystemId":"fs-1","Tags":[{"Key":"env"}]}]}"#,
        );
        mock.push_json(
            200,
            r#"{"DataRepositoryTasks":[{"TaskId":"task-1","Report":{"Path":"s3://b"}}]}"#,
        );
        let client = FsxClient::new(&mock_config(&mock))?;

        let output = client.describe_file_systems(&DescribeFileSystemsInput::default())?;
        let tags = output.file_systems.expect("file systems")[0]
            .tags
            .clone()
            .expect("tags");
        assert_eq!(tags[0].key, "env");
        assert_eq!(tags[0].value, "");

        let output =
            client.describe_data_repository_tasks(&DescribeDataRepositoryTasksInput::default())?;
        let report = output.data_repository_tasks.expect("tasks")[0]
            .report
            .clone()
            .expect("report");
        assert!(!report.enabled);
        assert_eq!(report.path.as_deref(), Some("s3://b"));
        Ok(())
    }

    #[test]
    #[ignore = "requires running server"]
    fn test_should_describe_file_systems_on_live_server() -> anyhow::Result<()> {
        let client = FsxClient::new(&live_config())?;
        let all = client.describe_all_file_systems()?;
        for fs in &all {
            assert!(fs.file_system_id.is_some());
        }
        Ok(())
    }
}
