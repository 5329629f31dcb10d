//! Transport-level behavior: checksums and the default reqwest transport.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use awsbind_core::test_util::MockTransport;
    use awsbind_core::{ClientConfig, ClientError, ReqwestTransport, WireResponse};
    use awsbind_fsx::FsxClient;
    use awsbind_fsx::model::input::DescribeFileSystemsInput;
    use awsbind_logs::LogsClient;
    use awsbind_logs::model::input::DescribeLogGroupsInput;

    use crate::{LoopbackServer, mock_config, test_signer};

    #[test]
    fn test_should_reject_body_with_wrong_crc32() -> anyhow::Result<()> {
        let mock = Arc::new(MockTransport::new());
        let body = r#"{"FileSystems":[]}"#;
        let mut response = WireResponse::new(http::StatusCode::OK, body);
        let wrong = crc32fast::hash(body.as_bytes()).wrapping_add(1);
        response
            .headers
            .insert("x-amz-crc32", http::HeaderValue::from(wrong));
        mock.push_response(response);

        let err = FsxClient::new(&mock_config(&mock))?
            .describe_file_systems(&DescribeFileSystemsInput::default())
            .unwrap_err();
        match err {
            ClientError::ChecksumMismatch {
                operation,
                expected,
                actual,
            } => {
                assert_eq!(operation, "DescribeFileSystems");
                assert_eq!(expected, wrong);
                assert_eq!(actual, crc32fast::hash(body.as_bytes()));
            }
            other => panic!("expected checksum mismatch, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_should_accept_body_with_matching_crc32() -> anyhow::Result<()> {
        let mock = Arc::new(MockTransport::new());
        let body = r#"{"logGroups":[{"logGroupName":"/app/web"}]}"#;
        let mut response = WireResponse::new(http::StatusCode::OK, body);
        response.headers.insert(
            "x-amz-crc32",
            http::HeaderValue::from(crc32fast::hash(body.as_bytes())),
        );
        mock.push_response(response);

        let output = LogsClient::new(&mock_config(&mock))?
            .describe_log_groups(&DescribeLogGroupsInput::default())?;
        assert_eq!(output.log_groups.unwrap_or_default().len(), 1);
        Ok(())
    }

    #[test]
    fn test_should_exchange_over_loopback_http() -> anyhow::Result<()> {
        let server = LoopbackServer::start(
            http::StatusCode::OK,
            r#"{"FileSystems":[{"FileSystemId":"fs-1","Lifecycle":"AVAILABLE"}]}"#,
        )?;
        let config = ClientConfig::builder()
            .region("us-east-1")
            .endpoint_url(server.url())
            .signer(test_signer())
            .transport(Arc::new(ReqwestTransport::with_timeout(Duration::from_secs(5))?))
            .build();

        let output = FsxClient::new(&config)?.describe_file_systems(&DescribeFileSystemsInput {
            max_results: Some(1),
            ..Default::default()
        })?;
        assert_eq!(output.file_systems.unwrap_or_default().len(), 1);

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        let captured = &requests[0];
        assert_eq!(captured.method, http::Method::POST);
        assert_eq!(captured.path_and_query, "/");
        assert_eq!(captured.version, http::Version::HTTP_11);
        assert_eq!(
            captured.header("x-amz-target"),
            Some("AWSSimbaAPIService_v20180301.DescribeFileSystems")
        );
        assert_eq!(captured.header("host"), Some(server.addr().to_string().as_str()));
        assert!(captured.header("authorization").is_some());
        assert_eq!(&captured.body[..], br#"{"MaxResults":1}"#);
        Ok(())
    }

    #[test]
    fn test_should_surface_connection_failure() -> anyhow::Result<()> {
        let url = LoopbackServer::start(http::StatusCode::OK, "{}")?.url();
        let config = ClientConfig::builder()
            .region("us-east-1")
            .endpoint_url(url)
            .transport(Arc::new(ReqwestTransport::with_timeout(Duration::from_secs(2))?))
            .build();

        let err = FsxClient::new(&config)?
            .describe_file_systems(&DescribeFileSystemsInput::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::Transport {
                operation: "DescribeFileSystems",
                ..
            }
        ));
        Ok(())
    }
}
