//! SigV4 signing through the full client pipeline.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use awsbind_auth::{AuthError, Credentials, ProvideCredentials, SigV4Signer};
    use awsbind_core::test_util::MockTransport;
    use awsbind_core::{ClientConfig, ClientError};
    use awsbind_fsx::FsxClient;
    use awsbind_fsx::model::input::DescribeBackupsInput;

    use crate::mock_config;

    #[test]
    fn test_should_sign_aws_json_request() -> anyhow::Result<()> {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(200, r#"{"Backups":[]}"#);
        FsxClient::new(&mock_config(&mock))?.describe_backups(&DescribeBackupsInput::default())?;

        let request = mock.last_request().expect("request was sent");
        let auth = request.header("authorization").expect("authorization header");
        assert!(auth.starts_with("AWS4-HMAC-SHA256 Credential=test/"));
        assert!(auth.contains("/us-east-1/fsx/aws4_request"));
        for name in ["content-type", "host", "x-amz-date", "x-amz-target"] {
            assert!(auth.contains(name), "{name} is not signed: {auth}");
        }
        assert_eq!(request.header("host"), Some("fsx.us-east-1.amazonaws.com"));
        assert!(request.header("amz-sdk-invocation-id").is_some());
        assert!(request.header("x-amz-security-token").is_none());
        Ok(())
    }

    #[derive(Debug)]
    struct NoCredentials;

    impl ProvideCredentials for NoCredentials {
        fn provide_credentials(&self) -> Result<Credentials, AuthError> {
            Err(AuthError::MissingEnvVar("AWS_ACCESS_KEY_ID"))
        }
    }

    #[test]
    fn test_should_fail_before_sending_without_credentials() -> anyhow::Result<()> {
        let mock = Arc::new(MockTransport::new());
        let config = ClientConfig::builder()
            .region("us-east-1")
            .signer(Arc::new(SigV4Signer::new(NoCredentials)))
            .transport(mock.clone())
            .build();

        let err = FsxClient::new(&config)?
            .describe_backups(&DescribeBackupsInput::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::Signing {
                operation: "DescribeBackups",
                ..
            }
        ));
        assert!(mock.requests().is_empty());
        Ok(())
    }
}
