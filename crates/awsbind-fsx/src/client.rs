//! The Amazon FSx client.

use awsbind_core::protocol::{Validate, aws_json_request};
use awsbind_core::{BuildError, ClientConfig, ClientError, ClientRuntime};
use awsbind_fsx_model::input::{
    CancelDataRepositoryTaskInput, CreateBackupInput, CreateDataRepositoryTaskInput,
    CreateFileSystemFromBackupInput, CreateFileSystemInput, DeleteBackupInput,
    DeleteFileSystemInput, DescribeBackupsInput, DescribeDataRepositoryTasksInput,
    DescribeFileSystemsInput, ListTagsForResourceInput, TagResourceInput, UntagResourceInput,
    UpdateFileSystemInput,
};
use awsbind_fsx_model::output::{
    CancelDataRepositoryTaskOutput, CreateBackupOutput, CreateDataRepositoryTaskOutput,
    CreateFileSystemFromBackupOutput, CreateFileSystemOutput, DeleteBackupOutput,
    DeleteFileSystemOutput, DescribeBackupsOutput, DescribeDataRepositoryTasksOutput,
    DescribeFileSystemsOutput, ListTagsForResourceOutput, TagResourceOutput, UntagResourceOutput,
    UpdateFileSystemOutput,
};
use awsbind_fsx_model::{FSX_ERRORS, FSX_METADATA, FsxError, FsxOperation};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Result of an FSx call.
pub type FsxResult<T> = Result<T, ClientError<FsxError>>;

/// Blocking Amazon FSx client.
///
/// Cheap to clone; clones share the transport and signer.
#[derive(Debug, Clone)]
pub struct FsxClient {
    runtime: ClientRuntime,
}

impl FsxClient {
    /// Build a client from `config`.
    pub fn new(config: &ClientConfig) -> Result<Self, BuildError> {
        Ok(Self {
            runtime: ClientRuntime::new(&FSX_METADATA, config)?,
        })
    }

    /// The runtime this client sends requests through.
    #[must_use]
    pub fn runtime(&self) -> &ClientRuntime {
        &self.runtime
    }

    /// Cancel an executing data repository task.
    pub fn cancel_data_repository_task(
        &self,
        input: &CancelDataRepositoryTaskInput,
    ) -> FsxResult<CancelDataRepositoryTaskOutput> {
        self.call(FsxOperation::CancelDataRepositoryTask, input)
    }

    /// Take a user-initiated backup of a file system.
    pub fn create_backup(&self, input: &CreateBackupInput) -> FsxResult<CreateBackupOutput> {
        self.call(FsxOperation::CreateBackup, input)
    }

    /// Export files from a Lustre file system to its linked repository.
    pub fn create_data_repository_task(
        &self,
        input: &CreateDataRepositoryTaskInput,
    ) -> FsxResult<CreateDataRepositoryTaskOutput> {
        self.call(FsxOperation::CreateDataRepositoryTask, input)
    }

    /// Create a Windows or Lustre file system.
    pub fn create_file_system(
        &self,
        input: &CreateFileSystemInput,
    ) -> FsxResult<CreateFileSystemOutput> {
        self.call(FsxOperation::CreateFileSystem, input)
    }

    /// Create a file system from an existing backup.
    pub fn create_file_system_from_backup(
        &self,
        input: &CreateFileSystemFromBackupInput,
    ) -> FsxResult<CreateFileSystemFromBackupOutput> {
        self.call(FsxOperation::CreateFileSystemFromBackup, input)
    }

    /// Delete a backup.
    pub fn delete_backup(&self, input: &DeleteBackupInput) -> FsxResult<DeleteBackupOutput> {
        self.call(FsxOperation::DeleteBackup, input)
    }

    /// Delete a file system. Windows file systems take a final backup unless
    /// told otherwise.
    pub fn delete_file_system(
        &self,
        input: &DeleteFileSystemInput,
    ) -> FsxResult<DeleteFileSystemOutput> {
        self.call(FsxOperation::DeleteFileSystem, input)
    }

    /// Describe backups, one page at a time.
    pub fn describe_backups(
        &self,
        input: &DescribeBackupsInput,
    ) -> FsxResult<DescribeBackupsOutput> {
        self.call(FsxOperation::DescribeBackups, input)
    }

    /// Describe data repository tasks, one page at a time.
    pub fn describe_data_repository_tasks(
        &self,
        input: &DescribeDataRepositoryTasksInput,
    ) -> FsxResult<DescribeDataRepositoryTasksOutput> {
        self.call(FsxOperation::DescribeDataRepositoryTasks, input)
    }

    /// Describe file systems, one page at a time.
    pub fn describe_file_systems(
        &self,
        input: &DescribeFileSystemsInput,
    ) -> FsxResult<DescribeFileSystemsOutput> {
        self.call(FsxOperation::DescribeFileSystems, input)
    }

    /// List the tags on an FSx resource.
    pub fn list_tags_for_resource(
        &self,
        input: &ListTagsForResourceInput,
    ) -> FsxResult<ListTagsForResourceOutput> {
        self.call(FsxOperation::ListTagsForResource, input)
    }

    /// Add tags to an FSx resource.
    pub fn tag_resource(&self, input: &TagResourceInput) -> FsxResult<TagResourceOutput> {
        self.call(FsxOperation::TagResource, input)
    }

    /// Remove tags from an FSx resource.
    pub fn untag_resource(&self, input: &UntagResourceInput) -> FsxResult<UntagResourceOutput> {
        self.call(FsxOperation::UntagResource, input)
    }

    /// Change the configuration of a file system.
    pub fn update_file_system(
        &self,
        input: &UpdateFileSystemInput,
    ) -> FsxResult<UpdateFileSystemOutput> {
        self.call(FsxOperation::UpdateFileSystem, input)
    }

    /// Describe every file system, following `NextToken` until the last page.
    pub fn describe_all_file_systems(
        &self,
    ) -> FsxResult<Vec<awsbind_fsx_model::types::FileSystem>> {
        let mut input = DescribeFileSystemsInput::default();
        let mut file_systems = Vec::new();
        loop {
            let page = self.describe_file_systems(&input)?;
            file_systems.extend(page.file_systems.unwrap_or_default());
            match page.next_token {
                // An echoed token would repeat the same page forever.
                Some(token) if !token.is_empty() && input.next_token.as_ref() != Some(&token) => {
                    input.next_token = Some(token);
                }
                _ => break,
            }
        }
        debug!(count = file_systems.len(), "described all file systems");
        Ok(file_systems)
    }

    fn call<I, O>(&self, operation: FsxOperation, input: &I) -> FsxResult<O>
    where
        I: Serialize + Validate,
        O: DeserializeOwned + Default,
    {
        let name = operation.as_str();
        input
            .validate()
            .map_err(|e| ClientError::marshal(name, e))?;
        let request =
            aws_json_request(&FSX_METADATA, name, input).map_err(|e| ClientError::marshal(name, e))?;
        self.runtime.invoke(name, request, &FSX_ERRORS)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use awsbind_core::test_util::MockTransport;
    use awsbind_fsx_model::types::{FileSystemLifecycle, FileSystemType, Tag};

    use super::*;

    fn client(mock: &Arc<MockTransport>) -> FsxClient {
        let config = ClientConfig::builder()
            .region("us-west-2")
            .transport(mock.clone())
            .build();
        FsxClient::new(&config).unwrap()
    }

    #[test]
    fn test_should_target_regional_endpoint() {
        let mock = Arc::new(MockTransport::new());
        let client = client(&mock);
        assert_eq!(
            client.runtime().endpoint().url(),
            "https://fsx.us-west-2.amazonaws.com"
        );
    }

    #[test]
    fn test_should_send_delete_file_system() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(200, r#"{"FileSystemId":"fs-123","Lifecycle":"DELETING"}"#);

        let output = client(&mock)
            .delete_file_system(&DeleteFileSystemInput {
                file_system_id: "fs-123".to_owned(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(output.file_system_id.as_deref(), Some("fs-123"));
        assert_eq!(output.lifecycle, Some(FileSystemLifecycle::Deleting));
        assert!(output.windows_response.is_none());

        let request = mock.last_request().unwrap();
        assert_eq!(request.method, http::Method::POST);
        assert_eq!(request.path, "/");
        assert_eq!(
            request.header("x-amz-target"),
            Some("AWSSimbaAPIService_v20180301.DeleteFileSystem")
        );
        assert_eq!(
            request.header("content-type"),
            Some("application/x-amz-json-1.1")
        );
        assert_eq!(&request.body[..], br#"{"FileSystemId":"fs-123"}"#);
    }

    #[test]
    fn test_should_map_service_error() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(400, r#"{"__type":"FileSystemNotFound","Message":"no fs-9"}"#);

        let err = client(&mock)
            .describe_file_systems(&DescribeFileSystemsInput {
                file_system_ids: Some(vec!["fs-9".to_owned()]),
                ..Default::default()
            })
            .unwrap_err();
        let service = err.into_service_error().unwrap();
        assert!(matches!(service, FsxError::FileSystemNotFound { .. }));
        assert_eq!(service.message(), Some("no fs-9"));
    }

    #[test]
    fn test_should_reject_invalid_input_without_sending() {
        let mock = Arc::new(MockTransport::new());
        let err = client(&mock)
            .tag_resource(&TagResourceInput {
                resource_arn: String::new(),
                tags: vec![Tag::new("env", "prod")],
            })
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidArgument { operation: "TagResource", .. }));
        assert!(mock.requests().is_empty());
    }

    #[test]
    fn test_should_decode_empty_tag_resource_response() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(200, "{}");
        client(&mock)
            .tag_resource(&TagResourceInput {
                resource_arn: "arn:aws:fsx:us-west-2:1:file-system/fs-1".to_owned(),
                tags: vec![Tag::new("env", "prod")],
            })
            .unwrap();
        let body: serde_json::Value =
            serde_json::from_slice(&mock.last_request().unwrap().body).unwrap();
        assert_eq!(body["Tags"][0]["Key"], "env");
    }

    #[test]
    fn test_should_follow_pagination_tokens() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(
            200,
            r#"{"FileSystems":[{"FileSystemId":"fs-1","FileSystemType":"LUSTRE"}],"NextToken":"p2"}"#,
        );
        mock.push_json(200, r#"{"FileSystems":[{"FileSystemId":"fs-2"}]}"#);

        let all = client(&mock).describe_all_file_systems().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].file_system_type, Some(FileSystemType::Lustre));

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(&requests[0].body[..], b"{}");
        assert_eq!(&requests[1].body[..], br#"{"NextToken":"p2"}"#);
    }

    #[test]
    fn test_should_stop_when_next_token_repeats() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(200, r#"{"FileSystems":[{"FileSystemId":"fs-1"}],"NextToken":"p2"}"#);
        mock.push_json(200, r#"{"FileSystems":[{"FileSystemId":"fs-2"}],"NextToken":"p2"}"#);

        let all = client(&mock).describe_all_file_systems().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(mock.requests().len(), 2);
    }
}
