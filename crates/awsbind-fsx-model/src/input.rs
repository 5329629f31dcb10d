//! Amazon FSx input types for the 14 operations.
//!
//! Required members are plain values and are checked by [`Validate`] before
//! a request is marshalled; optional members are omitted from the JSON body
//! when `None`.

use awsbind_core::MarshalError;
use awsbind_core::protocol::{Validate, require, require_items};
use serde::{Deserialize, Serialize};

use crate::types::{
    CompletionReport, CreateFileSystemLustreConfiguration, CreateFileSystemWindowsConfiguration,
    DataRepositoryTaskFilter, DataRepositoryTaskType, DeleteFileSystemWindowsConfiguration,
    FileSystemType, Filter, StorageType, Tag, UpdateFileSystemLustreConfiguration,
    UpdateFileSystemWindowsConfiguration,
};

// ---------------------------------------------------------------------------
// File systems
// ---------------------------------------------------------------------------

/// Input for the `CreateFileSystem` operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateFileSystemInput {
    /// Idempotency token, up to 63 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,

    pub file_system_type: FileSystemType,

    /// Capacity in GiB.
    pub storage_capacity: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<StorageType>,

    pub subnet_ids: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows_configuration: Option<CreateFileSystemWindowsConfiguration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lustre_configuration: Option<CreateFileSystemLustreConfiguration>,
}

impl CreateFileSystemInput {
    /// An input with the required members set and everything else absent.
    pub fn new(file_system_type: FileSystemType, storage_capacity: i32, subnet_ids: Vec<String>) -> Self {
        Self {
            client_request_token: None,
            file_system_type,
            storage_capacity,
            storage_type: None,
            subnet_ids,
            security_group_ids: None,
            tags: None,
            kms_key_id: None,
            windows_configuration: None,
            lustre_configuration: None,
        }
    }
}

impl Validate for CreateFileSystemInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require_items("SubnetIds", &self.subnet_ids)?;
        if self.storage_capacity <= 0 {
            return Err(MarshalError::InvalidArgument(
                "StorageCapacity must be positive".to_owned(),
            ));
        }
        validate_tags(self.tags.as_deref())
    }
}

/// Input for the `CreateFileSystemFromBackup` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateFileSystemFromBackupInput {
    pub backup_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,

    pub subnet_ids: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows_configuration: Option<CreateFileSystemWindowsConfiguration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<StorageType>,
}

impl Validate for CreateFileSystemFromBackupInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("BackupId", &self.backup_id)?;
        require_items("SubnetIds", &self.subnet_ids)?;
        validate_tags(self.tags.as_deref())
    }
}

/// Input for the `DeleteFileSystem` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteFileSystemInput {
    pub file_system_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows_configuration: Option<DeleteFileSystemWindowsConfiguration>,
}

impl Validate for DeleteFileSystemInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("FileSystemId", &self.file_system_id)
    }
}

/// Input for the `DescribeFileSystems` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeFileSystemsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_system_ids: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl Validate for DescribeFileSystemsInput {
    fn validate(&self) -> Result<(), MarshalError> {
        validate_max_results(self.max_results)
    }
}

/// Input for the `UpdateFileSystem` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateFileSystemInput {
    pub file_system_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,

    /// New capacity in GiB; only increases are accepted by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_capacity: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows_configuration: Option<UpdateFileSystemWindowsConfiguration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lustre_configuration: Option<UpdateFileSystemLustreConfiguration>,
}

impl Validate for UpdateFileSystemInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("FileSystemId", &self.file_system_id)
    }
}

// ---------------------------------------------------------------------------
// Backups
// ---------------------------------------------------------------------------

/// Input for the `CreateBackup` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateBackupInput {
    pub file_system_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl Validate for CreateBackupInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("FileSystemId", &self.file_system_id)?;
        validate_tags(self.tags.as_deref())
    }
}

/// Input for the `DeleteBackup` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteBackupInput {
    pub backup_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
}

impl Validate for DeleteBackupInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("BackupId", &self.backup_id)
    }
}

/// Input for the `DescribeBackups` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeBackupsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_ids: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl Validate for DescribeBackupsInput {
    fn validate(&self) -> Result<(), MarshalError> {
        validate_max_results(self.max_results)
    }
}

// ---------------------------------------------------------------------------
// Data repository tasks
// ---------------------------------------------------------------------------

/// Input for the `CreateDataRepositoryTask` operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDataRepositoryTaskInput {
    #[serde(rename = "Type")]
    pub task_type: DataRepositoryTaskType,

    /// Paths to export; the whole file system when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<String>>,

    pub file_system_id: String,

    pub report: CompletionReport,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CreateDataRepositoryTaskInput {
    /// An export task for `file_system_id` with the given report settings.
    pub fn export(file_system_id: impl Into<String>, report: CompletionReport) -> Self {
        Self {
            task_type: DataRepositoryTaskType::ExportToRepository,
            paths: None,
            file_system_id: file_system_id.into(),
            report,
            client_request_token: None,
            tags: None,
        }
    }
}

impl Validate for CreateDataRepositoryTaskInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("FileSystemId", &self.file_system_id)?;
        if self.report.enabled && self.report.path.as_deref().is_none_or(str::is_empty) {
            return Err(MarshalError::InvalidArgument(
                "Report.Path is required when the report is enabled".to_owned(),
            ));
        }
        validate_tags(self.tags.as_deref())
    }
}

/// Input for the `CancelDataRepositoryTask` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CancelDataRepositoryTaskInput {
    pub task_id: String,
}

impl Validate for CancelDataRepositoryTaskInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("TaskId", &self.task_id)
    }
}

/// Input for the `DescribeDataRepositoryTasks` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDataRepositoryTasksInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_ids: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<DataRepositoryTaskFilter>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl Validate for DescribeDataRepositoryTasksInput {
    fn validate(&self) -> Result<(), MarshalError> {
        validate_max_results(self.max_results)
    }
}

// ---------------------------------------------------------------------------
// Tagging
// ---------------------------------------------------------------------------

/// Input for the `ListTagsForResource` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForResourceInput {
    #[serde(rename = "ResourceARN")]
    pub resource_arn: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl Validate for ListTagsForResourceInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("ResourceARN", &self.resource_arn)?;
        validate_max_results(self.max_results)
    }
}

/// Input for the `TagResource` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagResourceInput {
    #[serde(rename = "ResourceARN")]
    pub resource_arn: String,

    pub tags: Vec<Tag>,
}

impl Validate for TagResourceInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("ResourceARN", &self.resource_arn)?;
        require_items("Tags", &self.tags)?;
        validate_tags(Some(&self.tags))
    }
}

/// Input for the `UntagResource` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UntagResourceInput {
    #[serde(rename = "ResourceARN")]
    pub resource_arn: String,

    pub tag_keys: Vec<String>,
}

impl Validate for UntagResourceInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("ResourceARN", &self.resource_arn)?;
        require_items("TagKeys", &self.tag_keys)
    }
}

fn validate_tags(tags: Option<&[Tag]>) -> Result<(), MarshalError> {
    for tag in tags.unwrap_or_default() {
        require("Tag.Key", &tag.key)?;
    }
    Ok(())
}

fn validate_max_results(max_results: Option<i32>) -> Result<(), MarshalError> {
    match max_results {
        Some(n) if n < 1 => Err(MarshalError::InvalidArgument(format!(
            "MaxResults must be at least 1, got {n}"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_marshal_only_present_members() {
        let input = DeleteFileSystemInput {
            file_system_id: "fs-123".to_owned(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&input).unwrap(),
            r#"{"FileSystemId":"fs-123"}"#
        );
    }

    #[test]
    fn test_should_reject_missing_required_members() {
        let err = DeleteFileSystemInput::default().validate().unwrap_err();
        assert!(err.to_string().contains("FileSystemId"));

        let err = TagResourceInput {
            resource_arn: "arn:aws:fsx:us-east-1:1:file-system/fs-1".to_owned(),
            tags: vec![],
        }
        .validate()
        .unwrap_err();
        assert!(err.to_string().contains("Tags"));
    }

    #[test]
    fn test_should_round_trip_create_windows_file_system() {
        use crate::types::{SelfManagedActiveDirectoryConfiguration, WindowsDeploymentType};

        let input = CreateFileSystemInput {
            client_request_token: Some("token-1".to_owned()),
            storage_type: Some(StorageType::Ssd),
            security_group_ids: Some(vec!["sg-1".to_owned()]),
            tags: Some(vec![Tag::new("Name", "shared")]),
            kms_key_id: Some("alias/fsx".to_owned()),
            windows_configuration: Some(CreateFileSystemWindowsConfiguration {
                self_managed_active_directory_configuration: Some(
                    SelfManagedActiveDirectoryConfiguration {
                        domain_name: "corp.example.com".to_owned(),
                        organizational_unit_distinguished_name: Some(
                            "OU=FSx,DC=corp,DC=example,DC=com".to_owned(),
                        ),
                        file_system_administrators_group: Some("FSxAdmins".to_owned()),
                        user_name: "Admin".to_owned(),
                        password: "secret".to_owned(),
                        dns_ips: vec!["10.0.0.10".to_owned(), "10.0.0.11".to_owned()],
                    },
                ),
                deployment_type: Some(WindowsDeploymentType::MultiAz1),
                preferred_subnet_id: Some("subnet-1".to_owned()),
                throughput_capacity: 32,
                weekly_maintenance_start_time: Some("1:05:00".to_owned()),
                daily_automatic_backup_start_time: Some("02:00".to_owned()),
                automatic_backup_retention_days: Some(7),
                copy_tags_to_backups: Some(true),
                ..Default::default()
            }),
            ..CreateFileSystemInput::new(
                FileSystemType::Windows,
                300,
                vec!["subnet-1".to_owned(), "subnet-2".to_owned()],
            )
        };
        input.validate().unwrap();

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(
            value["WindowsConfiguration"]["SelfManagedActiveDirectoryConfiguration"]["DnsIps"][1],
            "10.0.0.11"
        );
        let decoded: CreateFileSystemInput = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn test_should_marshal_create_file_system_with_nested_configuration() {
        let mut input = CreateFileSystemInput::new(
            FileSystemType::Lustre,
            1200,
            vec!["subnet-1".to_owned()],
        );
        input.lustre_configuration = Some(CreateFileSystemLustreConfiguration {
            import_path: Some("s3://bucket".to_owned()),
            ..Default::default()
        });
        input.validate().unwrap();

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["FileSystemType"], "LUSTRE");
        assert_eq!(json["StorageCapacity"], 1200);
        assert_eq!(json["LustreConfiguration"]["ImportPath"], "s3://bucket");
        assert!(json.get("WindowsConfiguration").is_none());
        assert!(json.get("ClientRequestToken").is_none());
    }

    #[test]
    fn test_should_require_report_path_when_enabled() {
        let report = CompletionReport {
            enabled: true,
            ..Default::default()
        };
        let input = CreateDataRepositoryTaskInput::export("fs-1", report);
        assert!(input.validate().is_err());

        let input = CreateDataRepositoryTaskInput::export("fs-1", CompletionReport::default());
        input.validate().unwrap();
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["Type"], "EXPORT_TO_REPOSITORY");
        assert_eq!(json["Report"]["Enabled"], false);
    }

    #[test]
    fn test_should_rename_resource_arn() {
        let input = UntagResourceInput {
            resource_arn: "arn".to_owned(),
            tag_keys: vec!["env".to_owned()],
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["ResourceARN"], "arn");
        assert_eq!(json["TagKeys"][0], "env");
    }

    #[test]
    fn test_should_reject_non_positive_max_results() {
        let input = DescribeBackupsInput {
            max_results: Some(0),
            ..Default::default()
        };
        assert!(input.validate().is_err());
    }
}
