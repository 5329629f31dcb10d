//! Amazon FSx shared data types.
//!
//! These types appear in both requests and responses. Every member is
//! `PascalCase` on the wire; members that are absent stay `None` and are
//! omitted when serializing.

use awsbind_core::string_enum;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

string_enum! {
    /// The type of file system.
    pub enum FileSystemType {
        /// Amazon FSx for Windows File Server.
        Windows => "WINDOWS",
        /// Amazon FSx for Lustre.
        Lustre => "LUSTRE",
    }
}

string_enum! {
    /// Storage media backing a file system.
    pub enum StorageType {
        /// Solid state drives.
        Ssd => "SSD",
        /// Hard disk drives.
        Hdd => "HDD",
    }
}

string_enum! {
    /// File system lifecycle state.
    pub enum FileSystemLifecycle {
        Available => "AVAILABLE",
        Creating => "CREATING",
        Failed => "FAILED",
        Deleting => "DELETING",
        Misconfigured => "MISCONFIGURED",
        Updating => "UPDATING",
    }
}

string_enum! {
    /// Maintenance operations in progress on a Windows file system.
    pub enum FileSystemMaintenanceOperation {
        Patching => "PATCHING",
        BackingUp => "BACKING_UP",
    }
}

string_enum! {
    /// Deployment type of a Windows file system.
    pub enum WindowsDeploymentType {
        MultiAz1 => "MULTI_AZ_1",
        SingleAz1 => "SINGLE_AZ_1",
        SingleAz2 => "SINGLE_AZ_2",
    }
}

string_enum! {
    /// Deployment type of a Lustre file system.
    pub enum LustreDeploymentType {
        Scratch1 => "SCRATCH_1",
        Scratch2 => "SCRATCH_2",
        Persistent1 => "PERSISTENT_1",
    }
}

string_enum! {
    /// Kind of administrative action.
    pub enum AdministrativeActionType {
        FileSystemUpdate => "FILE_SYSTEM_UPDATE",
        StorageOptimization => "STORAGE_OPTIMIZATION",
    }
}

string_enum! {
    /// Progress of an administrative action.
    pub enum Status {
        Failed => "FAILED",
        InProgress => "IN_PROGRESS",
        Pending => "PENDING",
        Completed => "COMPLETED",
        UpdatedOptimizing => "UPDATED_OPTIMIZING",
    }
}

string_enum! {
    /// Backup lifecycle state.
    pub enum BackupLifecycle {
        Available => "AVAILABLE",
        Creating => "CREATING",
        Deleted => "DELETED",
        Failed => "FAILED",
    }
}

string_enum! {
    /// Who initiated a backup.
    pub enum BackupType {
        Automatic => "AUTOMATIC",
        UserInitiated => "USER_INITIATED",
    }
}

string_enum! {
    /// Data repository task lifecycle state.
    pub enum DataRepositoryTaskLifecycle {
        Pending => "PENDING",
        Executing => "EXECUTING",
        Failed => "FAILED",
        Succeeded => "SUCCEEDED",
        Canceled => "CANCELED",
        Canceling => "CANCELING",
    }
}

string_enum! {
    /// Kind of data repository task.
    pub enum DataRepositoryTaskType {
        ExportToRepository => "EXPORT_TO_REPOSITORY",
    }
}

string_enum! {
    /// Completion report format.
    pub enum ReportFormat {
        ReportCsv20191124 => "REPORT_CSV_20191124",
    }
}

string_enum! {
    /// Which files a completion report covers.
    pub enum ReportScope {
        FailedFilesOnly => "FAILED_FILES_ONLY",
    }
}

string_enum! {
    /// Name of a `DescribeBackups` filter.
    pub enum FilterName {
        FileSystemId => "file-system-id",
        BackupType => "backup-type",
    }
}

string_enum! {
    /// Name of a `DescribeDataRepositoryTasks` filter.
    pub enum DataRepositoryTaskFilterName {
        FileSystemId => "file-system-id",
        TaskLifecycle => "task-lifecycle",
    }
}

string_enum! {
    /// Reason carried by an `ActiveDirectoryError`.
    pub enum ActiveDirectoryErrorType {
        DomainNotFound => "DOMAIN_NOT_FOUND",
        IncompatibleDomainMode => "INCOMPATIBLE_DOMAIN_MODE",
        WrongVpc => "WRONG_VPC",
        InvalidDomainStage => "INVALID_DOMAIN_STAGE",
    }
}

// ---------------------------------------------------------------------------
// Tags and filters
// ---------------------------------------------------------------------------

/// A key/value tag.
///
/// Members missing from a response decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    /// Create a tag.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A `DescribeBackups` filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Filter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<FilterName>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub values: Option<Vec<String>>,
}

/// A `DescribeDataRepositoryTasks` filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataRepositoryTaskFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<DataRepositoryTaskFilterName>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub values: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Active Directory
// ---------------------------------------------------------------------------

/// Self-managed Active Directory settings supplied when creating a file system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SelfManagedActiveDirectoryConfiguration {
    pub domain_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizational_unit_distinguished_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_system_administrators_group: Option<String>,
    pub user_name: String,
    pub password: String,
    #[serde(default)]
    pub dns_ips: Vec<String>,
}

/// Updated credentials or DNS servers for a self-managed directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SelfManagedActiveDirectoryConfigurationUpdates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub dns_ips: Option<Vec<String>>,
}

/// Self-managed Active Directory settings as reported by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SelfManagedActiveDirectoryAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizational_unit_distinguished_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_system_administrators_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub dns_ips: Option<Vec<String>>,
}

/// Directory a backup's file system was joined to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ActiveDirectoryBackupAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_directory_id: Option<String>,
}

// ---------------------------------------------------------------------------
// File system configuration
// ---------------------------------------------------------------------------

/// Windows settings supplied when creating a file system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateFileSystemWindowsConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_directory_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_managed_active_directory_configuration:
        Option<SelfManagedActiveDirectoryConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_type: Option<WindowsDeploymentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_subnet_id: Option<String>,
    /// Throughput in MB/s.
    pub throughput_capacity: i32,
    /// `d:HH:MM`, UTC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_maintenance_start_time: Option<String>,
    /// `HH:MM`, UTC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_automatic_backup_start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automatic_backup_retention_days: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_backups: Option<bool>,
}

/// Lustre settings supplied when creating a file system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateFileSystemLustreConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_maintenance_start_time: Option<String>,
    /// S3 URI to import from, e.g. `s3://bucket/prefix`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_path: Option<String>,
    /// Stripe size in MiB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imported_file_chunk_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_type: Option<LustreDeploymentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_unit_storage_throughput: Option<i32>,
}

/// Windows settings that can change after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateFileSystemWindowsConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_maintenance_start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_automatic_backup_start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automatic_backup_retention_days: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throughput_capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_managed_active_directory_configuration:
        Option<SelfManagedActiveDirectoryConfigurationUpdates>,
}

/// Lustre settings that can change after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateFileSystemLustreConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_maintenance_start_time: Option<String>,
}

/// Windows options for `DeleteFileSystem`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteFileSystemWindowsConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_final_backup: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub final_backup_tags: Option<Vec<Tag>>,
}

/// Final backup taken while deleting a Windows file system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteFileSystemWindowsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_backup_id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub final_backup_tags: Option<Vec<Tag>>,
}

/// Windows configuration of an existing file system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WindowsFileSystemConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_directory_id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub self_managed_active_directory_configuration: Option<SelfManagedActiveDirectoryAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_type: Option<WindowsDeploymentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_administration_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_subnet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_file_server_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throughput_capacity: Option<i32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub maintenance_operations_in_progress: Option<Vec<FileSystemMaintenanceOperation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_maintenance_start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_automatic_backup_start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automatic_backup_retention_days: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_backups: Option<bool>,
}

/// S3 repository linked to a Lustre file system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataRepositoryConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imported_file_chunk_size: Option<i32>,
}

/// Lustre configuration of an existing file system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LustreFileSystemConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_maintenance_start_time: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub data_repository_configuration: Option<DataRepositoryConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_type: Option<LustreDeploymentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_unit_storage_throughput: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount_name: Option<String>,
}

// ---------------------------------------------------------------------------
// File systems
// ---------------------------------------------------------------------------

/// Reason a file system failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileSystemFailureDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Reason an administrative action failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdministrativeActionFailureDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A change applied to a file system by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdministrativeAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub administrative_action_type: Option<AdministrativeActionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_percent: Option<i32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "awsbind_core::json::epoch_seconds"
    )]
    pub request_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// The file system as it will look once the action completes.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub target_file_system_values: Option<Box<FileSystem>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub failure_details: Option<AdministrativeActionFailureDetails>,
}

/// A file system description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileSystem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "awsbind_core::json::epoch_seconds"
    )]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_system_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_system_type: Option<FileSystemType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<FileSystemLifecycle>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub failure_details: Option<FileSystemFailureDetails>,
    /// Capacity in GiB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<StorageType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub subnet_ids: Option<Vec<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub network_interface_ids: Option<Vec<String>>,
    #[serde(rename = "DNSName", skip_serializing_if = "Option::is_none")]
    pub dns_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(rename = "ResourceARN", skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub tags: Option<Vec<Tag>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub windows_configuration: Option<WindowsFileSystemConfiguration>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub lustre_configuration: Option<LustreFileSystemConfiguration>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub administrative_actions: Option<Vec<AdministrativeAction>>,
}

// ---------------------------------------------------------------------------
// Backups
// ---------------------------------------------------------------------------

/// Reason a backup failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BackupFailureDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A backup of a file system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Backup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<BackupLifecycle>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub failure_details: Option<BackupFailureDetails>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub backup_type: Option<BackupType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_percent: Option<i32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "awsbind_core::json::epoch_seconds"
    )]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(rename = "ResourceARN", skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub tags: Option<Vec<Tag>>,
    /// Metadata of the file system the backup was taken from.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub file_system: Option<FileSystem>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub directory_information: Option<ActiveDirectoryBackupAttributes>,
}

// ---------------------------------------------------------------------------
// Data repository tasks
// ---------------------------------------------------------------------------

/// Reason a data repository task failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataRepositoryTaskFailureDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// File counts of a running or finished task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataRepositoryTaskStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub succeeded_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_count: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "awsbind_core::json::epoch_seconds"
    )]
    pub last_updated_time: Option<DateTime<Utc>>,
}

/// Completion report settings of a data repository task. A response
/// without `Enabled` decodes as disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CompletionReport {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ReportFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<ReportScope>,
}

/// A data repository task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataRepositoryTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<DataRepositoryTaskLifecycle>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub task_type: Option<DataRepositoryTaskType>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "awsbind_core::json::epoch_seconds"
    )]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "awsbind_core::json::epoch_seconds"
    )]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "awsbind_core::json::epoch_seconds"
    )]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(rename = "ResourceARN", skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_system_id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub paths: Option<Vec<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub failure_details: Option<DataRepositoryTaskFailureDetails>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub status: Option<DataRepositoryTaskStatus>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub report: Option<CompletionReport>,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_should_decode_file_system_with_acronym_members() {
        let fs: FileSystem = serde_json::from_str(
            r#"{
                "FileSystemId": "fs-0123",
                "FileSystemType": "WINDOWS",
                "Lifecycle": "AVAILABLE",
                "DNSName": "fs-0123.example.com",
                "ResourceARN": "arn:aws:fsx:us-east-1:123456789012:file-system/fs-0123",
                "CreationTime": 1577836800,
                "StorageCapacity": 300,
                "SubnetIds": ["subnet-1"],
                "WindowsConfiguration": {"ThroughputCapacity": 8, "DeploymentType": "SINGLE_AZ_2"}
            }"#,
        )
        .unwrap();

        assert_eq!(fs.file_system_id.as_deref(), Some("fs-0123"));
        assert_eq!(fs.file_system_type, Some(FileSystemType::Windows));
        assert_eq!(fs.dns_name.as_deref(), Some("fs-0123.example.com"));
        assert!(fs.resource_arn.unwrap().ends_with("fs-0123"));
        assert_eq!(
            fs.creation_time,
            Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap())
        );
        let windows = fs.windows_configuration.unwrap();
        assert_eq!(windows.throughput_capacity, Some(8));
        assert_eq!(windows.deployment_type, Some(WindowsDeploymentType::SingleAz2));
    }

    #[test]
    fn test_should_keep_unknown_lifecycle_values() {
        let fs: FileSystem = serde_json::from_str(r#"{"Lifecycle":"HIBERNATING"}"#).unwrap();
        assert_eq!(
            fs.lifecycle,
            Some(FileSystemLifecycle::Unknown("HIBERNATING".to_owned()))
        );
    }

    #[test]
    fn test_should_treat_mismatched_containers_as_absent() {
        let fs: FileSystem = serde_json::from_str(
            r#"{"SubnetIds": {"a": 1}, "WindowsConfiguration": [1, 2], "Tags": null, "FileSystemId": "fs-1"}"#,
        )
        .unwrap();
        assert!(fs.subnet_ids.is_none());
        assert!(fs.windows_configuration.is_none());
        assert!(fs.tags.is_none());
        assert_eq!(fs.file_system_id.as_deref(), Some("fs-1"));
    }

    #[test]
    fn test_should_decode_nested_administrative_action() {
        let fs: FileSystem = serde_json::from_str(
            r#"{"AdministrativeActions": [{
                "AdministrativeActionType": "FILE_SYSTEM_UPDATE",
                "Status": "IN_PROGRESS",
                "RequestTime": 1577836800.5,
                "TargetFileSystemValues": {"StorageCapacity": 600}
            }]}"#,
        )
        .unwrap();
        let action = &fs.administrative_actions.unwrap()[0];
        assert_eq!(action.status, Some(Status::InProgress));
        assert_eq!(
            action.target_file_system_values.as_ref().unwrap().storage_capacity,
            Some(600)
        );
        assert_eq!(action.request_time.unwrap().timestamp_subsec_millis(), 500);
    }

    #[test]
    fn test_should_rename_type_members() {
        let backup: Backup =
            serde_json::from_str(r#"{"BackupId":"backup-1","Type":"USER_INITIATED"}"#).unwrap();
        assert_eq!(backup.backup_type, Some(BackupType::UserInitiated));

        let json = serde_json::to_value(&backup).unwrap();
        assert_eq!(json["Type"], "USER_INITIATED");
        assert!(json.get("Lifecycle").is_none());
    }

    #[test]
    fn test_should_default_missing_tag_and_report_members() {
        let tag: Tag = serde_json::from_str(r#"{"Key":"env"}"#).unwrap();
        assert_eq!(tag, Tag::new("env", ""));

        let task: DataRepositoryTask =
            serde_json::from_str(r#"{"TaskId":"task-1","Report":{"Path":"s3://b"}}"#).unwrap();
        let report = task.report.unwrap();
        assert!(!report.enabled);
        assert_eq!(report.path.as_deref(), Some("s3://b"));
    }
}
