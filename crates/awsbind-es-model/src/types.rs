//! Amazon Elasticsearch Service shared data types.
//!
//! Members are `PascalCase` on the wire, with a handful of acronyms kept
//! upper case (`ARN`, `EBSOptions`, `VPCOptions`, ...) that need explicit
//! renames.

use std::collections::HashMap;

use awsbind_core::string_enum;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

string_enum! {
    /// EBS volume type.
    pub enum VolumeType {
        Standard => "standard",
        Gp2 => "gp2",
        Io1 => "io1",
    }
}

string_enum! {
    /// Log streams a domain can publish to CloudWatch Logs. Used as keys of
    /// `LogPublishingOptions`.
    pub enum LogType {
        IndexSlowLogs => "INDEX_SLOW_LOGS",
        SearchSlowLogs => "SEARCH_SLOW_LOGS",
        EsApplicationLogs => "ES_APPLICATION_LOGS",
        AuditLogs => "AUDIT_LOGS",
    }
}

string_enum! {
    /// Service software update state.
    pub enum DeploymentStatus {
        PendingUpdate => "PENDING_UPDATE",
        InProgress => "IN_PROGRESS",
        Completed => "COMPLETED",
        NotEligible => "NOT_ELIGIBLE",
        Eligible => "ELIGIBLE",
    }
}

string_enum! {
    /// Minimum TLS version accepted by the domain endpoint.
    pub enum TlsSecurityPolicy {
        PolicyMinTls10 => "Policy-Min-TLS-1-0-2019-07",
        PolicyMinTls12 => "Policy-Min-TLS-1-2-2019-07",
    }
}

string_enum! {
    /// Stage of a version upgrade.
    pub enum UpgradeStep {
        PreUpgradeCheck => "PRE_UPGRADE_CHECK",
        Snapshot => "SNAPSHOT",
        Upgrade => "UPGRADE",
    }
}

string_enum! {
    /// Outcome of an upgrade or one of its steps.
    pub enum UpgradeStatus {
        InProgress => "IN_PROGRESS",
        Succeeded => "SUCCEEDED",
        SucceededWithIssues => "SUCCEEDED_WITH_ISSUES",
        Failed => "FAILED",
    }
}

string_enum! {
    /// Whether a configuration change has been applied.
    pub enum OptionState {
        RequiresIndexDocuments => "RequiresIndexDocuments",
        Processing => "Processing",
        Active => "Active",
    }
}

// ---------------------------------------------------------------------------
// Domain configuration
// ---------------------------------------------------------------------------

/// Key/value tag attached to a domain.
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

/// Number of availability zones when zone awareness is enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ZoneAwarenessConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone_count: Option<i32>,
}

/// Instance layout of a domain.
///
/// Instance types are free-form strings such as `m5.large.elasticsearch`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElasticsearchClusterConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedicated_master_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_awareness_enabled: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub zone_awareness_config: Option<ZoneAwarenessConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedicated_master_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedicated_master_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warm_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warm_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warm_count: Option<i32>,
}

/// EBS storage attached to data nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EbsOptions {
    #[serde(rename = "EBSEnabled", skip_serializing_if = "Option::is_none")]
    pub ebs_enabled: Option<bool>,
    #[serde(rename = "VolumeType", skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<VolumeType>,
    /// Size per node in GiB.
    #[serde(rename = "VolumeSize", skip_serializing_if = "Option::is_none")]
    pub volume_size: Option<i32>,
    /// Provisioned IOPS, for `io1` volumes only.
    #[serde(rename = "Iops", skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,
}

/// Daily automated snapshot settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SnapshotOptions {
    /// Hour of day, UTC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automated_snapshot_start_hour: Option<i32>,
}

/// Subnets and security groups for a VPC domain, as sent on create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VpcOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<Vec<String>>,
}

/// VPC placement of a domain, as reported by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VpcDerivedInfo {
    #[serde(rename = "VPCId", skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    #[serde(
        rename = "SubnetIds",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub subnet_ids: Option<Vec<String>>,
    #[serde(
        rename = "AvailabilityZones",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub availability_zones: Option<Vec<String>>,
    #[serde(
        rename = "SecurityGroupIds",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub security_group_ids: Option<Vec<String>>,
}

/// Amazon Cognito authentication for Kibana.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CognitoOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EncryptionAtRestOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NodeToNodeEncryptionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Where one log type is published.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LogPublishingOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_watch_logs_log_group_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// State of the service software running on a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceSoftwareOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_status: Option<DeploymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "awsbind_core::json::epoch_seconds"
    )]
    pub automated_update_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional_deployment: Option<bool>,
}

/// HTTPS enforcement on the domain endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainEndpointOptions {
    #[serde(rename = "EnforceHTTPS", skip_serializing_if = "Option::is_none")]
    pub enforce_https: Option<bool>,
    #[serde(rename = "TLSSecurityPolicy", skip_serializing_if = "Option::is_none")]
    pub tls_security_policy: Option<TlsSecurityPolicy>,
}

/// Fine-grained access control, as reported by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdvancedSecurityOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_user_database_enabled: Option<bool>,
}

/// Master user for fine-grained access control. Either an IAM ARN or an
/// internal user name and password.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterUserOptions {
    #[serde(rename = "MasterUserARN", skip_serializing_if = "Option::is_none")]
    pub master_user_arn: Option<String>,
    #[serde(rename = "MasterUserName", skip_serializing_if = "Option::is_none")]
    pub master_user_name: Option<String>,
    #[serde(rename = "MasterUserPassword", skip_serializing_if = "Option::is_none")]
    pub master_user_password: Option<String>,
}

impl std::fmt::Debug for MasterUserOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MasterUserOptions")
            .field("master_user_arn", &self.master_user_arn)
            .field("master_user_name", &self.master_user_name)
            .field(
                "master_user_password",
                &self.master_user_password.as_ref().map(|_| "***"),
            )
            .finish()
    }
}

/// Fine-grained access control, as sent on create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdvancedSecurityOptionsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_user_database_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_options: Option<MasterUserOptions>,
}

// ---------------------------------------------------------------------------
// Domains
// ---------------------------------------------------------------------------

/// Current state of a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElasticsearchDomainStatus {
    #[serde(rename = "DomainId", skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
    #[serde(rename = "DomainName", skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    #[serde(rename = "ARN", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// `true` once the service has created the domain.
    #[serde(rename = "Created", skip_serializing_if = "Option::is_none")]
    pub created: Option<bool>,
    /// `true` while deletion is in progress.
    #[serde(rename = "Deleted", skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    /// Public endpoint for index and search requests.
    #[serde(rename = "Endpoint", skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// VPC endpoints keyed by kind, e.g. `"vpc"`.
    #[serde(
        rename = "Endpoints",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub endpoints: Option<HashMap<String, String>>,
    /// `true` while configuration changes are being applied.
    #[serde(rename = "Processing", skip_serializing_if = "Option::is_none")]
    pub processing: Option<bool>,
    #[serde(rename = "UpgradeProcessing", skip_serializing_if = "Option::is_none")]
    pub upgrade_processing: Option<bool>,
    #[serde(rename = "ElasticsearchVersion", skip_serializing_if = "Option::is_none")]
    pub elasticsearch_version: Option<String>,
    #[serde(
        rename = "ElasticsearchClusterConfig",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub elasticsearch_cluster_config: Option<ElasticsearchClusterConfig>,
    #[serde(
        rename = "EBSOptions",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub ebs_options: Option<EbsOptions>,
    /// IAM policy document, as a JSON string.
    #[serde(rename = "AccessPolicies", skip_serializing_if = "Option::is_none")]
    pub access_policies: Option<String>,
    #[serde(
        rename = "SnapshotOptions",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub snapshot_options: Option<SnapshotOptions>,
    #[serde(
        rename = "VPCOptions",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub vpc_options: Option<VpcDerivedInfo>,
    #[serde(
        rename = "CognitoOptions",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub cognito_options: Option<CognitoOptions>,
    #[serde(
        rename = "EncryptionAtRestOptions",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub encryption_at_rest_options: Option<EncryptionAtRestOptions>,
    #[serde(
        rename = "NodeToNodeEncryptionOptions",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub node_to_node_encryption_options: Option<NodeToNodeEncryptionOptions>,
    #[serde(
        rename = "AdvancedOptions",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub advanced_options: Option<HashMap<String, String>>,
    /// Keyed by [`LogType`] wire value.
    #[serde(
        rename = "LogPublishingOptions",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub log_publishing_options: Option<HashMap<String, LogPublishingOption>>,
    #[serde(
        rename = "ServiceSoftwareOptions",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub service_software_options: Option<ServiceSoftwareOptions>,
    #[serde(
        rename = "DomainEndpointOptions",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub domain_endpoint_options: Option<DomainEndpointOptions>,
    #[serde(
        rename = "AdvancedSecurityOptions",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub advanced_security_options: Option<AdvancedSecurityOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Domain configuration status
// ---------------------------------------------------------------------------

/// State of the most recent change to one configuration option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OptionStatus {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "awsbind_core::json::epoch_seconds"
    )]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "awsbind_core::json::epoch_seconds"
    )]
    pub update_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_version: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<OptionState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_deletion: Option<bool>,
}

/// A configuration option's value together with its [`OptionStatus`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigStatus<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<T>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub status: Option<OptionStatus>,
}

/// Current configuration of a domain, one status per option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElasticsearchDomainConfig {
    #[serde(
        rename = "ElasticsearchVersion",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub elasticsearch_version: Option<ConfigStatus<String>>,
    #[serde(
        rename = "ElasticsearchClusterConfig",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub elasticsearch_cluster_config: Option<ConfigStatus<ElasticsearchClusterConfig>>,
    #[serde(
        rename = "EBSOptions",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub ebs_options: Option<ConfigStatus<EbsOptions>>,
    /// IAM policy document, as a JSON string.
    #[serde(
        rename = "AccessPolicies",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub access_policies: Option<ConfigStatus<String>>,
    #[serde(
        rename = "SnapshotOptions",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub snapshot_options: Option<ConfigStatus<SnapshotOptions>>,
    #[serde(
        rename = "VPCOptions",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub vpc_options: Option<ConfigStatus<VpcDerivedInfo>>,
    #[serde(
        rename = "CognitoOptions",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub cognito_options: Option<ConfigStatus<CognitoOptions>>,
    #[serde(
        rename = "EncryptionAtRestOptions",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub encryption_at_rest_options: Option<ConfigStatus<EncryptionAtRestOptions>>,
    #[serde(
        rename = "NodeToNodeEncryptionOptions",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub node_to_node_encryption_options: Option<ConfigStatus<NodeToNodeEncryptionOptions>>,
    #[serde(
        rename = "AdvancedOptions",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub advanced_options: Option<ConfigStatus<HashMap<String, String>>>,
    /// Keyed by [`LogType`] wire value.
    #[serde(
        rename = "LogPublishingOptions",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub log_publishing_options: Option<ConfigStatus<HashMap<String, LogPublishingOption>>>,
    #[serde(
        rename = "DomainEndpointOptions",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub domain_endpoint_options: Option<ConfigStatus<DomainEndpointOptions>>,
    #[serde(
        rename = "AdvancedSecurityOptions",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub advanced_security_options: Option<ConfigStatus<AdvancedSecurityOptions>>,
}

// ---------------------------------------------------------------------------
// Versions and upgrades
// ---------------------------------------------------------------------------

/// Versions a domain on `source_version` can upgrade to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompatibleVersionsMap {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_version: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub target_versions: Option<Vec<String>>,
}

/// One step of a past upgrade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpgradeStepItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_step: Option<UpgradeStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_step_status: Option<UpgradeStatus>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub issues: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_percent: Option<f64>,
}

/// A past or running upgrade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpgradeHistory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "awsbind_core::json::epoch_seconds"
    )]
    pub start_timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_status: Option<UpgradeStatus>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub steps_list: Option<Vec<UpgradeStepItem>>,
}
