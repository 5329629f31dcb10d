//! Amazon Elasticsearch Service input types for the 15 operations.
//!
//! Members bound to the URI are marked `(path)` or `(query)`; the client's
//! marshallers place them and serialize only the remaining members as the
//! JSON body.

use std::collections::HashMap;

use awsbind_core::MarshalError;
use awsbind_core::protocol::{Validate, require, require_items};
use serde::{Deserialize, Serialize};

use crate::types::{
    AdvancedSecurityOptionsInput, CognitoOptions, DomainEndpointOptions, EbsOptions,
    ElasticsearchClusterConfig, EncryptionAtRestOptions, LogPublishingOption,
    NodeToNodeEncryptionOptions, SnapshotOptions, Tag, VpcOptions,
};

const DOMAIN_NAME_MIN: usize = 3;
const DOMAIN_NAME_MAX: usize = 28;

/// Domain names start with a lowercase letter and continue with lowercase
/// letters, digits or hyphens.
fn validate_new_domain_name(name: &str) -> Result<(), MarshalError> {
    require("DomainName", name)?;
    let len = name.len();
    if !(DOMAIN_NAME_MIN..=DOMAIN_NAME_MAX).contains(&len) {
        return Err(MarshalError::InvalidArgument(format!(
            "DomainName must be {DOMAIN_NAME_MIN} to {DOMAIN_NAME_MAX} characters, got {len}"
        )));
    }
    let mut chars = name.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_lowercase());
    let rest_valid = chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !starts_with_letter || !rest_valid {
        return Err(MarshalError::InvalidArgument(format!(
            "DomainName {name:?} must match [a-z][a-z0-9-]+"
        )));
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

// ---------------------------------------------------------------------------
// Domains
// ---------------------------------------------------------------------------

/// Input for the `CreateElasticsearchDomain` operation. Every member goes in
/// the body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateElasticsearchDomainInput {
    #[serde(rename = "DomainName")]
    pub domain_name: String,

    /// Defaults to the service's current default version when absent.
    #[serde(rename = "ElasticsearchVersion", skip_serializing_if = "Option::is_none")]
    pub elasticsearch_version: Option<String>,

    #[serde(rename = "ElasticsearchClusterConfig", skip_serializing_if = "Option::is_none")]
    pub elasticsearch_cluster_config: Option<ElasticsearchClusterConfig>,

    #[serde(rename = "EBSOptions", skip_serializing_if = "Option::is_none")]
    pub ebs_options: Option<EbsOptions>,

    /// IAM policy document, as a JSON string.
    #[serde(rename = "AccessPolicies", skip_serializing_if = "Option::is_none")]
    pub access_policies: Option<String>,

    #[serde(rename = "SnapshotOptions", skip_serializing_if = "Option::is_none")]
    pub snapshot_options: Option<SnapshotOptions>,

    #[serde(rename = "VPCOptions", skip_serializing_if = "Option::is_none")]
    pub vpc_options: Option<VpcOptions>,

    #[serde(rename = "CognitoOptions", skip_serializing_if = "Option::is_none")]
    pub cognito_options: Option<CognitoOptions>,

    #[serde(rename = "EncryptionAtRestOptions", skip_serializing_if = "Option::is_none")]
    pub encryption_at_rest_options: Option<EncryptionAtRestOptions>,

    #[serde(rename = "NodeToNodeEncryptionOptions", skip_serializing_if = "Option::is_none")]
    pub node_to_node_encryption_options: Option<NodeToNodeEncryptionOptions>,

    #[serde(rename = "AdvancedOptions", skip_serializing_if = "Option::is_none")]
    pub advanced_options: Option<HashMap<String, String>>,

    /// Keyed by `LogType` wire value.
    #[serde(rename = "LogPublishingOptions", skip_serializing_if = "Option::is_none")]
    pub log_publishing_options: Option<HashMap<String, LogPublishingOption>>,

    #[serde(rename = "DomainEndpointOptions", skip_serializing_if = "Option::is_none")]
    pub domain_endpoint_options: Option<DomainEndpointOptions>,

    #[serde(rename = "AdvancedSecurityOptions", skip_serializing_if = "Option::is_none")]
    pub advanced_security_options: Option<AdvancedSecurityOptionsInput>,
}

impl CreateElasticsearchDomainInput {
    /// An input with only the domain name set.
    pub fn new(domain_name: impl Into<String>) -> Self {
        Self {
            domain_name: domain_name.into(),
            ..Default::default()
        }
    }
}

impl Validate for CreateElasticsearchDomainInput {
    fn validate(&self) -> Result<(), MarshalError> {
        validate_new_domain_name(&self.domain_name)
    }
}

/// Input for the `DeleteElasticsearchDomain` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteElasticsearchDomainInput {
    /// (path)
    pub domain_name: String,
}

impl Validate for DeleteElasticsearchDomainInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("DomainName", &self.domain_name)
    }
}

/// Input for the `DescribeElasticsearchDomain` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeElasticsearchDomainInput {
    /// (path)
    pub domain_name: String,
}

impl Validate for DescribeElasticsearchDomainInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("DomainName", &self.domain_name)
    }
}

/// Input for the `DescribeElasticsearchDomains` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeElasticsearchDomainsInput {
    pub domain_names: Vec<String>,
}

impl Validate for DescribeElasticsearchDomainsInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require_items("DomainNames", &self.domain_names)?;
        self.domain_names
            .iter()
            .try_for_each(|name| require("DomainNames[]", name))
    }
}

/// Input for the `ListDomainNames` operation, which takes no members.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDomainNamesInput {}

impl Validate for ListDomainNamesInput {
    fn validate(&self) -> Result<(), MarshalError> {
        Ok(())
    }
}

/// Input for the `DescribeElasticsearchDomainConfig` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeElasticsearchDomainConfigInput {
    /// (path)
    pub domain_name: String,
}

impl Validate for DescribeElasticsearchDomainConfigInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("DomainName", &self.domain_name)
    }
}

/// Input for the `UpdateElasticsearchDomainConfig` operation. Only the
/// options that are set are changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateElasticsearchDomainConfigInput {
    /// (path)
    #[serde(skip)]
    pub domain_name: String,

    #[serde(rename = "ElasticsearchClusterConfig", skip_serializing_if = "Option::is_none")]
    pub elasticsearch_cluster_config: Option<ElasticsearchClusterConfig>,

    #[serde(rename = "EBSOptions", skip_serializing_if = "Option::is_none")]
    pub ebs_options: Option<EbsOptions>,

    #[serde(rename = "SnapshotOptions", skip_serializing_if = "Option::is_none")]
    pub snapshot_options: Option<SnapshotOptions>,

    #[serde(rename = "VPCOptions", skip_serializing_if = "Option::is_none")]
    pub vpc_options: Option<VpcOptions>,

    #[serde(rename = "CognitoOptions", skip_serializing_if = "Option::is_none")]
    pub cognito_options: Option<CognitoOptions>,

    #[serde(rename = "AdvancedOptions", skip_serializing_if = "Option::is_none")]
    pub advanced_options: Option<HashMap<String, String>>,

    /// IAM policy document, as a JSON string.
    #[serde(rename = "AccessPolicies", skip_serializing_if = "Option::is_none")]
    pub access_policies: Option<String>,

    #[serde(rename = "LogPublishingOptions", skip_serializing_if = "Option::is_none")]
    pub log_publishing_options: Option<HashMap<String, LogPublishingOption>>,

    #[serde(rename = "DomainEndpointOptions", skip_serializing_if = "Option::is_none")]
    pub domain_endpoint_options: Option<DomainEndpointOptions>,

    #[serde(rename = "AdvancedSecurityOptions", skip_serializing_if = "Option::is_none")]
    pub advanced_security_options: Option<AdvancedSecurityOptionsInput>,
}

impl UpdateElasticsearchDomainConfigInput {
    /// An input that changes nothing yet.
    pub fn new(domain_name: impl Into<String>) -> Self {
        Self {
            domain_name: domain_name.into(),
            ..Default::default()
        }
    }
}

impl Validate for UpdateElasticsearchDomainConfigInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("DomainName", &self.domain_name)
    }
}

// ---------------------------------------------------------------------------
// Tagging
// ---------------------------------------------------------------------------

/// Input for the `AddTags` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddTagsInput {
    #[serde(rename = "ARN")]
    pub arn: String,
    #[serde(rename = "TagList")]
    pub tag_list: Vec<Tag>,
}

impl Validate for AddTagsInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("ARN", &self.arn)?;
        require_items("TagList", &self.tag_list)?;
        self.tag_list
            .iter()
            .try_for_each(|tag| require("TagList[].Key", &tag.key))
    }
}

/// Input for the `RemoveTags` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveTagsInput {
    #[serde(rename = "ARN")]
    pub arn: String,
    #[serde(rename = "TagKeys")]
    pub tag_keys: Vec<String>,
}

impl Validate for RemoveTagsInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("ARN", &self.arn)?;
        require_items("TagKeys", &self.tag_keys)
    }
}

/// Input for the `ListTags` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTagsInput {
    /// (query `arn`)
    #[serde(rename = "ARN")]
    pub arn: String,
}

impl Validate for ListTagsInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("ARN", &self.arn)
    }
}

// ---------------------------------------------------------------------------
// Versions and upgrades
// ---------------------------------------------------------------------------

/// Input for the `ListElasticsearchVersions` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListElasticsearchVersionsInput {
    /// (query `maxResults`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// (query `nextToken`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl Validate for ListElasticsearchVersionsInput {
    fn validate(&self) -> Result<(), MarshalError> {
        validate_max_results(self.max_results)
    }
}

/// Input for the `GetCompatibleElasticsearchVersions` operation. Without a
/// domain name the service returns the full compatibility matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCompatibleElasticsearchVersionsInput {
    /// (query `domainName`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
}

impl Validate for GetCompatibleElasticsearchVersionsInput {
    fn validate(&self) -> Result<(), MarshalError> {
        match &self.domain_name {
            Some(name) => require("DomainName", name),
            None => Ok(()),
        }
    }
}

/// Input for the `UpgradeElasticsearchDomain` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpgradeElasticsearchDomainInput {
    pub domain_name: String,
    pub target_version: String,
    /// Only run the eligibility check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perform_check_only: Option<bool>,
}

impl Validate for UpgradeElasticsearchDomainInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("DomainName", &self.domain_name)?;
        require("TargetVersion", &self.target_version)
    }
}

/// Input for the `GetUpgradeStatus` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetUpgradeStatusInput {
    /// (path)
    pub domain_name: String,
}

impl Validate for GetUpgradeStatusInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("DomainName", &self.domain_name)
    }
}

/// Input for the `GetUpgradeHistory` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetUpgradeHistoryInput {
    /// (path)
    pub domain_name: String,
    /// (query `maxResults`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// (query `nextToken`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl Validate for GetUpgradeHistoryInput {
    fn validate(&self) -> Result<(), MarshalError> {
        require("DomainName", &self.domain_name)?;
        validate_max_results(self.max_results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_round_trip_create_domain() {
        use crate::types::{
            AdvancedSecurityOptionsInput, CognitoOptions, DomainEndpointOptions, EbsOptions,
            ElasticsearchClusterConfig, EncryptionAtRestOptions, LogPublishingOption, LogType,
            MasterUserOptions, NodeToNodeEncryptionOptions, SnapshotOptions, TlsSecurityPolicy,
            VolumeType, VpcOptions, ZoneAwarenessConfig,
        };

        let input = CreateElasticsearchDomainInput {
            elasticsearch_version: Some("7.4".to_owned()),
            elasticsearch_cluster_config: Some(ElasticsearchClusterConfig {
                instance_type: Some("r5.large.elasticsearch".to_owned()),
                instance_count: Some(4),
                dedicated_master_enabled: Some(true),
                zone_awareness_enabled: Some(true),
                zone_awareness_config: Some(ZoneAwarenessConfig {
                    availability_zone_count: Some(2),
                }),
                dedicated_master_type: Some("c5.large.elasticsearch".to_owned()),
                dedicated_master_count: Some(3),
                warm_enabled: Some(false),
                ..Default::default()
            }),
            ebs_options: Some(EbsOptions {
                ebs_enabled: Some(true),
                volume_type: Some(VolumeType::Io1),
                volume_size: Some(100),
                iops: Some(1000),
            }),
            access_policies: Some(r#"{"Version":"2012-10-17","Statement":[]}"#.to_owned()),
            snapshot_options: Some(SnapshotOptions {
                automated_snapshot_start_hour: Some(3),
            }),
            vpc_options: Some(VpcOptions {
                subnet_ids: Some(vec!["subnet-1".to_owned(), "subnet-2".to_owned()]),
                security_group_ids: Some(vec!["sg-1".to_owned()]),
            }),
            cognito_options: Some(CognitoOptions {
                enabled: Some(true),
                user_pool_id: Some("us-east-1_pool".to_owned()),
                identity_pool_id: Some("us-east-1:identity".to_owned()),
                role_arn: Some("arn:aws:iam::123456789012:role/CognitoAccess".to_owned()),
            }),
            encryption_at_rest_options: Some(EncryptionAtRestOptions {
                enabled: Some(true),
                kms_key_id: Some("alias/es".to_owned()),
            }),
            node_to_node_encryption_options: Some(NodeToNodeEncryptionOptions {
                enabled: Some(true),
            }),
            advanced_options: Some(HashMap::from([(
                "rest.action.multi.allow_explicit_index".to_owned(),
                "true".to_owned(),
            )])),
            log_publishing_options: Some(HashMap::from([(
                LogType::SearchSlowLogs.as_str().to_owned(),
                LogPublishingOption {
                    cloud_watch_logs_log_group_arn: Some(
                        "arn:aws:logs:us-east-1:123456789012:log-group:slow".to_owned(),
                    ),
                    enabled: Some(true),
                },
            )])),
            domain_endpoint_options: Some(DomainEndpointOptions {
                enforce_https: Some(true),
                tls_security_policy: Some(TlsSecurityPolicy::PolicyMinTls12),
            }),
            advanced_security_options: Some(AdvancedSecurityOptionsInput {
                enabled: Some(true),
                internal_user_database_enabled: Some(true),
                master_user_options: Some(MasterUserOptions {
                    master_user_name: Some("admin".to_owned()),
                    master_user_password: Some("Passw0rd!".to_owned()),
                    ..Default::default()
                }),
            }),
            ..CreateElasticsearchDomainInput::new("logs-prod")
        };
        input.validate().unwrap();

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["EBSOptions"]["EBSEnabled"], true);
        assert_eq!(value["VPCOptions"]["SubnetIds"][1], "subnet-2");
        let decoded: CreateElasticsearchDomainInput = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn test_should_accept_valid_domain_name() {
        assert!(CreateElasticsearchDomainInput::new("logs-prod-1").validate().is_ok());
    }

    #[test]
    fn test_should_reject_malformed_domain_names() {
        for name in ["", "ab", "Logs", "1logs", "logs_prod", "a-name-that-is-way-too-long-x"] {
            let err = CreateElasticsearchDomainInput::new(name).validate().unwrap_err();
            assert!(
                matches!(err, MarshalError::InvalidArgument(ref m) if m.contains("DomainName")),
                "{name:?} gave {err}"
            );
        }
    }

    #[test]
    fn test_should_serialize_create_body_with_acronym_members() {
        let input = CreateElasticsearchDomainInput {
            elasticsearch_version: Some("7.4".to_owned()),
            ebs_options: Some(EbsOptions {
                ebs_enabled: Some(true),
                volume_size: Some(10),
                ..Default::default()
            }),
            ..CreateElasticsearchDomainInput::new("logs")
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            serde_json::json!({
                "DomainName": "logs",
                "ElasticsearchVersion": "7.4",
                "EBSOptions": {"EBSEnabled": true, "VolumeSize": 10}
            })
        );
    }

    #[test]
    fn test_should_require_tags_and_arn() {
        let err = AddTagsInput {
            arn: "arn:aws:es:us-east-1:1:domain/logs".to_owned(),
            tag_list: vec![],
        }
        .validate()
        .unwrap_err();
        assert!(err.to_string().contains("TagList"));

        let err = RemoveTagsInput {
            tag_keys: vec!["env".to_owned()],
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert!(err.to_string().contains("ARN"));
    }

    #[test]
    fn test_should_reject_empty_domain_name_in_list() {
        let input = DescribeElasticsearchDomainsInput {
            domain_names: vec!["logs".to_owned(), String::new()],
        };
        assert!(input.validate().is_err());
        assert!(DescribeElasticsearchDomainsInput::default().validate().is_err());
    }

    #[test]
    fn test_should_reject_non_positive_max_results() {
        let input = GetUpgradeHistoryInput {
            domain_name: "logs".to_owned(),
            max_results: Some(0),
            next_token: None,
        };
        assert!(input.validate().unwrap_err().to_string().contains("MaxResults"));
    }

    #[test]
    fn test_should_allow_missing_compatible_versions_domain() {
        assert!(GetCompatibleElasticsearchVersionsInput::default().validate().is_ok());
        let input = GetCompatibleElasticsearchVersionsInput {
            domain_name: Some(String::new()),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_should_keep_domain_name_out_of_update_body() {
        let input = UpdateElasticsearchDomainConfigInput {
            snapshot_options: Some(SnapshotOptions {
                automated_snapshot_start_hour: Some(4),
            }),
            ..UpdateElasticsearchDomainConfigInput::new("logs")
        };
        input.validate().unwrap();
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            serde_json::json!({"SnapshotOptions": {"AutomatedSnapshotStartHour": 4}})
        );
        assert!(UpdateElasticsearchDomainConfigInput::default().validate().is_err());
    }
}
