//! Amazon Elasticsearch Service output types.
//!
//! `AddTags` and `RemoveTags` return no members; their client methods
//! return `()`.

use serde::{Deserialize, Serialize};

use crate::types::{
    CompatibleVersionsMap, DomainInfo, ElasticsearchDomainConfig, ElasticsearchDomainStatus, Tag,
    UpgradeHistory, UpgradeStatus, UpgradeStep,
};

/// Output of the `CreateElasticsearchDomain` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateElasticsearchDomainOutput {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub domain_status: Option<ElasticsearchDomainStatus>,
}

/// Output of the `DeleteElasticsearchDomain` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteElasticsearchDomainOutput {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub domain_status: Option<ElasticsearchDomainStatus>,
}

/// Output of the `DescribeElasticsearchDomain` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeElasticsearchDomainOutput {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub domain_status: Option<ElasticsearchDomainStatus>,
}

/// Output of the `DescribeElasticsearchDomains` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeElasticsearchDomainsOutput {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub domain_status_list: Option<Vec<ElasticsearchDomainStatus>>,
}

/// Output of the `ListDomainNames` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDomainNamesOutput {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub domain_names: Option<Vec<DomainInfo>>,
}

/// Output of the `DescribeElasticsearchDomainConfig` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeElasticsearchDomainConfigOutput {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub domain_config: Option<ElasticsearchDomainConfig>,
}

/// Output of the `UpdateElasticsearchDomainConfig` operation: the
/// configuration with the change pending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateElasticsearchDomainConfigOutput {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::object_or_absent"
    )]
    pub domain_config: Option<ElasticsearchDomainConfig>,
}

/// Output of the `ListTags` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsOutput {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub tag_list: Option<Vec<Tag>>,
}

/// Output of the `ListElasticsearchVersions` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListElasticsearchVersionsOutput {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub elasticsearch_versions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output of the `GetCompatibleElasticsearchVersions` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCompatibleElasticsearchVersionsOutput {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub compatible_elasticsearch_versions: Option<Vec<CompatibleVersionsMap>>,
}

/// Output of the `UpgradeElasticsearchDomain` operation. Echoes the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpgradeElasticsearchDomainOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perform_check_only: Option<bool>,
}

/// Output of the `GetUpgradeStatus` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetUpgradeStatusOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_step: Option<UpgradeStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_status: Option<UpgradeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_name: Option<String>,
}

/// Output of the `GetUpgradeHistory` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetUpgradeHistoryOutput {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "awsbind_core::json::list_or_absent"
    )]
    pub upgrade_histories: Option<Vec<UpgradeHistory>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use awsbind_core::json::from_body;

    use super::*;

    #[test]
    fn test_should_decode_describe_domains_output() {
        let output: DescribeElasticsearchDomainsOutput = from_body(
            br#"{"DomainStatusList":[{"DomainName":"a","Processing":true},{"DomainName":"b"}]}"#,
        )
        .unwrap();
        let list = output.domain_status_list.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].processing, Some(true));
        assert_eq!(list[1].domain_name.as_deref(), Some("b"));
    }

    #[test]
    fn test_should_default_empty_body() {
        let output: ListDomainNamesOutput = from_body(b"").unwrap();
        assert!(output.domain_names.is_none());
    }

    #[test]
    fn test_should_decode_upgrade_status() {
        let output: GetUpgradeStatusOutput = from_body(
            br#"{"UpgradeStep":"UPGRADE","StepStatus":"IN_PROGRESS","UpgradeName":"7.1"}"#,
        )
        .unwrap();
        assert_eq!(output.upgrade_step, Some(UpgradeStep::Upgrade));
        assert_eq!(output.step_status, Some(UpgradeStatus::InProgress));
    }

    #[test]
    fn test_should_treat_non_array_tag_list_as_absent() {
        let output: ListTagsOutput = from_body(br#"{"TagList":{"Key":"env"}}"#).unwrap();
        assert!(output.tag_list.is_none());
    }
}
