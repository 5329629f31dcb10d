//! Amazon Elasticsearch Service operation enum and service metadata.

use std::fmt;

use awsbind_core::protocol::{Protocol, ServiceMetadata};

/// Amazon Elasticsearch Service speaks restJson1; each operation has its own
/// method and URI under `/2015-01-01`.
pub static ES_METADATA: ServiceMetadata = ServiceMetadata {
    service_name: "Elasticsearch Service",
    endpoint_prefix: "es",
    signing_name: "es",
    protocol: Protocol::RestJson,
};

/// All supported Amazon Elasticsearch Service operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElasticsearchOperation {
    // Domains
    CreateElasticsearchDomain,
    DeleteElasticsearchDomain,
    DescribeElasticsearchDomain,
    DescribeElasticsearchDomains,
    ListDomainNames,
    DescribeElasticsearchDomainConfig,
    UpdateElasticsearchDomainConfig,

    // Tagging
    AddTags,
    RemoveTags,
    ListTags,

    // Versions and upgrades
    ListElasticsearchVersions,
    GetCompatibleElasticsearchVersions,
    UpgradeElasticsearchDomain,
    GetUpgradeStatus,
    GetUpgradeHistory,
}

impl ElasticsearchOperation {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::CreateElasticsearchDomain,
        Self::DeleteElasticsearchDomain,
        Self::DescribeElasticsearchDomain,
        Self::DescribeElasticsearchDomains,
        Self::ListDomainNames,
        Self::DescribeElasticsearchDomainConfig,
        Self::UpdateElasticsearchDomainConfig,
        Self::AddTags,
        Self::RemoveTags,
        Self::ListTags,
        Self::ListElasticsearchVersions,
        Self::GetCompatibleElasticsearchVersions,
        Self::UpgradeElasticsearchDomain,
        Self::GetUpgradeStatus,
        Self::GetUpgradeHistory,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateElasticsearchDomain => "CreateElasticsearchDomain",
            Self::DeleteElasticsearchDomain => "DeleteElasticsearchDomain",
            Self::DescribeElasticsearchDomain => "DescribeElasticsearchDomain",
            Self::DescribeElasticsearchDomains => "DescribeElasticsearchDomains",
            Self::ListDomainNames => "ListDomainNames",
            Self::DescribeElasticsearchDomainConfig => "DescribeElasticsearchDomainConfig",
            Self::UpdateElasticsearchDomainConfig => "UpdateElasticsearchDomainConfig",
            Self::AddTags => "AddTags",
            Self::RemoveTags => "RemoveTags",
            Self::ListTags => "ListTags",
            Self::ListElasticsearchVersions => "ListElasticsearchVersions",
            Self::GetCompatibleElasticsearchVersions => "GetCompatibleElasticsearchVersions",
            Self::UpgradeElasticsearchDomain => "UpgradeElasticsearchDomain",
            Self::GetUpgradeStatus => "GetUpgradeStatus",
            Self::GetUpgradeHistory => "GetUpgradeHistory",
        }
    }

    /// Parse an operation name string into an `ElasticsearchOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == name)
    }
}

impl fmt::Display for ElasticsearchOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_round_trip_operation_names() {
        for op in ElasticsearchOperation::ALL {
            assert_eq!(ElasticsearchOperation::from_name(op.as_str()), Some(op));
        }
        assert_eq!(ElasticsearchOperation::from_name("UpdateElasticsearchDomainConfig"), None);
    }

    #[test]
    fn test_should_use_plain_json_content_type() {
        assert_eq!(ES_METADATA.content_type(), "application/json");
        assert_eq!(ES_METADATA.protocol, Protocol::RestJson);
    }
}
