//! restJson1 request marshallers, one per operation.
//!
//! Every route lives under the `2015-01-01` API version prefix. GET and DELETE
//! routes carry no body.

use awsbind_core::MarshalError;
use awsbind_core::WireRequest;
use awsbind_core::protocol::{RestRequest, Validate};
use awsbind_es_model::ElasticsearchOperation;
use awsbind_es_model::input::{
    AddTagsInput, CreateElasticsearchDomainInput, DeleteElasticsearchDomainInput,
    DescribeElasticsearchDomainConfigInput, DescribeElasticsearchDomainInput,
    DescribeElasticsearchDomainsInput, GetCompatibleElasticsearchVersionsInput,
    GetUpgradeHistoryInput, GetUpgradeStatusInput, ListDomainNamesInput,
    ListElasticsearchVersionsInput, ListTagsInput, RemoveTagsInput,
    UpdateElasticsearchDomainConfigInput, UpgradeElasticsearchDomainInput,
};
use http::Method;

const DOMAIN: &str = "/2015-01-01/es/domain";
const UPGRADE_DOMAIN: &str = "/2015-01-01/es/upgradeDomain";

/// An input that knows its operation and how to bind itself to a request.
pub(crate) trait RestInput: Validate {
    const OPERATION: ElasticsearchOperation;

    fn to_request(&self) -> Result<WireRequest, MarshalError>;
}

impl RestInput for CreateElasticsearchDomainInput {
    const OPERATION: ElasticsearchOperation = ElasticsearchOperation::CreateElasticsearchDomain;

    fn to_request(&self) -> Result<WireRequest, MarshalError> {
        Ok(RestRequest::new(Method::POST, DOMAIN).json(self)?.build())
    }
}

impl RestInput for DeleteElasticsearchDomainInput {
    const OPERATION: ElasticsearchOperation = ElasticsearchOperation::DeleteElasticsearchDomain;

    fn to_request(&self) -> Result<WireRequest, MarshalError> {
        Ok(RestRequest::new(Method::DELETE, DOMAIN)
            .label("DomainName", &self.domain_name)?
            .build())
    }
}

impl RestInput for DescribeElasticsearchDomainInput {
    const OPERATION: ElasticsearchOperation = ElasticsearchOperation::DescribeElasticsearchDomain;

    fn to_request(&self) -> Result<WireRequest, MarshalError> {
        Ok(RestRequest::new(Method::GET, DOMAIN)
            .label("DomainName", &self.domain_name)?
            .build())
    }
}

impl RestInput for DescribeElasticsearchDomainsInput {
    const OPERATION: ElasticsearchOperation = ElasticsearchOperation::DescribeElasticsearchDomains;

    fn to_request(&self) -> Result<WireRequest, MarshalError> {
        Ok(RestRequest::new(Method::POST, "/2015-01-01/es/domain-info")
            .json(self)?
            .build())
    }
}

impl RestInput for ListDomainNamesInput {
    const OPERATION: ElasticsearchOperation = ElasticsearchOperation::ListDomainNames;

    fn to_request(&self) -> Result<WireRequest, MarshalError> {
        Ok(RestRequest::new(Method::GET, "/2015-01-01/domain").build())
    }
}

impl RestInput for DescribeElasticsearchDomainConfigInput {
    const OPERATION: ElasticsearchOperation =
        ElasticsearchOperation::DescribeElasticsearchDomainConfig;

    fn to_request(&self) -> Result<WireRequest, MarshalError> {
        Ok(RestRequest::new(Method::GET, DOMAIN)
            .label("DomainName", &self.domain_name)?
            .segment("config")
            .build())
    }
}

impl RestInput for UpdateElasticsearchDomainConfigInput {
    const OPERATION: ElasticsearchOperation =
        ElasticsearchOperation::UpdateElasticsearchDomainConfig;

    fn to_request(&self) -> Result<WireRequest, MarshalError> {
        Ok(RestRequest::new(Method::POST, DOMAIN)
            .label("DomainName", &self.domain_name)?
            .segment("config")
            .json(self)?
            .build())
    }
}

impl RestInput for AddTagsInput {
    const OPERATION: ElasticsearchOperation = ElasticsearchOperation::AddTags;

    fn to_request(&self) -> Result<WireRequest, MarshalError> {
        Ok(RestRequest::new(Method::POST, "/2015-01-01/tags")
            .json(self)?
            .build())
    }
}

impl RestInput for RemoveTagsInput {
    const OPERATION: ElasticsearchOperation = ElasticsearchOperation::RemoveTags;

    fn to_request(&self) -> Result<WireRequest, MarshalError> {
        Ok(RestRequest::new(Method::POST, "/2015-01-01/tags-removal")
            .json(self)?
            .build())
    }
}

impl RestInput for ListTagsInput {
    const OPERATION: ElasticsearchOperation = ElasticsearchOperation::ListTags;

    fn to_request(&self) -> Result<WireRequest, MarshalError> {
        Ok(RestRequest::new(Method::GET, "/2015-01-01/tags/")
            .query("arn", &self.arn)
            .build())
    }
}

impl RestInput for ListElasticsearchVersionsInput {
    const OPERATION: ElasticsearchOperation = ElasticsearchOperation::ListElasticsearchVersions;

    fn to_request(&self) -> Result<WireRequest, MarshalError> {
        Ok(RestRequest::new(Method::GET, "/2015-01-01/es/versions")
            .query_opt("maxResults", self.max_results)
            .query_opt("nextToken", self.next_token.as_deref())
            .build())
    }
}

impl RestInput for GetCompatibleElasticsearchVersionsInput {
    const OPERATION: ElasticsearchOperation =
        ElasticsearchOperation::GetCompatibleElasticsearchVersions;

    fn to_request(&self) -> Result<WireRequest, MarshalError> {
        Ok(RestRequest::new(Method::GET, "/2015-01-01/es/compatibleVersions")
            .query_opt("domainName", self.domain_name.as_deref())
            .build())
    }
}

impl RestInput for UpgradeElasticsearchDomainInput {
    const OPERATION: ElasticsearchOperation = ElasticsearchOperation::UpgradeElasticsearchDomain;

    fn to_request(&self) -> Result<WireRequest, MarshalError> {
        Ok(RestRequest::new(Method::POST, UPGRADE_DOMAIN)
            .json(self)?
            .build())
    }
}

impl RestInput for GetUpgradeStatusInput {
    const OPERATION: ElasticsearchOperation = ElasticsearchOperation::GetUpgradeStatus;

    fn to_request(&self) -> Result<WireRequest, MarshalError> {
        Ok(RestRequest::new(Method::GET, UPGRADE_DOMAIN)
            .label("DomainName", &self.domain_name)?
            .segment("status")
            .build())
    }
}

impl RestInput for GetUpgradeHistoryInput {
    const OPERATION: ElasticsearchOperation = ElasticsearchOperation::GetUpgradeHistory;

    fn to_request(&self) -> Result<WireRequest, MarshalError> {
        Ok(RestRequest::new(Method::GET, UPGRADE_DOMAIN)
            .label("DomainName", &self.domain_name)?
            .segment("history")
            .query_opt("maxResults", self.max_results)
            .query_opt("nextToken", self.next_token.as_deref())
            .build())
    }
}

#[cfg(test)]
mod tests {
    use awsbind_es_model::types::Tag;

    use super::*;

    #[test]
    fn test_should_bind_domain_name_to_path() {
        let req = DeleteElasticsearchDomainInput {
            domain_name: "logs".to_owned(),
        }
        .to_request()
        .unwrap();
        assert_eq!(req.method, Method::DELETE);
        assert_eq!(req.path, "/2015-01-01/es/domain/logs");
        assert!(req.body.is_empty());
        assert!(req.header("content-type").is_none());
    }

    #[test]
    fn test_should_send_create_input_as_body() {
        let req = CreateElasticsearchDomainInput::new("logs").to_request().unwrap();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.path, DOMAIN);
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.json_body(), Some(serde_json::json!({"DomainName": "logs"})));
    }

    #[test]
    fn test_should_put_arn_in_list_tags_query() {
        let req = ListTagsInput {
            arn: "arn:aws:es:us-east-1:123456789012:domain/logs".to_owned(),
        }
        .to_request()
        .unwrap();
        assert_eq!(
            req.path_and_query(),
            "/2015-01-01/tags/?arn=arn%3Aaws%3Aes%3Aus-east-1%3A123456789012%3Adomain%2Flogs"
        );
        assert!(req.body.is_empty());
    }

    #[test]
    fn test_should_omit_absent_query_members() {
        let req = ListElasticsearchVersionsInput::default().to_request().unwrap();
        assert_eq!(req.path_and_query(), "/2015-01-01/es/versions");

        let req = ListElasticsearchVersionsInput {
            max_results: Some(20),
            next_token: Some("t/1".to_owned()),
        }
        .to_request()
        .unwrap();
        assert_eq!(
            req.path_and_query(),
            "/2015-01-01/es/versions?maxResults=20&nextToken=t%2F1"
        );
    }

    #[test]
    fn test_should_build_upgrade_history_route() {
        let req = GetUpgradeHistoryInput {
            domain_name: "logs".to_owned(),
            max_results: Some(5),
            next_token: None,
        }
        .to_request()
        .unwrap();
        assert_eq!(
            req.path_and_query(),
            "/2015-01-01/es/upgradeDomain/logs/history?maxResults=5"
        );

        let req = GetUpgradeStatusInput {
            domain_name: "logs".to_owned(),
        }
        .to_request()
        .unwrap();
        assert_eq!(req.path, "/2015-01-01/es/upgradeDomain/logs/status");
    }

    #[test]
    fn test_should_send_tag_bodies() {
        let req = AddTagsInput {
            arn: "arn".to_owned(),
            tag_list: vec![Tag::new("env", "prod")],
        }
        .to_request()
        .unwrap();
        assert_eq!(req.path, "/2015-01-01/tags");
        assert_eq!(
            req.json_body(),
            Some(serde_json::json!({"ARN": "arn", "TagList": [{"Key": "env", "Value": "prod"}]}))
        );

        let req = RemoveTagsInput {
            arn: "arn".to_owned(),
            tag_keys: vec!["env".to_owned()],
        }
        .to_request()
        .unwrap();
        assert_eq!(req.path, "/2015-01-01/tags-removal");
        assert_eq!(
            req.json_body(),
            Some(serde_json::json!({"ARN": "arn", "TagKeys": ["env"]}))
        );
    }

    #[test]
    fn test_should_route_domain_config() {
        let req = DescribeElasticsearchDomainConfigInput {
            domain_name: "logs".to_owned(),
        }
        .to_request()
        .unwrap();
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path, "/2015-01-01/es/domain/logs/config");
        assert!(req.body.is_empty());

        let req = UpdateElasticsearchDomainConfigInput {
            access_policies: Some("{}".to_owned()),
            ..UpdateElasticsearchDomainConfigInput::new("logs")
        }
        .to_request()
        .unwrap();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.path, "/2015-01-01/es/domain/logs/config");
        assert_eq!(req.json_body(), Some(serde_json::json!({"AccessPolicies": "{}"})));
    }

    #[test]
    fn test_should_route_every_operation_once() {
        let ops = [
            CreateElasticsearchDomainInput::OPERATION,
            DeleteElasticsearchDomainInput::OPERATION,
            DescribeElasticsearchDomainInput::OPERATION,
            DescribeElasticsearchDomainsInput::OPERATION,
            ListDomainNamesInput::OPERATION,
            DescribeElasticsearchDomainConfigInput::OPERATION,
            UpdateElasticsearchDomainConfigInput::OPERATION,
            AddTagsInput::OPERATION,
            RemoveTagsInput::OPERATION,
            ListTagsInput::OPERATION,
            ListElasticsearchVersionsInput::OPERATION,
            GetCompatibleElasticsearchVersionsInput::OPERATION,
            UpgradeElasticsearchDomainInput::OPERATION,
            GetUpgradeStatusInput::OPERATION,
            GetUpgradeHistoryInput::OPERATION,
        ];
        assert_eq!(ops, ElasticsearchOperation::ALL);
    }
}
