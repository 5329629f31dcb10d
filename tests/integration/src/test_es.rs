//! Amazon Elasticsearch Service integration tests.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use awsbind_core::test_util::MockTransport;
    use awsbind_es::ElasticsearchClient;
    use awsbind_es::model::ElasticsearchError;
    use awsbind_es::model::input::{
        CreateElasticsearchDomainInput, DeleteElasticsearchDomainInput,
        DescribeElasticsearchDomainInput, ListDomainNamesInput, ListTagsInput,
    };

    use crate::{live_config, mock_config, test_resource_name};

    #[test]
    fn test_should_resolve_resource_not_found() -> anyhow::Result<()> {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(
            409,
            r#"{"__type":"ResourceNotFoundException","Message":"no such domain"}"#,
        );

        let err = ElasticsearchClient::new(&mock_config(&mock))?
            .describe_elasticsearch_domain(&DescribeElasticsearchDomainInput {
                domain_name: "missing".to_owned(),
            })
            .unwrap_err();
        let service = err.into_service_error().expect("service error");
        assert!(matches!(
            service,
            ElasticsearchError::ResourceNotFoundException { .. }
        ));
        assert_eq!(service.code(), Some("ResourceNotFoundException"));
        assert_eq!(service.message(), Some("no such domain"));
        Ok(())
    }

    #[test]
    fn test_should_fall_back_for_unknown_error_code() -> anyhow::Result<()> {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(400, r#"{"__type":"SomeFutureError","Message":"x"}"#);

        let err = ElasticsearchClient::new(&mock_config(&mock))?
            .list_domain_names(&ListDomainNamesInput::default())
            .unwrap_err();
        let service = err.into_service_error().expect("service error");
        assert!(service.is_unhandled());
        assert_eq!(service.code(), Some("SomeFutureError"));
        assert_eq!(service.message(), Some("x"));
        Ok(())
    }

    #[test]
    fn test_should_fall_back_for_non_json_error_body() -> anyhow::Result<()> {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(503, "<html>Service Unavailable</html>");

        let err = ElasticsearchClient::new(&mock_config(&mock))?
            .list_domain_names(&ListDomainNamesInput::default())
            .unwrap_err();
        assert!(err.into_service_error().expect("service error").is_unhandled());
        Ok(())
    }

    #[test]
    fn test_should_sign_rest_request_with_query() -> anyhow::Result<()> {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(200, r#"{"TagList":[{"Key":"env","Value":"dev"}]}"#);

        let output = ElasticsearchClient::new(&mock_config(&mock))?.list_tags(&ListTagsInput {
            arn: "arn:aws:es:us-east-1:123456789012:domain/logs".to_owned(),
        })?;
        assert_eq!(output.tag_list.unwrap_or_default().len(), 1);

        let request = mock.last_request().expect("request was sent");
        assert_eq!(request.method, http::Method::GET);
        assert_eq!(request.query[0].0, "arn");
        let auth = request.header("authorization").expect("signed");
        assert!(auth.contains("/us-east-1/es/aws4_request"));
        Ok(())
    }

    #[test]
    #[ignore = "requires running server"]
    fn test_should_create_and_delete_domain_on_live_server() -> anyhow::Result<()> {
        let client = ElasticsearchClient::new(&live_config())?;
        let name = test_resource_name("awsbind");

        let created = client.create_elasticsearch_domain(&CreateElasticsearchDomainInput::new(&name))?;
        let status = created.domain_status.expect("domain status");
        assert_eq!(status.domain_name.as_deref(), Some(name.as_str()));

        let names = client.list_domain_names(&ListDomainNamesInput::default())?;
        assert!(
            names
                .domain_names
                .unwrap_or_default()
                .iter()
                .any(|d| d.domain_name.as_deref() == Some(name.as_str()))
        );

        client.delete_elasticsearch_domain(&DeleteElasticsearchDomainInput { domain_name: name })?;
        Ok(())
    }
}
