//! The Amazon Elasticsearch Service client.

use awsbind_core::{BuildError, ClientConfig, ClientError, ClientRuntime, WireRequest};
use awsbind_es_model::input::{
    AddTagsInput, CreateElasticsearchDomainInput, DeleteElasticsearchDomainInput,
    DescribeElasticsearchDomainConfigInput, DescribeElasticsearchDomainInput,
    DescribeElasticsearchDomainsInput, GetCompatibleElasticsearchVersionsInput,
    GetUpgradeHistoryInput, GetUpgradeStatusInput, ListDomainNamesInput,
    ListElasticsearchVersionsInput, ListTagsInput, RemoveTagsInput,
    UpdateElasticsearchDomainConfigInput, UpgradeElasticsearchDomainInput,
};
use awsbind_es_model::output::{
    CreateElasticsearchDomainOutput, DeleteElasticsearchDomainOutput,
    DescribeElasticsearchDomainConfigOutput, DescribeElasticsearchDomainOutput,
    DescribeElasticsearchDomainsOutput, GetCompatibleElasticsearchVersionsOutput,
    GetUpgradeHistoryOutput, GetUpgradeStatusOutput, ListDomainNamesOutput,
    ListElasticsearchVersionsOutput, ListTagsOutput, UpdateElasticsearchDomainConfigOutput,
    UpgradeElasticsearchDomainOutput,
};
use awsbind_es_model::{ES_ERRORS, ES_METADATA, ElasticsearchError};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::marshal::RestInput;

/// Result of an Elasticsearch Service call.
pub type EsResult<T> = Result<T, ClientError<ElasticsearchError>>;

/// Blocking Amazon Elasticsearch Service client.
///
/// Cheap to clone; clones share the transport and signer.
#[derive(Debug, Clone)]
pub struct ElasticsearchClient {
    runtime: ClientRuntime,
}

impl ElasticsearchClient {
    /// Build a client from `config`.
    pub fn new(config: &ClientConfig) -> Result<Self, BuildError> {
        Ok(Self {
            runtime: ClientRuntime::new(&ES_METADATA, config)?,
        })
    }

    /// The runtime this client sends requests through.
    #[must_use]
    pub fn runtime(&self) -> &ClientRuntime {
        &self.runtime
    }

    /// Create a domain. Returns while the domain is still being created.
    pub fn create_elasticsearch_domain(
        &self,
        input: &CreateElasticsearchDomainInput,
    ) -> EsResult<CreateElasticsearchDomainOutput> {
        self.call(input)
    }

    /// Delete a domain and all of its data.
    pub fn delete_elasticsearch_domain(
        &self,
        input: &DeleteElasticsearchDomainInput,
    ) -> EsResult<DeleteElasticsearchDomainOutput> {
        self.call(input)
    }

    /// Describe one domain.
    pub fn describe_elasticsearch_domain(
        &self,
        input: &DescribeElasticsearchDomainInput,
    ) -> EsResult<DescribeElasticsearchDomainOutput> {
        self.call(input)
    }

    /// Describe several domains by name.
    pub fn describe_elasticsearch_domains(
        &self,
        input: &DescribeElasticsearchDomainsInput,
    ) -> EsResult<DescribeElasticsearchDomainsOutput> {
        self.call(input)
    }

    /// List the names of every domain in the region.
    pub fn list_domain_names(&self, input: &ListDomainNamesInput) -> EsResult<ListDomainNamesOutput> {
        self.call(input)
    }

    /// Fetch a domain's configuration together with each option's status.
    pub fn describe_elasticsearch_domain_config(
        &self,
        input: &DescribeElasticsearchDomainConfigInput,
    ) -> EsResult<DescribeElasticsearchDomainConfigOutput> {
        self.call(input)
    }

    /// Change a domain's configuration. Options left unset are not touched.
    pub fn update_elasticsearch_domain_config(
        &self,
        input: &UpdateElasticsearchDomainConfigInput,
    ) -> EsResult<UpdateElasticsearchDomainConfigOutput> {
        self.call(input)
    }

    /// Attach tags to a domain.
    pub fn add_tags(&self, input: &AddTagsInput) -> EsResult<()> {
        self.call_unit(input)
    }

    /// Remove tags from a domain by key.
    pub fn remove_tags(&self, input: &RemoveTagsInput) -> EsResult<()> {
        self.call_unit(input)
    }

    /// List the tags on a domain.
    pub fn list_tags(&self, input: &ListTagsInput) -> EsResult<ListTagsOutput> {
        self.call(input)
    }

    /// List supported Elasticsearch versions, one page at a time.
    pub fn list_elasticsearch_versions(
        &self,
        input: &ListElasticsearchVersionsInput,
    ) -> EsResult<ListElasticsearchVersionsOutput> {
        self.call(input)
    }

    /// Versions a domain (or every version, without a domain) can upgrade to.
    pub fn get_compatible_elasticsearch_versions(
        &self,
        input: &GetCompatibleElasticsearchVersionsInput,
    ) -> EsResult<GetCompatibleElasticsearchVersionsOutput> {
        self.call(input)
    }

    /// Start an in-place version upgrade, or only check eligibility.
    pub fn upgrade_elasticsearch_domain(
        &self,
        input: &UpgradeElasticsearchDomainInput,
    ) -> EsResult<UpgradeElasticsearchDomainOutput> {
        self.call(input)
    }

    /// Status of the most recent upgrade.
    pub fn get_upgrade_status(
        &self,
        input: &GetUpgradeStatusInput,
    ) -> EsResult<GetUpgradeStatusOutput> {
        self.call(input)
    }

    /// Past upgrades of a domain, one page at a time.
    pub fn get_upgrade_history(
        &self,
        input: &GetUpgradeHistoryInput,
    ) -> EsResult<GetUpgradeHistoryOutput> {
        self.call(input)
    }

    /// Every supported version, following `NextToken` until the last page.
    pub fn list_all_elasticsearch_versions(&self) -> EsResult<Vec<String>> {
        let mut input = ListElasticsearchVersionsInput::default();
        let mut versions = Vec::new();
        loop {
            let page = self.list_elasticsearch_versions(&input)?;
            versions.extend(page.elasticsearch_versions.unwrap_or_default());
            match page.next_token {
                // An echoed token would repeat the same page forever.
                Some(token) if !token.is_empty() && input.next_token.as_ref() != Some(&token) => {
                    input.next_token = Some(token);
                }
                _ => break,
            }
        }
        debug!(count = versions.len(), "listed all elasticsearch versions");
        Ok(versions)
    }

    fn call<I, O>(&self, input: &I) -> EsResult<O>
    where
        I: RestInput,
        O: DeserializeOwned + Default,
    {
        let (name, request) = marshal(input)?;
        self.runtime.invoke(name, request, &ES_ERRORS)
    }

    fn call_unit<I: RestInput>(&self, input: &I) -> EsResult<()> {
        let (name, request) = marshal(input)?;
        self.runtime.invoke_unit(name, request, &ES_ERRORS)
    }
}

fn marshal<I: RestInput>(input: &I) -> EsResult<(&'static str, WireRequest)> {
    let name = I::OPERATION.as_str();
    input
        .validate()
        .and_then(|()| input.to_request())
        .map(|request| (name, request))
        .map_err(|e| ClientError::marshal(name, e))
}
