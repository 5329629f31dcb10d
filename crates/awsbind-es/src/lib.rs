//! Blocking Amazon Elasticsearch Service client.
//!
//! ```rust,no_run
//! use awsbind_core::ClientConfig;
//! use awsbind_es::ElasticsearchClient;
//! use awsbind_es_model::input::DescribeElasticsearchDomainInput;
//!
//! let client = ElasticsearchClient::new(&ClientConfig::from_env())?;
//! let output = client.describe_elasticsearch_domain(&DescribeElasticsearchDomainInput {
//!     domain_name: "logs".to_owned(),
//! })?;
//! if let Some(status) = output.domain_status {
//!     println!("{:?} processing={:?}", status.endpoint, status.processing);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod client;
mod marshal;

pub use awsbind_es_model as model;
pub use client::{ElasticsearchClient, EsResult};
