//! Client configuration.
//!
//! A [`ClientConfig`] is built once and captured by a client at construction;
//! there is no way to mutate a client's configuration afterwards. Clone the
//! config and build a new client instead.

use std::fmt;
use std::sync::Arc;

use typed_builder::TypedBuilder;

use crate::error::BuildError;
use crate::protocol::ServiceMetadata;
use crate::signer::RequestSigner;
use crate::transport::Transport;
use crate::types::AwsRegion;
use crate::wire::Endpoint;

/// Configuration shared by every service client.
///
/// # Examples
///
/// ```
/// use awsbind_core::ClientConfig;
///
/// let config = ClientConfig::builder()
///     .region("eu-west-1")
///     .endpoint_url("http://localhost:4566")
///     .build();
/// assert_eq!(config.region.as_str(), "eu-west-1");
/// ```
#[derive(Clone, TypedBuilder)]
pub struct ClientConfig {
    /// Region requests are sent to and signed for.
    #[builder(default, setter(into))]
    pub region: AwsRegion,

    /// Endpoint override. When absent the regional AWS endpoint is used.
    #[builder(default, setter(strip_option, into))]
    pub endpoint_url: Option<String>,

    /// Signer applied to every request. Requests are sent unsigned without one.
    #[builder(default, setter(strip_option))]
    pub signer: Option<Arc<dyn RequestSigner>>,

    /// Transport override. A default `ReqwestTransport` is created otherwise.
    #[builder(default, setter(strip_option))]
    pub transport: Option<Arc<dyn Transport>>,

    /// Value of the `User-Agent` header.
    #[builder(default = default_user_agent(), setter(into))]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: AwsRegion::default(),
            endpoint_url: None,
            signer: None,
            transport: None,
            user_agent: default_user_agent(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("region", &self.region)
            .field("endpoint_url", &self.endpoint_url)
            .field("signer", &self.signer.as_ref().map(|_| "..."))
            .field("transport", &self.transport)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `AWS_REGION`, then `AWS_DEFAULT_REGION` | `us-east-1` |
    /// | `AWS_ENDPOINT_URL` | regional AWS endpoint |
    ///
    /// Signer and transport are left unset.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(v) = env_non_empty("AWS_REGION").or_else(|| env_non_empty("AWS_DEFAULT_REGION")) {
            config.region = AwsRegion::new(v);
        }
        if let Some(v) = env_non_empty("AWS_ENDPOINT_URL") {
            config.endpoint_url = Some(v);
        }

        config
    }

    /// Resolve the endpoint for a service.
    ///
    /// # Examples
    ///
    /// ```
    /// use awsbind_core::ClientConfig;
    /// use awsbind_core::protocol::{Protocol, ServiceMetadata};
    ///
    /// const META: ServiceMetadata = ServiceMetadata {
    ///     service_name: "Amazon FSx",
    ///     endpoint_prefix: "fsx",
    ///     signing_name: "fsx",
    ///     protocol: Protocol::AwsJson { version: "1.1", target_prefix: "AWSSimbaAPIService_v20180301" },
    /// };
    ///
    /// let ep = ClientConfig::default().endpoint_for(&META).unwrap();
    /// assert_eq!(ep.url(), "https://fsx.us-east-1.amazonaws.com");
    /// ```
    pub fn endpoint_for(&self, metadata: &ServiceMetadata) -> Result<Endpoint, BuildError> {
        match &self.endpoint_url {
            Some(url) => Endpoint::parse(url),
            None => Endpoint::parse(&format!(
                "https://{}.{}.{}",
                metadata.endpoint_prefix,
                self.region,
                self.region.dns_suffix()
            )),
        }
    }
}

fn default_user_agent() -> String {
    format!("awsbind/{}", env!("CARGO_PKG_VERSION"))
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
