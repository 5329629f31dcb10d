//! Blocking request pipeline shared by every service client.
//!
//! For each call the runtime:
//!
//! 1. sets `host`, `user-agent` and a fresh `amz-sdk-invocation-id`,
//! 2. applies the configured signer,
//! 3. sends the request through the transport,
//! 4. verifies `x-amz-crc32` when the service sent one,
//! 5. decodes the body into the output on 2xx, or resolves the error body
//!    through the service's registry otherwise.
//!
//! Nothing is retried.

use std::sync::Arc;

use chrono::Utc;
use http::HeaderValue;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{BuildError, ClientError};
use crate::json;
use crate::protocol::ServiceMetadata;
use crate::service_error::{ErrorBody, ErrorRegistry};
use crate::signer::{RequestSigner, SigningError, SigningParams};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::AwsRegion;
use crate::wire::{Endpoint, WireRequest, WireResponse};

const CRC32_HEADER: &str = "x-amz-crc32";

/// Immutable per-client state plus the request pipeline.
#[derive(Debug, Clone)]
pub struct ClientRuntime {
    metadata: &'static ServiceMetadata,
    endpoint: Endpoint,
    region: AwsRegion,
    user_agent: HeaderValue,
    signer: Option<Arc<dyn RequestSigner>>,
    transport: Arc<dyn Transport>,
}

impl ClientRuntime {
    /// Capture `config` for a service. Creates a default transport when the
    /// config does not carry one.
    pub fn new(metadata: &'static ServiceMetadata, config: &ClientConfig) -> Result<Self, BuildError> {
        let endpoint = config.endpoint_for(metadata)?;
        let transport: Arc<dyn Transport> = match &config.transport {
            Some(t) => Arc::clone(t),
            None => Arc::new(ReqwestTransport::new()?),
        };
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| BuildError::InvalidUserAgent(config.user_agent.clone()))?;

        debug!(
            service = metadata.service_name,
            endpoint = endpoint.url(),
            region = %config.region,
            signed = config.signer.is_some(),
            "created service client"
        );

        Ok(Self {
            metadata,
            endpoint,
            region: config.region.clone(),
            user_agent,
            signer: config.signer.clone(),
            transport,
        })
    }

    /// Service description.
    #[must_use]
    pub fn metadata(&self) -> &'static ServiceMetadata {
        self.metadata
    }

    /// Resolved endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Region the client signs for.
    #[must_use]
    pub fn region(&self) -> &AwsRegion {
        &self.region
    }

    /// Send `request` and decode a successful body into `O`.
    pub fn invoke<O, E>(
        &self,
        operation: &'static str,
        request: WireRequest,
        errors: &ErrorRegistry<E>,
    ) -> Result<O, ClientError<E>>
    where
        O: DeserializeOwned + Default,
    {
        let response = self.execute(operation, request, errors)?;
        json::from_body(&response.body).map_err(|source| {
            debug!(operation, error = %source, "failed to decode response body");
            ClientError::Deserialization { operation, source }
        })
    }

    /// Send `request` for an operation whose response carries no members.
    pub fn invoke_unit<E>(
        &self,
        operation: &'static str,
        request: WireRequest,
        errors: &ErrorRegistry<E>,
    ) -> Result<(), ClientError<E>> {
        self.execute(operation, request, errors).map(|_| ())
    }

    fn execute<E>(
        &self,
        operation: &'static str,
        mut request: WireRequest,
        errors: &ErrorRegistry<E>,
    ) -> Result<WireResponse, ClientError<E>> {
        self.prepare(&mut request)
            .map_err(|source| ClientError::Signing { operation, source })?;

        if let Some(signer) = &self.signer {
            let params = SigningParams {
                region: self.region.as_str(),
                service: self.metadata.signing_name,
                time: Utc::now(),
            };
            signer
                .sign(&mut request, &params)
                .map_err(|source| ClientError::Signing { operation, source })?;
        }

        debug!(
            service = self.metadata.service_name,
            operation,
            method = %request.method,
            path = %request.path,
            "sending request"
        );

        let response = self
            .transport
            .send(&self.endpoint, request)
            .map_err(|source| {
                warn!(operation, error = %source, "transport failure");
                ClientError::Transport { operation, source }
            })?;

        verify_crc32(&response).map_err(|(expected, actual)| ClientError::ChecksumMismatch {
            operation,
            expected,
            actual,
        })?;

        if response.is_success() {
            debug!(operation, status = %response.status, "request succeeded");
            return Ok(response);
        }

        let body = ErrorBody::parse(response.status, &response.headers, &response.body);
        debug!(
            operation,
            status = %response.status,
            code = body.code().unwrap_or("<none>"),
            "service returned an error"
        );
        Err(ClientError::Service(errors.resolve(&body)))
    }

    fn prepare(&self, request: &mut WireRequest) -> Result<(), SigningError> {
        let host = HeaderValue::from_str(self.endpoint.host())
            .map_err(|_| SigningError::InvalidHeaderValue("host"))?;
        request.headers.insert(http::header::HOST, host);
        request
            .headers
            .insert(http::header::USER_AGENT, self.user_agent.clone());
        let invocation_id = HeaderValue::from_str(&uuid::Uuid::new_v4().to_string())
            .map_err(|_| SigningError::InvalidHeaderValue("amz-sdk-invocation-id"))?;
        request
            .headers
            .insert("amz-sdk-invocation-id", invocation_id);
        if !request.body.is_empty() && !request.headers.contains_key(http::header::CONTENT_TYPE) {
            request.headers.insert(
                http::header::CONTENT_TYPE,
                HeaderValue::from_static(self.metadata.content_type()),
            );
        }
        Ok(())
    }
}

/// Compare the body against `x-amz-crc32`. Returns `(expected, actual)` on
/// mismatch; a missing or unparsable header is not checked.
fn verify_crc32(response: &WireResponse) -> Result<(), (u32, u32)> {
    let Some(expected) = response
        .header(CRC32_HEADER)
        .and_then(|v| v.trim().parse::<u32>().ok())
    else {
        return Ok(());
    };
    let actual = crc32fast::hash(&response.body);
    if actual == expected {
        Ok(())
    } else {
        Err((expected, actual))
    }
}
