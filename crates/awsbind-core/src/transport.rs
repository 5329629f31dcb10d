//! Blocking HTTP transport.

use std::fmt;
use std::time::Duration;

use tracing::trace;

use crate::wire::{Endpoint, WireRequest, WireResponse};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Sends a wire request to an endpoint and returns the raw response.
///
/// Implementations block the calling thread until the response body has been
/// read in full. Non-2xx statuses are not errors at this layer.
pub trait Transport: Send + Sync + fmt::Debug {
    /// Send `request` to `endpoint`.
    fn send(&self, endpoint: &Endpoint, request: WireRequest) -> Result<WireResponse, TransportError>;
}

/// Network-level failure.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The HTTP client could not be created.
    #[error("failed to build HTTP client")]
    Init(#[source] BoxError),

    /// The connection could not be established.
    #[error("connection failed")]
    Connect(#[source] BoxError),

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout(#[source] BoxError),

    /// Any other failure while sending the request or reading the response.
    #[error("HTTP exchange failed")]
    Io(#[source] BoxError),

    /// Failure without an underlying error value.
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout(Box::new(e))
        } else if e.is_connect() {
            Self::Connect(Box::new(e))
        } else {
            Self::Io(Box::new(e))
        }
    }
}

/// [`Transport`] backed by a blocking `reqwest` client.
///
/// Do not use from inside an async runtime; `reqwest::blocking` panics when
/// called on a runtime thread.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Create a transport with reqwest's default settings.
    pub fn new() -> Result<Self, TransportError> {
        reqwest::blocking::Client::builder()
            .build()
            .map(Self::from_client)
            .map_err(|e| TransportError::Init(Box::new(e)))
    }

    /// Create a transport whose requests time out after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map(Self::from_client)
            .map_err(|e| TransportError::Init(Box::new(e)))
    }

    /// Wrap a preconfigured client.
    #[must_use]
    pub fn from_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, endpoint: &Endpoint, request: WireRequest) -> Result<WireResponse, TransportError> {
        let url = endpoint.url_for(&request.path_and_query());
        trace!(method = %request.method, %url, "sending HTTP request");

        let response = self
            .client
            .request(request.method, url)
            .headers(request.headers)
            .body(request.body.to_vec())
            .send()?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes()?;
        trace!(%status, len = body.len(), "received HTTP response");

        Ok(WireResponse {
            status,
            headers,
            body,
        })
    }
}
