//! Request signing seam.
//!
//! The runtime calls the configured [`RequestSigner`] after it has set the
//! `host` header and before the request reaches the transport. The SigV4
//! implementation lives in `awsbind-auth`.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::wire::WireRequest;

/// Scope a request is signed for.
#[derive(Debug, Clone, Copy)]
pub struct SigningParams<'a> {
    /// Region the client is configured for.
    pub region: &'a str,
    /// Signing name of the service (e.g. `fsx`, `logs`, `es`).
    pub service: &'a str,
    /// Signing time.
    pub time: DateTime<Utc>,
}

/// Signs outgoing requests in place.
pub trait RequestSigner: Send + Sync + fmt::Debug {
    /// Add authentication headers to `request`.
    fn sign(&self, request: &mut WireRequest, params: &SigningParams<'_>) -> Result<(), SigningError>;
}

/// Failure while signing a request.
#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    /// Credentials could not be resolved.
    #[error("credentials unavailable: {0}")]
    Credentials(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A computed header value is not a valid HTTP header value.
    #[error("cannot encode {0} as an HTTP header value")]
    InvalidHeaderValue(&'static str),
}
