//! Shared runtime for awsbind service clients.
//!
//! Every service crate is a thin layer over the pieces in here:
//!
//! - [`protocol`]: awsJson and restJson request marshalling plus input
//!   validation,
//! - [`json`]: forward-compatible response decoding and timestamp codecs,
//! - [`string_enum!`]: open string enums with an `Unknown` fallback,
//! - [`service_error`]: error body decoding and ordered error registries,
//! - [`runtime`]: the blocking pipeline that signs, sends and decodes.

mod config;
mod enums;
mod error;
pub mod json;
pub mod protocol;
pub mod runtime;
pub mod service_error;
mod signer;
#[cfg(any(test, feature = "test-util"))]
pub mod test_util;
mod transport;
mod types;
mod wire;

pub use config::ClientConfig;
pub use error::{BuildError, ClientError, MarshalError};
pub use runtime::ClientRuntime;
pub use service_error::{ErrorBody, ErrorMatcher, ErrorMetadata, ErrorRegistry, sanitize_error_code};
pub use signer::{RequestSigner, SigningError, SigningParams};
pub use transport::{ReqwestTransport, Transport, TransportError};
pub use types::AwsRegion;
pub use wire::{Endpoint, WireRequest, WireResponse};

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
