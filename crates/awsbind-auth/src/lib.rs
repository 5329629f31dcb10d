//! Credentials and AWS Signature Version 4 signing for awsbind clients.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use awsbind_auth::SigV4Signer;
//! use awsbind_core::ClientConfig;
//!
//! let config = ClientConfig::builder()
//!     .region("us-west-2")
//!     .signer(Arc::new(SigV4Signer::from_env()))
//!     .build();
//! # let _ = config;
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - Canonical request construction
//! - [`credentials`] - Credentials and credential providers
//! - [`error`] - Credential error types
//! - [`sigv4`] - The signer and the SigV4 key derivation

pub mod canonical;
pub mod credentials;
pub mod error;
pub mod sigv4;

pub use credentials::{
    Credentials, EnvironmentCredentialsProvider, ProvideCredentials, StaticCredentialsProvider,
};
pub use error::AuthError;
pub use sigv4::SigV4Signer;
