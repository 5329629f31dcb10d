//! Credentials and credential providers.
//!
//! This module defines the [`ProvideCredentials`] trait consumed by the
//! signer, along with a [`StaticCredentialsProvider`] for fixed keys and an
//! [`EnvironmentCredentialsProvider`] reading the standard `AWS_*` variables.

use std::fmt;

use crate::error::AuthError;

/// An access key pair with an optional session token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_key_id: String,
    secret_access_key: String,
    session_token: Option<String>,
}

impl Credentials {
    /// Create credentials. Both keys must be non-empty.
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Result<Self, AuthError> {
        let access_key_id = access_key_id.into();
        let secret_access_key = secret_access_key.into();
        if access_key_id.is_empty() {
            return Err(AuthError::InvalidCredentials("access key id is empty"));
        }
        if secret_access_key.is_empty() {
            return Err(AuthError::InvalidCredentials("secret access key is empty"));
        }
        Ok(Self {
            access_key_id,
            secret_access_key,
            session_token: session_token.filter(|t| !t.is_empty()),
        })
    }

    /// Access key id.
    #[must_use]
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// Secret access key.
    #[must_use]
    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    /// Session token for temporary credentials.
    #[must_use]
    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "** redacted **"),
            )
            .finish()
    }
}

/// Source of credentials, consulted once per signed request.
pub trait ProvideCredentials: Send + Sync + fmt::Debug {
    /// Resolve the current credentials.
    fn provide_credentials(&self) -> Result<Credentials, AuthError>;
}

/// Always returns the same credentials.
///
/// # Examples
///
/// ```
/// use awsbind_auth::credentials::{Credentials, ProvideCredentials, StaticCredentialsProvider};
///
/// let creds = Credentials::new("AKIDEXAMPLE", "secret", None).unwrap();
/// let provider = StaticCredentialsProvider::new(creds);
/// assert_eq!(provider.provide_credentials().unwrap().access_key_id(), "AKIDEXAMPLE");
/// ```
#[derive(Debug, Clone)]
pub struct StaticCredentialsProvider {
    credentials: Credentials,
}

impl StaticCredentialsProvider {
    /// Wrap fixed credentials.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl ProvideCredentials for StaticCredentialsProvider {
    fn provide_credentials(&self) -> Result<Credentials, AuthError> {
        Ok(self.credentials.clone())
    }
}

/// Reads `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and, if set,
/// `AWS_SESSION_TOKEN` on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentCredentialsProvider;

impl EnvironmentCredentialsProvider {
    /// Create the provider.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ProvideCredentials for EnvironmentCredentialsProvider {
    fn provide_credentials(&self) -> Result<Credentials, AuthError> {
        let access_key_id = env_var("AWS_ACCESS_KEY_ID")?;
        let secret_access_key = env_var("AWS_SECRET_ACCESS_KEY")?;
        let session_token = std::env::var("AWS_SESSION_TOKEN").ok();
        Credentials::new(access_key_id, secret_access_key, session_token)
    }
}

fn env_var(name: &'static str) -> Result<String, AuthError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(AuthError::MissingEnvVar(name))
}
