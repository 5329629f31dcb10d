//! Error types for credential resolution.

/// Errors raised while resolving credentials.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// A required environment variable is missing or empty.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// The access key id or secret is empty.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(&'static str),
}
