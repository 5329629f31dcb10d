//! AWS Signature Version 4 signing.
//!
//! [`SigV4Signer`] implements the runtime's `RequestSigner`:
//!
//! 1. Add `x-amz-date` (and `x-amz-security-token` for temporary credentials).
//! 2. Build the canonical request over every signable header.
//! 3. Build the string to sign from the timestamp, credential scope and
//!    canonical request hash.
//! 4. Derive the signing key and add the `Authorization` header.

use std::sync::Arc;

use awsbind_core::{RequestSigner, SigningError, SigningParams, WireRequest};
use chrono::{DateTime, Utc};
use hmac::{Hmac, KeyInit, Mac};
use http::HeaderValue;
use sha2::{Digest, Sha256};
use tracing::trace;

use crate::canonical::{
    build_canonical_headers, build_canonical_query_string, build_canonical_request,
    build_canonical_uri, build_signed_headers_string, signable_headers,
};
use crate::credentials::{EnvironmentCredentialsProvider, ProvideCredentials};

/// The only algorithm supported by this implementation.
const ALGORITHM: &str = "AWS4-HMAC-SHA256";

type HmacSha256 = Hmac<Sha256>;

/// Signs requests with credentials from a [`ProvideCredentials`].
#[derive(Debug, Clone)]
pub struct SigV4Signer {
    credentials: Arc<dyn ProvideCredentials>,
}

impl SigV4Signer {
    /// Create a signer backed by `credentials`.
    pub fn new(credentials: impl ProvideCredentials + 'static) -> Self {
        Self {
            credentials: Arc::new(credentials),
        }
    }

    /// Create a signer that reads credentials from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(EnvironmentCredentialsProvider::new())
    }
}

impl RequestSigner for SigV4Signer {
    fn sign(&self, request: &mut WireRequest, params: &SigningParams<'_>) -> Result<(), SigningError> {
        let credentials = self
            .credentials
            .provide_credentials()
            .map_err(|e| SigningError::Credentials(Box::new(e)))?;

        let timestamp = format_timestamp(params.time);
        let date = &timestamp[..8];

        request
            .headers
            .insert("x-amz-date", header_value("x-amz-date", &timestamp)?);
        if let Some(token) = credentials.session_token() {
            request
                .headers
                .insert("x-amz-security-token", header_value("x-amz-security-token", token)?);
        }

        let signable = signable_headers(&request.headers);
        let signed_headers = build_signed_headers_string(&signable);
        let canonical_request = build_canonical_request(
            request.method.as_str(),
            &build_canonical_uri(&request.path),
            &build_canonical_query_string(&request.query),
            &build_canonical_headers(&signable),
            &signed_headers,
            &hash_payload(&request.body),
        );
        trace!(canonical_request, "built canonical request");

        let credential_scope = format!(
            "{date}/{}/{}/aws4_request",
            params.region, params.service
        );
        let canonical_hash = hex::encode(Sha256::digest(canonical_request.as_bytes()));
        let string_to_sign = build_string_to_sign(&timestamp, &credential_scope, &canonical_hash);
        trace!(string_to_sign, "built string to sign");

        let signing_key = derive_signing_key(
            credentials.secret_access_key(),
            date,
            params.region,
            params.service,
        );
        let signature = compute_signature(&signing_key, &string_to_sign);

        let authorization = format!(
            "{ALGORITHM} Credential={}/{credential_scope}, SignedHeaders={signed_headers}, Signature={signature}",
            credentials.access_key_id()
        );
        request.headers.insert(
            http::header::AUTHORIZATION,
            header_value("authorization", &authorization)?,
        );
        Ok(())
    }
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue, SigningError> {
    HeaderValue::from_str(value).map_err(|_| SigningError::InvalidHeaderValue(name))
}

/// Format a signing time as `YYYYMMDD'T'HHMMSS'Z'`.
#[must_use]
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Build the SigV4 string to sign.
///
/// ```text
/// AWS4-HMAC-SHA256\n
/// <ISO8601 timestamp>\n
/// <credential_scope>\n
/// <hex(SHA256(canonical_request))>
/// ```
#[must_use]
pub fn build_string_to_sign(
    timestamp: &str,
    credential_scope: &str,
    canonical_request_hash: &str,
) -> String {
    format!("{ALGORITHM}\n{timestamp}\n{credential_scope}\n{canonical_request_hash}")
}

/// Derive the SigV4 signing key using HMAC-SHA256 chain.
///
/// ```text
/// DateKey              = HMAC-SHA256("AWS4" + secret_key, date)
/// DateRegionKey        = HMAC-SHA256(DateKey, region)
/// DateRegionServiceKey = HMAC-SHA256(DateRegionKey, service)
/// SigningKey           = HMAC-SHA256(DateRegionServiceKey, "aws4_request")
/// ```
#[must_use]
pub fn derive_signing_key(secret_key: &str, date: &str, region: &str, service: &str) -> Vec<u8> {
    let date_key = hmac_sha256(format!("AWS4{secret_key}").as_bytes(), date.as_bytes());
    let date_region_key = hmac_sha256(&date_key, region.as_bytes());
    let date_region_service_key = hmac_sha256(&date_region_key, service.as_bytes());
    hmac_sha256(&date_region_service_key, b"aws4_request")
}

/// Hex-encoded HMAC-SHA256 of `data`.
#[must_use]
pub fn compute_signature(signing_key: &[u8], data: &str) -> String {
    hex::encode(hmac_sha256(signing_key, data.as_bytes()))
}

/// Hex-encoded SHA-256 of a payload.
///
/// # Examples
///
/// ```
/// use awsbind_auth::sigv4::hash_payload;
///
/// assert_eq!(
///     hash_payload(b""),
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
#[must_use]
pub fn hash_payload(payload: &[u8]) -> String {
    hex::encode(Sha256::digest(payload))
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can accept keys of any length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}
