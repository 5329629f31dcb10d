//! Integration tests for the awsbind clients.
//!
//! Most tests run offline against an in-memory transport or a loopback
//! hyper server. Tests that talk to a live AWS-compatible endpoint
//! (LocalStack or similar at `localhost:4566`) are marked `#[ignore]`.
//!
//! Run them with:
//! ```text
//! cargo test -p awsbind-integration -- --ignored
//! ```

use std::net::SocketAddr;
use std::sync::{Arc, Once};

use anyhow::{Context, Result};
use awsbind_auth::{Credentials, SigV4Signer, StaticCredentialsProvider};
use awsbind_core::ClientConfig;
use awsbind_core::test_util::MockTransport;
use bytes::Bytes;
use http::{HeaderMap, Method, Request, Response, StatusCode, header};
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use parking_lot::Mutex;
use tokio::net::TcpListener;
use tokio::runtime::Runtime;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Endpoint URL for the live server.
fn endpoint_url() -> String {
    std::env::var("AWSBIND_ENDPOINT_URL").unwrap_or_else(|_| "http://localhost:4566".to_owned())
}

/// Signer with the static test credentials every local emulator accepts.
#[must_use]
pub fn test_signer() -> Arc<SigV4Signer> {
    let credentials = Credentials::new("test", "test", None).expect("static test credentials are valid");
    Arc::new(SigV4Signer::new(StaticCredentialsProvider::new(credentials)))
}

/// Config for a client that talks to `mock` in `us-east-1`, signed.
#[must_use]
pub fn mock_config(mock: &Arc<MockTransport>) -> ClientConfig {
    init_tracing();

    ClientConfig::builder()
        .region("us-east-1")
        .signer(test_signer())
        .transport(mock.clone())
        .build()
}

/// Config for a client pointing at the live server.
#[must_use]
pub fn live_config() -> ClientConfig {
    init_tracing();

    ClientConfig::builder()
        .region("us-east-1")
        .endpoint_url(endpoint_url())
        .signer(test_signer())
        .build()
}

/// Generate a unique resource name with the given prefix.
#[must_use]
pub fn test_resource_name(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("{prefix}-{}", &id[..8])
}

/// A request received by [`LoopbackServer`].
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// Request method.
    pub method: Method,
    /// Origin-form target, e.g. `/` or `/2015-01-01/tags/?arn=..`.
    pub path_and_query: String,
    /// Protocol version.
    pub version: http::Version,
    /// Headers as received.
    pub headers: HeaderMap,
    /// Request body.
    pub body: Bytes,
}

impl CapturedRequest {
    /// Header value as a string, if present and visible ASCII.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// HTTP/1.1 server on a loopback port. Every request gets the same JSON
/// response with a matching `x-amz-crc32` header.
///
/// The server owns its tokio runtime, so blocking clients can call it from
/// a plain test thread. Dropping the server shuts it down.
#[derive(Debug)]
pub struct LoopbackServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    _runtime: Runtime,
}

impl LoopbackServer {
    /// Bind `127.0.0.1:0` and start answering with `status` and `body`.
    pub fn start(status: StatusCode, body: &'static str) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .context("build server runtime")?;
        let listener = runtime
            .block_on(TcpListener::bind("127.0.0.1:0"))
            .context("bind loopback listener")?;
        let addr = listener.local_addr()?;
        let requests = Arc::new(Mutex::new(Vec::new()));

        let log = requests.clone();
        runtime.spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let log = log.clone();
                tokio::spawn(async move {
                    let service = service_fn(move |req: Request<Incoming>| {
                        let log = log.clone();
                        async move { respond(req, &log, status, body).await }
                    });
                    if let Err(e) = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service)
                        .await
                    {
                        tracing::warn!(error = %e, "loopback connection failed");
                    }
                });
            }
        });

        Ok(Self {
            addr,
            requests,
            _runtime: runtime,
        })
    }

    /// Address the server listens on.
    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// `http://` URL of the server, for `ClientConfig::endpoint_url`.
    #[must_use]
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Requests received so far, in arrival order.
    #[must_use]
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().clone()
    }
}

async fn respond(
    req: Request<Incoming>,
    log: &Mutex<Vec<CapturedRequest>>,
    status: StatusCode,
    body: &'static str,
) -> Result<Response<Full<Bytes>>> {
    let (parts, incoming) = req.into_parts();
    let payload = incoming.collect().await?.to_bytes();
    log.lock().push(CapturedRequest {
        method: parts.method,
        path_and_query: parts
            .uri
            .path_and_query()
            .map_or_else(|| "/".to_owned(), ToString::to_string),
        version: parts.version,
        headers: parts.headers,
        body: payload,
    });

    let response = Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/x-amz-json-1.1")
        .header("x-amz-crc32", crc32fast::hash(body.as_bytes()))
        .body(Full::new(Bytes::from_static(body.as_bytes())))?;
    Ok(response)
}

mod test_es;
mod test_fsx;
mod test_logs;
mod test_signing;
mod test_transport;
