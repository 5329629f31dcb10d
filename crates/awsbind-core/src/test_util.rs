//! In-memory transport for tests.

use std::collections::VecDeque;

use parking_lot::Mutex;

use crate::transport::{Transport, TransportError};
use crate::wire::{Endpoint, WireRequest, WireResponse};

/// A [`Transport`] that replays queued responses and records every request.
///
/// When the queue is empty, `send` fails with [`TransportError::Other`].
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<WireResponse, TransportError>>>,
    requests: Mutex<Vec<(Endpoint, WireRequest)>>,
}

impl MockTransport {
    /// Create an empty mock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response.
    pub fn push_response(&self, response: WireResponse) {
        self.responses.lock().push_back(Ok(response));
    }

    /// Queue a JSON response with the given status.
    pub fn push_json(&self, status: u16, body: &str) {
        let status = http::StatusCode::from_u16(status).unwrap_or(http::StatusCode::OK);
        let mut response = WireResponse::new(status, body.to_owned());
        response.headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/x-amz-json-1.1"),
        );
        self.push_response(response);
    }

    /// Queue a transport failure.
    pub fn push_error(&self, error: TransportError) {
        self.responses.lock().push_back(Err(error));
    }

    /// All requests sent so far.
    #[must_use]
    pub fn requests(&self) -> Vec<WireRequest> {
        self.requests.lock().iter().map(|(_, r)| r.clone()).collect()
    }

    /// The most recent request, if any.
    #[must_use]
    pub fn last_request(&self) -> Option<WireRequest> {
        self.requests.lock().last().map(|(_, r)| r.clone())
    }

    /// The endpoint the most recent request was sent to.
    #[must_use]
    pub fn last_endpoint(&self) -> Option<Endpoint> {
        self.requests.lock().last().map(|(e, _)| e.clone())
    }
}

impl Transport for MockTransport {
    fn send(&self, endpoint: &Endpoint, request: WireRequest) -> Result<WireResponse, TransportError> {
        self.requests.lock().push((endpoint.clone(), request));
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no mock response queued".to_owned())))
    }
}
