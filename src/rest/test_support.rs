//! In-memory transports for unit tests.

use std::sync::Mutex;

use crate::error::SimpleSwapError;
use crate::rest::transport::{HttpRequest, HttpResponse, Transport};

/// Answers every request with a canned response and records what was sent.
pub(crate) struct RecordingTransport {
    status: u16,
    body: Vec<u8>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    pub(crate) fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.as_bytes().to_vec(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn ok(body: &str) -> Self {
        Self::new(200, body)
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn single_request(&self) -> HttpRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, SimpleSwapError> {
        self.requests.lock().unwrap().push(request);
        Ok(HttpResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

/// Fails every request as if the connection was refused.
pub(crate) struct FailingTransport;

impl Transport for FailingTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, SimpleSwapError> {
        Err(SimpleSwapError::transport("connection refused"))
    }
}
