//! HTTP transport abstraction.
//!
//! The client only needs "send this request, give me the status and the full
//! body". [`Transport`] captures exactly that, so tests and callers with
//! special networking needs can substitute their own implementation.

use std::future::Future;
use std::sync::Arc;

use reqwest::Method;
use reqwest::header::HeaderMap;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

use crate::error::SimpleSwapError;

/// A fully-formed outbound request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Complete URL, including the query string.
    pub url: String,
    /// Request headers.
    pub headers: HeaderMap,
    /// Optional request body.
    pub body: Option<Vec<u8>>,
}

/// Status code and complete body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

/// Sends one HTTP request and reads the whole response body.
///
/// Implementations must report connection failures, timeouts and body read
/// failures as `Err`; any response that was fully received, whatever its
/// status, is `Ok`.
pub trait Transport: Send + Sync {
    /// Send the request.
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, SimpleSwapError>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, SimpleSwapError>> + Send {
        (**self).send(request)
    }
}

/// Default transport backed by `reqwest` with tracing middleware.
///
/// Timeouts, proxies and TLS settings belong to the wrapped
/// [`reqwest::Client`]; use [`ReqwestTransport::from_client`] to supply one.
#[derive(Clone)]
pub struct ReqwestTransport {
    http_client: ClientWithMiddleware,
}

impl ReqwestTransport {
    /// Create a transport around a default `reqwest` client.
    pub fn new() -> Self {
        Self::from_client(reqwest::Client::new())
    }

    /// Create a transport around a caller-configured `reqwest` client.
    pub fn from_client(client: reqwest::Client) -> Self {
        let http_client = ClientBuilder::new(client)
            .with(TracingMiddleware::default())
            .build();

        Self { http_client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport").finish_non_exhaustive()
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, SimpleSwapError> {
        let mut builder = self
            .http_client
            .request(request.method, &request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse { status, body })
    }
}
