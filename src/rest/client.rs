//! SimpleSwap REST API client implementation.

use std::sync::Arc;

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::auth::{CredentialsProvider, StaticCredentials};
use crate::error::SimpleSwapError;
use crate::rest::endpoints::SIMPLESWAP_BASE_URL;
use crate::rest::query::Query;
use crate::rest::response::decode_response;
use crate::rest::transport::{HttpRequest, ReqwestTransport, Transport};

/// User agent sent when none is configured.
const DEFAULT_USER_AGENT: &str = concat!("simpleswap-api-client/", env!("CARGO_PKG_VERSION"));

/// Description of a single API call, before the URL is composed.
///
/// Every endpoint method builds one of these and hands it to
/// [`SwapRestClient::execute`].
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Endpoint name, e.g. `get_currency`.
    pub endpoint: &'static str,
    /// Parameters appended after `api_key`.
    pub query: Query,
    /// Extra request headers.
    pub headers: HeaderMap,
    /// Optional request body.
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// A request with the given method and no parameters.
    pub fn new(method: Method, endpoint: &'static str) -> Self {
        Self {
            method,
            endpoint,
            query: Query::new(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// A GET request.
    pub fn get(endpoint: &'static str) -> Self {
        Self::new(Method::GET, endpoint)
    }

    /// A POST request carrying `body` as JSON.
    pub fn post_json<B>(endpoint: &'static str, body: &B) -> Result<Self, SimpleSwapError>
    where
        B: Serialize + ?Sized,
    {
        let mut request = Self::new(Method::POST, endpoint);
        request.body = Some(serde_json::to_vec(body)?);
        request
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(request)
    }

    /// Replace the query parameters.
    pub fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Set a header, unless `value` is empty.
    ///
    /// Empty values are dropped rather than sent as empty headers.
    pub fn optional_header(
        mut self,
        name: HeaderName,
        value: &str,
    ) -> Result<Self, SimpleSwapError> {
        if value.is_empty() {
            return Ok(self);
        }
        let header_value = HeaderValue::from_str(value)
            .map_err(|_| SimpleSwapError::InvalidHeader(name.to_string()))?;
        self.headers.insert(name, header_value);
        Ok(self)
    }
}

/// The SimpleSwap REST API client.
///
/// Every call goes through the same pipeline: compose
/// `{base}/{endpoint}?api_key={key}&...`, send it through the configured
/// [`Transport`], then decode either the payload or an [`ApiError`](crate::error::ApiError).
///
/// The client holds no mutable state; share it freely (it is `Clone`, and
/// `Send + Sync` whenever the transport is).
///
/// # Example
///
/// ```rust,no_run
/// use simpleswap_api_client::rest::SwapRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = SwapRestClient::new("your-api-key");
///     let btc = client.get_currency("btc").await?;
///     println!("{} on {}", btc.name, btc.network);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct SwapRestClient<T = ReqwestTransport> {
    transport: T,
    base_url: String,
    credentials: Arc<dyn CredentialsProvider>,
    user_agent: HeaderValue,
}

impl SwapRestClient {
    /// Create a client for the public SimpleSwap API with default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            transport: ReqwestTransport::new(),
            base_url: SIMPLESWAP_BASE_URL.to_string(),
            credentials: Arc::new(StaticCredentials::new(api_key)),
            user_agent: HeaderValue::from_static(DEFAULT_USER_AGENT),
        }
    }

    /// Create a new client builder.
    pub fn builder() -> SwapRestClientBuilder {
        SwapRestClientBuilder::new()
    }
}

impl<T: Transport> SwapRestClient<T> {
    /// The base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Compose `{base}/{endpoint}?api_key={key}` followed by `fragments`.
    ///
    /// Fragments are appended verbatim, in order; each one carries its own
    /// leading `&`. Nothing is escaped.
    ///
    /// ```rust
    /// use simpleswap_api_client::rest::SwapRestClient;
    ///
    /// let client = SwapRestClient::builder()
    ///     .base_url("https://api.example.com/")
    ///     .api_key("K")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(
    ///     client.build_url("get_currency", ["&symbol=", "btc"]),
    ///     "https://api.example.com/get_currency?api_key=K&symbol=btc"
    /// );
    /// ```
    pub fn build_url<I>(&self, endpoint: &str, fragments: I) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let api_key = self.credentials.get_credentials().expose_api_key();
        let mut url = format!("{}/{}?api_key={}", self.base_url, endpoint, api_key);
        for fragment in fragments {
            url.push_str(fragment.as_ref());
        }
        url
    }

    /// Execute a request and decode the response as `R`.
    ///
    /// This is the one routine every endpoint method delegates to.
    pub async fn execute<R>(&self, request: ApiRequest) -> Result<R, SimpleSwapError>
    where
        R: DeserializeOwned,
    {
        let ApiRequest {
            method,
            endpoint,
            query,
            mut headers,
            body,
        } = request;

        let url = self.build_url(endpoint, query.iter());
        headers.insert(USER_AGENT, self.user_agent.clone());

        tracing::debug!(method = method.as_str(), endpoint, "sending SimpleSwap request");
        let response = self
            .transport
            .send(HttpRequest {
                method,
                url,
                headers,
                body,
            })
            .await?;
        tracing::debug!(
            endpoint,
            status = response.status,
            bytes = response.body.len(),
            "received SimpleSwap response"
        );

        decode_response(response.status, &response.body)
    }
}

impl<T> std::fmt::Debug for SwapRestClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwapRestClient")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

/// Builder for [`SwapRestClient`].
pub struct SwapRestClientBuilder<T = ReqwestTransport> {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    user_agent: Option<String>,
    transport: T,
}

impl SwapRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: SIMPLESWAP_BASE_URL.to_string(),
            credentials: None,
            user_agent: None,
            transport: ReqwestTransport::new(),
        }
    }
}

impl Default for SwapRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> SwapRestClientBuilder<T> {
    /// Set the base URL (useful for testing with a mock server).
    ///
    /// A trailing slash is stripped.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Use a fixed API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.credentials = Some(Arc::new(StaticCredentials::new(api_key)));
        self
    }

    /// Set the credentials provider.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Replace the HTTP transport.
    pub fn transport<U: Transport>(self, transport: U) -> SwapRestClientBuilder<U> {
        SwapRestClientBuilder {
            base_url: self.base_url,
            credentials: self.credentials,
            user_agent: self.user_agent,
            transport,
        }
    }

    /// Build the client.
    ///
    /// Fails if no API key was configured, the base URL does not parse, or
    /// the user agent is not a valid header value.
    pub fn build(self) -> Result<SwapRestClient<T>, SimpleSwapError> {
        let credentials = self.credentials.ok_or(SimpleSwapError::MissingCredentials)?;

        let base_url = match self.base_url.strip_suffix('/') {
            Some(stripped) => stripped.to_string(),
            None => self.base_url,
        };
        url::Url::parse(&base_url)?;

        let user_agent = match self.user_agent {
            Some(user_agent) => HeaderValue::from_str(&user_agent)
                .map_err(|_| SimpleSwapError::InvalidHeader(USER_AGENT.to_string()))?,
            None => HeaderValue::from_static(DEFAULT_USER_AGENT),
        };

        Ok(SwapRestClient {
            transport: self.transport,
            base_url,
            credentials,
            user_agent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::test_support::{FailingTransport, RecordingTransport};

    fn build_client(transport: Arc<RecordingTransport>) -> SwapRestClient<Arc<RecordingTransport>> {
        SwapRestClient::builder()
            .base_url("https://api.example.com")
            .api_key("K")
            .transport(transport)
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_url_appends_fragments_in_order() {
        let client = build_client(Arc::new(RecordingTransport::ok("null")));
        assert_eq!(
            client.build_url("get_currency", ["&symbol=", "btc"]),
            "https://api.example.com/get_currency?api_key=K&symbol=btc"
        );
        assert_eq!(
            client.build_url("get_all_currencies", std::iter::empty::<&str>()),
            "https://api.example.com/get_all_currencies?api_key=K"
        );
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let client = SwapRestClient::builder()
            .base_url("https://api.example.com/")
            .api_key("K")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(
            client.build_url("get_currency", ["&symbol=", "btc"]),
            "https://api.example.com/get_currency?api_key=K&symbol=btc"
        );
    }

    #[test]
    fn test_build_requires_api_key() {
        let err = SwapRestClient::builder().build().unwrap_err();
        assert!(matches!(err, SimpleSwapError::MissingCredentials));
    }

    #[test]
    fn test_build_rejects_invalid_base_url() {
        let err = SwapRestClient::builder()
            .base_url("not a url")
            .api_key("K")
            .build()
            .unwrap_err();
        assert!(matches!(err, SimpleSwapError::Url(_)));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let client = SwapRestClient::new("very-secret-key");
        let debug_str = format!("{:?}", client);
        assert!(!debug_str.contains("very-secret-key"));
        assert!(debug_str.contains("api.simpleswap.io"));
    }

    #[tokio::test]
    async fn test_execute_sends_user_agent_and_query() {
        let transport = Arc::new(RecordingTransport::ok(r#"["eth"]"#));
        let client = SwapRestClient::builder()
            .base_url("https://api.example.com")
            .api_key("K")
            .user_agent("my-app/1.0")
            .transport(transport.clone())
            .build()
            .unwrap();

        let request = ApiRequest::get("get_pairs").query(Query::new().param("symbol", "btc"));
        let pairs: Vec<String> = client.execute(request).await.unwrap();
        assert_eq!(pairs, vec!["eth"]);

        let sent = transport.single_request();
        assert_eq!(sent.method, Method::GET);
        assert_eq!(sent.url, "https://api.example.com/get_pairs?api_key=K&symbol=btc");
        assert_eq!(sent.headers.get(USER_AGENT).unwrap(), "my-app/1.0");
        assert!(sent.body.is_none());
    }

    #[tokio::test]
    async fn test_execute_surfaces_transport_error() {
        let client = SwapRestClient::builder()
            .api_key("K")
            .transport(FailingTransport)
            .build()
            .unwrap();

        let err = client
            .execute::<bool>(ApiRequest::get("check_exchanges"))
            .await
            .unwrap_err();
        assert!(err.is_transport());
        assert!(err.api_error().is_none());
    }

    #[test]
    fn test_post_json_sets_content_type() {
        let request = ApiRequest::post_json("create_exchange", &serde_json::json!({"a": 1})).unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(request.body.as_deref(), Some(br#"{"a":1}"#.as_slice()));
    }

    #[test]
    fn test_optional_header_skips_empty_value() {
        let request = ApiRequest::get("x")
            .optional_header(HeaderName::from_static("x-user-agent"), "")
            .unwrap();
        assert!(request.headers.is_empty());

        let err = ApiRequest::get("x")
            .optional_header(HeaderName::from_static("x-forwarded-for"), "bad\nvalue")
            .unwrap_err();
        assert!(matches!(err, SimpleSwapError::InvalidHeader(_)));
    }
}
