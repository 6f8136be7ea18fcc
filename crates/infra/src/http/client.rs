use std::collections::BTreeMap;
use std::time::Duration;

use flexprice_domain::constants::DEFAULT_TIMEOUT_MS;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use thiserror::Error;
use tracing::debug;

/// Failure before any HTTP status was received.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be built (bad URL, header or body).
    #[error("{0}")]
    Setup(String),

    /// The request left but nothing came back (timeout, refused, DNS).
    #[error("No response received from server")]
    NoResponse(String),
}

/// HTTP client with a fixed timeout and JSON defaults. Requests are sent once.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: ReqwestClient,
    timeout: Duration,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, TransportError> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Execute the provided request builder.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, TransportError> {
        let request = builder.build().map_err(|err| TransportError::Setup(err.to_string()))?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                debug!(%method, %url, status = %response.status(), "received HTTP response");
                Ok(response)
            }
            Err(err) if err.is_builder() => Err(TransportError::Setup(err.to_string())),
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed without response");
                Err(TransportError::NoResponse(describe(&err)))
            }
        }
    }
}

fn describe(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        return "HTTP request timed out".into();
    }
    #[cfg(not(target_arch = "wasm32"))]
    if err.is_connect() {
        return "HTTP connection failure".into();
    }
    err.to_string()
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
    headers: BTreeMap<String, String>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            user_agent: None,
            headers: BTreeMap::new(),
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Static header sent with every request
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers.extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn build(self) -> Result<HttpClient, TransportError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| TransportError::Setup(format!("invalid header name '{name}': {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| TransportError::Setup(format!("invalid value for header '{name}': {e}")))?;
            default_headers.insert(name, value);
        }

        let mut builder = ReqwestClient::builder()
            .timeout(self.timeout)
            .default_headers(default_headers)
            .no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder.build().map_err(|err| TransportError::Setup(err.to_string()))?;

        Ok(HttpClient { client, timeout: self.timeout })
    }
}
