//! Typed API client
//!
//! Wraps [`HttpClient`] with a base URL, request/response interceptors and
//! the typed verb surface. Successful calls yield the decoded body only;
//! failures yield a classified [`ApiError`].

use std::sync::Arc;
use std::time::Duration;

use flexprice_core::CredentialStore;
use flexprice_domain::ApiConfig;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use super::errors::{ApiError, ErrorBody};
use super::interceptor::{
    BearerAuth, ClearCredentialsOnUnauthorized, FailureLogger, RequestInterceptor,
    ResponseInterceptor,
};
use super::sanitize::sanitize;
use crate::http::HttpClient;

const USER_AGENT: &str = concat!("flexprice-dashboard/", env!("CARGO_PKG_VERSION"));

/// API client with interceptor stages
#[derive(Clone)]
pub struct ApiClient {
    http: HttpClient,
    base_url: String,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClient {
    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Bearer-authenticated client for the dashboard pages.
    ///
    /// Reads the credential before every request and clears it on 401.
    pub fn dashboard(
        config: &ApiConfig,
        credentials: Arc<dyn CredentialStore>,
    ) -> Result<Self, ApiError> {
        Self::builder()
            .base_url(config.base_url.as_str())
            .timeout(Duration::from_millis(config.timeout_ms))
            .request_interceptor(Arc::new(BearerAuth::new(credentials.clone())))
            .response_interceptor(Arc::new(ClearCredentialsOnUnauthorized::new(credentials)))
            .response_interceptor(Arc::new(FailureLogger))
            .build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.http.timeout()
    }

    /// Execute a GET request
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::GET, path)).await
    }

    /// Execute a GET request with query pairs. Repeated keys are sent as-is.
    #[instrument(skip(self, query), fields(path = %path))]
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.request(Method::GET, path).query(query)).await
    }

    /// Execute a POST request with a sanitized body
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<T, D>(&self, path: &str, body: &D) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        D: Serialize + ?Sized,
    {
        self.send_with_body(Method::POST, path, body).await
    }

    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn patch<T, D>(&self, path: &str, body: &D) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        D: Serialize + ?Sized,
    {
        self.send_with_body(Method::PATCH, path, body).await
    }

    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn put<T, D>(&self, path: &str, body: &D) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        D: Serialize + ?Sized,
    {
        self.send_with_body(Method::PUT, path, body).await
    }

    #[instrument(skip(self), fields(path = %path))]
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::DELETE, path)).await
    }

    /// DELETE carrying a sanitized request body (not query parameters)
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn delete_with_body<T, D>(&self, path: &str, body: &D) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        D: Serialize + ?Sized,
    {
        self.send_with_body(Method::DELETE, path, body).await
    }

    async fn send_with_body<T, D>(&self, method: Method, path: &str, body: &D) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        D: Serialize + ?Sized,
    {
        let request = match sanitize(body) {
            Ok(Some(map)) => self.request(method, path).json(&map),
            Ok(None) => self.request(method, path),
            Err(err) => return Err(self.observe(err).await),
        };
        self.send(request).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Run the interceptor stages around one exchange.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        match self.exchange(request).await {
            Ok(value) => Ok(value),
            Err(err) => Err(self.observe(err).await),
        }
    }

    async fn exchange<T: DeserializeOwned>(&self, mut request: RequestBuilder) -> Result<T, ApiError> {
        if self.base_url.is_empty() {
            return Err(ApiError::RequestSetup("Base URL not set".to_string()));
        }
        for interceptor in &self.request_interceptors {
            request = interceptor.on_request(request).await?;
        }

        let response = self.http.send(request).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, ErrorBody::parse(&body)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {e}")))?;

        // Empty bodies (204, 202 without payload) decode from JSON null
        let result = if bytes.iter().all(u8::is_ascii_whitespace) {
            serde_json::from_value(serde_json::Value::Null).map_err(|_| {
                ApiError::InvalidResponse(format!(
                    "Empty response ({}), but response type cannot be deserialized from empty body",
                    status.as_u16()
                ))
            })?
        } else {
            serde_json::from_slice(&bytes)
                .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {e}")))?
        };

        debug!(status = status.as_u16(), "request successful");
        Ok(result)
    }

    async fn observe(&self, err: ApiError) -> ApiError {
        for interceptor in &self.response_interceptors {
            interceptor.on_error(&err).await;
        }
        err
    }
}

/// Builder for API client
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    headers: Vec<(String, String)>,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Static header sent with every request
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn request_interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.request_interceptors.push(interceptor);
        self
    }

    pub fn response_interceptor(mut self, interceptor: Arc<dyn ResponseInterceptor>) -> Self {
        self.response_interceptors.push(interceptor);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestSetup`] if the underlying HTTP client cannot
    /// be created. A missing base URL is not fatal here: the client builds and
    /// every call fails with `RequestSetup` before anything is sent.
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let base_url = self
            .base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_default();
        if base_url.is_empty() {
            warn!("API client built without a base URL; requests will fail until one is configured");
        }

        let mut http = HttpClient::builder().user_agent(USER_AGENT).headers(self.headers);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        Ok(ApiClient {
            http: http.build()?,
            base_url,
            request_interceptors: self.request_interceptors,
            response_interceptors: self.response_interceptors,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestResponse {
        message: String,
    }

    fn client(server: &MockServer) -> ApiClient {
        ApiClient::builder().base_url(server.uri()).build().unwrap()
    }

    #[tokio::test]
    async fn missing_base_url_fails_each_call() {
        let client = ApiClient::builder().base_url("  ").build().unwrap();
        assert_eq!(client.base_url(), "");

        let err = client.get::<serde_json::Value>("/customers").await.unwrap_err();
        assert!(matches!(err, ApiError::RequestSetup(ref msg) if msg == "Base URL not set"));

        let unset = ApiClient::builder().build().unwrap();
        let err = unset.post::<serde_json::Value, _>("/events", &serde_json::json!({})).await.unwrap_err();
        assert!(matches!(err, ApiError::RequestSetup(_)));
    }

    #[test]
    fn joins_paths_without_double_slash() {
        let client = ApiClient::builder().base_url("https://api.example.com/v1/").build().unwrap();
        assert_eq!(client.url("/customers"), "https://api.example.com/v1/customers");
        assert_eq!(client.url("plans"), "https://api.example.com/v1/plans");
    }

    #[tokio::test]
    async fn get_returns_body_only() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "ok"})))
            .mount(&server)
            .await;

        let result: TestResponse = client(&server).get("/test").await.unwrap();
        assert_eq!(result, TestResponse { message: "ok".into() });
    }

    #[tokio::test]
    async fn empty_success_decodes_from_null() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/items/1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let result: Result<(), ApiError> = client(&server).delete("/items/1").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn mismatched_body_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result: Result<TestResponse, ApiError> = client(&server).get("/x").await;
        assert!(matches!(result, Err(ApiError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn post_sends_sanitized_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/create"))
            .and(body_json(serde_json::json!({"a": 1})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "created"})))
            .expect(1)
            .mount(&server)
            .await;

        let body = serde_json::json!({"a": 1, "b": null, "c": ""});
        let result: TestResponse = client(&server).post("/create", &body).await.unwrap();
        assert_eq!(result.message, "created");
    }

    #[tokio::test]
    async fn query_pairs_repeat_keys() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/customers"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "ok"})))
            .mount(&server)
            .await;

        let query = vec![("customer_ids", "c1".to_string()), ("customer_ids", "c2".to_string()), ("limit", "5".to_string())];
        let _: TestResponse = client(&server).get_with_query("/customers", &query).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), Some("customer_ids=c1&customer_ids=c2&limit=5"));
    }
}
