//! Request and response interceptors
//!
//! Request interceptors decorate every outgoing request (credentials, API
//! keys). Response interceptors observe every failure before it reaches the
//! caller; they cannot change the error.

use std::sync::Arc;

use async_trait::async_trait;
use flexprice_core::CredentialStore;
use flexprice_domain::constants::API_KEY_HEADER;
use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;
use tracing::{debug, error, info, warn};

use super::errors::{ApiError, ApiErrorCategory};

#[async_trait]
pub trait RequestInterceptor: Send + Sync {
    async fn on_request(&self, request: RequestBuilder) -> Result<RequestBuilder, ApiError>;
}

#[async_trait]
pub trait ResponseInterceptor: Send + Sync {
    async fn on_error(&self, error: &ApiError);
}

/// Attaches `Authorization: Bearer <token>` when the store holds a token.
///
/// The store is read on every request so sign-in and sign-out take effect
/// immediately. Without a token the request proceeds unauthenticated.
pub struct BearerAuth {
    credentials: Arc<dyn CredentialStore>,
}

impl BearerAuth {
    pub fn new(credentials: Arc<dyn CredentialStore>) -> Self {
        Self { credentials }
    }
}

#[async_trait]
impl RequestInterceptor for BearerAuth {
    async fn on_request(&self, request: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        match self.credentials.token().await? {
            Some(token) if !token.is_empty() => {
                Ok(request.header(AUTHORIZATION, format!("Bearer {token}")))
            }
            _ => {
                debug!("no stored credential, sending unauthenticated request");
                Ok(request)
            }
        }
    }
}

/// Attaches the facade API key.
pub struct ApiKeyAuth {
    api_key: String,
}

impl ApiKeyAuth {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into() }
    }
}

#[async_trait]
impl RequestInterceptor for ApiKeyAuth {
    async fn on_request(&self, request: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        if self.api_key.trim().is_empty() {
            return Ok(request);
        }
        Ok(request.header(API_KEY_HEADER, self.api_key.as_str()))
    }
}

/// Clears the stored credential when the backend answers 401.
pub struct ClearCredentialsOnUnauthorized {
    credentials: Arc<dyn CredentialStore>,
}

impl ClearCredentialsOnUnauthorized {
    pub fn new(credentials: Arc<dyn CredentialStore>) -> Self {
        Self { credentials }
    }
}

#[async_trait]
impl ResponseInterceptor for ClearCredentialsOnUnauthorized {
    async fn on_error(&self, error: &ApiError) {
        if !error.is_unauthenticated() {
            return;
        }
        match self.credentials.clear().await {
            Ok(()) => info!("credential rejected by backend, cleared"),
            Err(err) => warn!(error = %err, "failed to clear rejected credential"),
        }
    }
}

/// One structured log line per failure category.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailureLogger;

#[async_trait]
impl ResponseInterceptor for FailureLogger {
    async fn on_error(&self, error: &ApiError) {
        let status = error.status();
        match error.category() {
            ApiErrorCategory::Unauthenticated => warn!(?status, "request unauthenticated"),
            ApiErrorCategory::Forbidden => warn!(?status, message = %error.message(), "request forbidden"),
            ApiErrorCategory::NotFound => debug!(?status, message = %error.message(), "resource not found"),
            ApiErrorCategory::Server => error!(?status, message = %error.message(), "server error"),
            ApiErrorCategory::Status => warn!(?status, message = %error.message(), "request failed"),
            ApiErrorCategory::NoResponse => error!(detail = ?error, "no response received from server"),
            ApiErrorCategory::RequestSetup => error!(error = %error, "request setup failed"),
            ApiErrorCategory::InvalidResponse => error!(error = %error, "unexpected response body"),
            ApiErrorCategory::Unsupported => warn!(error = %error, "unsupported operation"),
        }
    }
}
