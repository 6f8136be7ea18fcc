use std::sync::Arc;

use flexprice_domain::{AuthResponse, LoginRequest, SignUpRequest};
use tracing::instrument;

use crate::api::{ApiClient, ApiError};

/// Sub-client for `/auth`. Passwords are never recorded on spans.
#[derive(Clone)]
pub struct AuthApi {
    client: Arc<ApiClient>,
}

impl AuthApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    #[instrument(skip_all, fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.client.post("/auth/login", request).await
    }

    #[instrument(skip_all, fields(email = %request.email))]
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthResponse, ApiError> {
        self.client.post("/auth/signup", request).await
    }
}
