//! Shared helpers for `flexprice-infra` integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use flexprice_core::{CredentialStore, Navigator, SessionService};
use flexprice_domain::{ApiConfig, FlexPriceError, Result as DomainResult, SessionConfig};
use flexprice_infra::{ApiClient, MemoryCredentialStore, SessionGuard};
use parking_lot::Mutex;
use wiremock::MockServer;

/// Records every navigation request.
#[derive(Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.lock().push(path.to_string());
    }
}

/// Credential store whose every operation fails.
pub struct LockedCredentialStore;

#[async_trait]
impl CredentialStore for LockedCredentialStore {
    async fn token(&self) -> DomainResult<Option<String>> {
        Err(FlexPriceError::Storage("keychain locked".into()))
    }

    async fn store(&self, _token: &str) -> DomainResult<()> {
        Err(FlexPriceError::Storage("keychain locked".into()))
    }

    async fn clear(&self) -> DomainResult<()> {
        Err(FlexPriceError::Storage("keychain locked".into()))
    }
}

/// Dashboard client wired the way the application wires it.
pub struct Dashboard {
    pub client: ApiClient,
    pub credentials: Arc<MemoryCredentialStore>,
    pub navigator: Arc<RecordingNavigator>,
    pub guard: SessionGuard,
}

impl Dashboard {
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        let credentials = Arc::new(match token {
            Some(token) => MemoryCredentialStore::with_token(token),
            None => MemoryCredentialStore::new(),
        });
        let navigator = Arc::new(RecordingNavigator::default());
        let config = ApiConfig { base_url: base_url.to_string(), timeout_ms: 2_000 };

        let client = ApiClient::dashboard(&config, credentials.clone()).unwrap();
        let session = SessionService::new(credentials.clone(), navigator.clone(), &SessionConfig::default());

        Self { client, credentials, navigator, guard: SessionGuard::new(session) }
    }

    pub fn against(server: &MockServer, token: Option<&str>) -> Self {
        Self::new(&server.uri(), token)
    }

    pub async fn token(&self) -> Option<String> {
        self.credentials.token().await.unwrap()
    }
}
