//! Shared helpers for application-layer integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use flexprice_core::Navigator;
use flexprice_domain::{ApiConfig, Config, SdkConfig};
use flexprice_infra::MemoryCredentialStore;
use flexprice_lib::context::AppContext;
use parking_lot::Mutex;
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "sk_test_dashboard";

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

/// Context wired against a mock backend with in-memory credentials.
pub struct TestContext {
    pub context: AppContext,
    pub credentials: Arc<MemoryCredentialStore>,
    pub navigator: Arc<RecordingNavigator>,
}

impl TestContext {
    pub fn against(server: &MockServer, token: Option<&str>) -> Self {
        Self::with_sdk(server, token, SdkConfig::new(server.uri(), TEST_API_KEY))
    }

    pub fn with_sdk(server: &MockServer, token: Option<&str>, sdk: SdkConfig) -> Self {
        let credentials = Arc::new(match token {
            Some(token) => MemoryCredentialStore::with_token(token),
            None => MemoryCredentialStore::new(),
        });
        let navigator = Arc::new(RecordingNavigator::default());
        let config = Config {
            api: ApiConfig { base_url: server.uri(), timeout_ms: 2_000 },
            sdk,
            ..Config::default()
        };

        let context = AppContext::from_parts(config, credentials.clone(), navigator.clone())
            .expect("failed to build test context");

        Self { context, credentials, navigator }
    }
}
