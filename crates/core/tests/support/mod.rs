//! Shared test helpers for `flexprice-core` integration tests.

use async_trait::async_trait;
use flexprice_core::{CredentialStore, Navigator};
use flexprice_domain::{FlexPriceError, Result as DomainResult};
use parking_lot::Mutex;

/// In-memory credential store that can be told to fail.
#[derive(Default)]
pub struct MockCredentialStore {
    token: Mutex<Option<String>>,
    fail: bool,
}

impl MockCredentialStore {
    pub fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_string())), fail: false }
    }

    pub fn failing() -> Self {
        Self { token: Mutex::new(None), fail: true }
    }

    pub fn current(&self) -> Option<String> {
        self.token.lock().clone()
    }

    fn check(&self) -> DomainResult<()> {
        if self.fail {
            Err(FlexPriceError::Storage("keychain locked".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CredentialStore for MockCredentialStore {
    async fn token(&self) -> DomainResult<Option<String>> {
        self.check()?;
        Ok(self.current())
    }

    async fn store(&self, token: &str) -> DomainResult<()> {
        self.check()?;
        *self.token.lock() = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> DomainResult<()> {
        self.check()?;
        *self.token.lock() = None;
        Ok(())
    }
}

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
