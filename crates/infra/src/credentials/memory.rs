use async_trait::async_trait;
use flexprice_core::CredentialStore;
use flexprice_domain::Result;
use parking_lot::RwLock;

/// Process-local credential store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: RwLock<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: RwLock::new(Some(token.into())) }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn token(&self) -> Result<Option<String>> {
        Ok(self.token.read().clone())
    }

    async fn store(&self, token: &str) -> Result<()> {
        *self.token.write() = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.token.write().take();
        Ok(())
    }
}
