//! Platform keychain credential store
//!
//! Persists the bearer token in macOS Keychain Access, Windows Credential
//! Manager or the Linux Secret Service. The entry is addressed by
//! `(service, credential key)`.

use async_trait::async_trait;
use flexprice_core::CredentialStore;
use flexprice_domain::{FlexPriceError, Result, SessionConfig};
use keyring::Entry;
use tracing::debug;

use crate::errors::InfraError;

pub struct KeychainCredentialStore {
    service: String,
    account: String,
}

impl KeychainCredentialStore {
    pub fn new(service: impl Into<String>, account: impl Into<String>) -> Self {
        Self { service: service.into(), account: account.into() }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.keychain_service.clone(), config.credential_key.clone())
    }

    fn entry(&self) -> Result<Entry> {
        Entry::new(&self.service, &self.account).map_err(|e| InfraError::from(e).into())
    }
}

#[async_trait]
impl CredentialStore for KeychainCredentialStore {
    async fn token(&self) -> Result<Option<String>> {
        debug!(service = %self.service, key = %self.account, "Reading credential from keychain");
        match self.entry()?.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(InfraError::from(e).into()),
        }
    }

    async fn store(&self, token: &str) -> Result<()> {
        debug!(service = %self.service, key = %self.account, "Storing credential in keychain");
        self.entry()?.set_password(token).map_err(|e| InfraError::from(e).into())
    }

    /// Idempotent: a missing entry is not an error.
    async fn clear(&self) -> Result<()> {
        debug!(service = %self.service, key = %self.account, "Deleting credential from keychain");
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(FlexPriceError::from(InfraError::from(e))),
        }
    }
}

impl std::fmt::Debug for KeychainCredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeychainCredentialStore")
            .field("service", &self.service)
            .field("account", &self.account)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_entry_from_session_config() {
        let store = KeychainCredentialStore::from_config(&SessionConfig::default());
        assert_eq!(store.service, "FlexPrice.dashboard");
        assert_eq!(store.account, "auth_token");
    }

    // Requires an unlocked platform keychain.
    #[tokio::test]
    #[ignore]
    async fn round_trips_through_platform_keychain() {
        let store = KeychainCredentialStore::new("FlexPrice.dashboard.test", "auth_token");
        store.store("tok_keychain").await.unwrap();
        assert_eq!(store.token().await.unwrap().as_deref(), Some("tok_keychain"));
        store.clear().await.unwrap();
        store.clear().await.unwrap();
        assert_eq!(store.token().await.unwrap(), None);
    }
}
