//! Session service - sign-in state and the login redirect

use std::sync::Arc;

use flexprice_domain::{FlexPriceError, Result, SessionConfig};
use tracing::{info, warn};

use super::ports::Navigator;
use crate::auth::ports::CredentialStore;

/// Owns the credential lifecycle on behalf of the host.
///
/// The transport only reports a rejected credential; this service turns that
/// report into navigation.
#[derive(Clone)]
pub struct SessionService {
    credentials: Arc<dyn CredentialStore>,
    navigator: Arc<dyn Navigator>,
    login_path: String,
}

impl SessionService {
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        navigator: Arc<dyn Navigator>,
        config: &SessionConfig,
    ) -> Self {
        Self { credentials, navigator, login_path: config.login_path.clone() }
    }

    /// Store a freshly issued token.
    pub async fn sign_in(&self, token: &str) -> Result<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(FlexPriceError::InvalidInput("token must not be empty".into()));
        }
        self.credentials.store(token).await?;
        info!("credential stored");
        Ok(())
    }

    pub async fn sign_out(&self) -> Result<()> {
        self.credentials.clear().await?;
        info!("credential cleared");
        Ok(())
    }

    pub async fn is_authenticated(&self) -> Result<bool> {
        Ok(self.credentials.token().await?.is_some_and(|t| !t.is_empty()))
    }

    /// Send the host to the login screen.
    pub fn redirect_to_login(&self) {
        warn!(path = %self.login_path, "credential rejected, redirecting to login");
        self.navigator.navigate(&self.login_path);
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }
}
