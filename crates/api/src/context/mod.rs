//! Application context - dependency injection container

use std::sync::Arc;

use flexprice_core::{CredentialStore, Navigator, SessionService};
use flexprice_domain::{Config, FlexPriceError, Result, SdkConfig};
use flexprice_infra::{
    config, ApiClient, ApiError, FlexPrice, FlexPriceHandle, KeychainCredentialStore,
    SessionGuard,
};
use parking_lot::Mutex;
use tracing::{info, warn};

use crate::utils::health::{ComponentHealth, HealthStatus};

/// Navigator for hosts without a router: records the requested path so the
/// host can render it, and logs it.
#[derive(Debug, Default)]
pub struct ConsoleNavigator {
    pending: Mutex<Option<String>>,
}

impl ConsoleNavigator {
    /// Take the most recent navigation request, if any.
    pub fn take_redirect(&self) -> Option<String> {
        self.pending.lock().take()
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate(&self, path: &str) {
        info!(path, "navigation requested");
        *self.pending.lock() = Some(path.to_string());
    }
}

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub credentials: Arc<dyn CredentialStore>,
    pub session: SessionService,
    pub guard: SessionGuard,
    /// Bearer-authenticated transport used by dashboard pages
    pub api: Arc<ApiClient>,
    /// API-key-authenticated facade; reconfigurable at runtime
    pub flexprice: FlexPriceHandle,
}

impl AppContext {
    /// Load configuration and wire the platform keychain as credential store.
    ///
    /// # Errors
    /// Returns `FlexPriceError::Config` if configuration cannot be loaded or
    /// a transport cannot be built.
    pub fn new(navigator: Arc<dyn Navigator>) -> Result<Self> {
        let config = config::load()?;
        let credentials: Arc<dyn CredentialStore> =
            Arc::new(KeychainCredentialStore::from_config(&config.session));
        Self::from_parts(config, credentials, navigator)
    }

    /// Wire a context from explicit parts (embedding hosts and tests).
    ///
    /// # Errors
    /// Returns `FlexPriceError::Config` if either transport cannot be built.
    pub fn from_parts(
        config: Config,
        credentials: Arc<dyn CredentialStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let session = SessionService::new(credentials.clone(), navigator, &config.session);
        let api = ApiClient::dashboard(&config.api, credentials.clone()).map_err(setup_error)?;
        let flexprice = FlexPriceHandle::new(config.sdk.clone()).map_err(setup_error)?;

        info!(
            api_url = %api.base_url(),
            sdk_configured = flexprice.is_configured(),
            "application context initialized"
        );

        Ok(Self {
            guard: SessionGuard::new(session.clone()),
            session,
            credentials,
            api: Arc::new(api),
            flexprice,
            config,
        })
    }

    /// Snapshot of the facade currently in effect.
    pub fn facade(&self) -> Arc<FlexPrice> {
        self.flexprice.current()
    }

    /// Replace the facade configuration for all subsequent calls.
    ///
    /// # Errors
    /// The previous configuration stays active when the new one is rejected.
    pub fn reconfigure(&self, sdk: SdkConfig) -> std::result::Result<(), ApiError> {
        if !sdk.is_configured() {
            warn!("reconfiguring FlexPrice without an API key or base path");
        }
        self.flexprice.update_config(sdk)
    }

    /// Local readiness report. No network calls are made.
    pub async fn health_check(&self) -> HealthStatus {
        let credential_store = match self.session.is_authenticated().await {
            Ok(true) => ComponentHealth::healthy("credential_store"),
            Ok(false) => ComponentHealth::unhealthy("credential_store", "not signed in"),
            Err(err) => ComponentHealth::unhealthy("credential_store", err.to_string()),
        };
        let sdk_config = if self.flexprice.is_configured() {
            ComponentHealth::healthy("sdk_config")
        } else {
            ComponentHealth::unhealthy("sdk_config", "FlexPrice API key or base path missing")
        };

        let mut status = HealthStatus::new().add_component(credential_store).add_component(sdk_config);
        status.calculate_score();
        status
    }
}

fn setup_error(err: ApiError) -> FlexPriceError {
    FlexPriceError::Config(format!("Failed to build API client: {err}"))
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("flexprice", &self.flexprice)
            .finish_non_exhaustive()
    }
}
