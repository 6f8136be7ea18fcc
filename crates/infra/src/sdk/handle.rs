//! Swappable facade reference

use std::sync::Arc;

use flexprice_domain::SdkConfig;
use parking_lot::RwLock;
use tracing::info;

use super::FlexPrice;
use crate::api::ApiError;

/// Shared, reconfigurable access to the current [`FlexPrice`] facade.
///
/// [`update_config`](Self::update_config) builds a complete facade first and
/// only then replaces the reference. Callers that already hold an `Arc` from
/// [`current`](Self::current) finish on the configuration they started with.
#[derive(Clone)]
pub struct FlexPriceHandle {
    inner: Arc<RwLock<Arc<FlexPrice>>>,
}

impl FlexPriceHandle {
    /// # Errors
    ///
    /// Propagates [`FlexPrice::new`] failures.
    pub fn new(config: SdkConfig) -> Result<Self, ApiError> {
        Ok(Self::from_facade(FlexPrice::new(config)?))
    }

    pub fn from_facade(facade: FlexPrice) -> Self {
        Self { inner: Arc::new(RwLock::new(Arc::new(facade))) }
    }

    /// Snapshot of the facade in effect right now.
    pub fn current(&self) -> Arc<FlexPrice> {
        self.inner.read().clone()
    }

    /// Replace the configuration for every subsequent call.
    ///
    /// On error the previous facade stays in place.
    pub fn update_config(&self, config: SdkConfig) -> Result<(), ApiError> {
        let next = Arc::new(FlexPrice::new(config)?);
        info!(base_path = %next.config().base_path, "FlexPrice configuration replaced");
        *self.inner.write() = next;
        Ok(())
    }

    pub fn config(&self) -> SdkConfig {
        self.current().config().clone()
    }

    pub fn is_configured(&self) -> bool {
        self.current().is_configured()
    }
}

impl std::fmt::Debug for FlexPriceHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FlexPriceHandle").field(&self.current()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_leaves_old_snapshot_untouched() {
        let handle = FlexPriceHandle::new(SdkConfig::new("https://old.example.com/v1", "sk_old")).unwrap();
        let before = handle.current();

        handle.update_config(SdkConfig::new("https://new.example.com/v1", "sk_new")).unwrap();

        assert_eq!(before.config().base_path, "https://old.example.com/v1");
        assert_eq!(handle.config().base_path, "https://new.example.com/v1");
        assert_eq!(handle.config().api_key, "sk_new");
    }

    #[test]
    fn failed_update_keeps_previous_facade() {
        let handle = FlexPriceHandle::new(SdkConfig::new("https://api.example.com/v1", "sk")).unwrap();

        let rejected = SdkConfig::new("https://api.example.com/v1", "sk_other").with_header("bad header", "v");
        assert!(handle.update_config(rejected).is_err());
        assert_eq!(handle.config().api_key, "sk");
        assert!(handle.is_configured());
    }
}
