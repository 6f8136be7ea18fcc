//! Readiness report for the dashboard
//!
//! Provides HealthStatus and ComponentHealth types describing whether the
//! credential store, the session and the facade configuration are usable.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Overall readiness of the dashboard
///
/// # Example
/// ```no_run
/// use flexprice_lib::utils::health::{ComponentHealth, HealthStatus};
///
/// let mut status = HealthStatus::new()
///     .add_component(ComponentHealth::healthy("credential_store"))
///     .add_component(ComponentHealth::unhealthy("sdk_config", "API key missing"));
/// status.calculate_score();
///
/// assert_eq!(status.score, 0.5);
/// assert!(!status.is_healthy);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub is_healthy: bool,

    /// Calculated as: (healthy_components / total_components)
    pub score: f64,

    pub message: Option<String>,

    pub components: Vec<ComponentHealth>,

    /// Unix timestamp when the report was produced
    pub timestamp: i64,
}

impl HealthStatus {
    /// Healthy with score 1.0 and no components
    pub fn new() -> Self {
        Self {
            is_healthy: true,
            score: 1.0,
            message: None,
            components: Vec::new(),
            timestamp: Utc::now().timestamp(),
        }
    }

    pub fn add_component(mut self, component: ComponentHealth) -> Self {
        self.components.push(component);
        self
    }

    /// Every component must be healthy; the first failure becomes the message.
    ///
    /// Should be called after all components have been added.
    pub fn calculate_score(&mut self) {
        if self.components.is_empty() {
            return;
        }

        let healthy_count = self.components.iter().filter(|c| c.is_healthy).count();

        self.score = healthy_count as f64 / self.components.len() as f64;
        self.is_healthy = healthy_count == self.components.len();
        self.message = self
            .components
            .iter()
            .find(|c| !c.is_healthy)
            .map(|c| format!("{}: {}", c.name, c.message.as_deref().unwrap_or("unhealthy")));
    }
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self::new()
    }
}

/// Readiness of one component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    /// Component identifier (e.g., "credential_store", "sdk_config")
    pub name: String,
    pub is_healthy: bool,
    pub message: Option<String>,
}

impl ComponentHealth {
    pub fn healthy(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_healthy: true, message: None }
    }

    pub fn unhealthy(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self { name: name.into(), is_healthy: false, message: Some(message.into()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_new() {
        let status = HealthStatus::new();
        assert!(status.is_healthy);
        assert_eq!(status.score, 1.0);
        assert!(status.message.is_none());
        assert!(status.components.is_empty());
    }

    #[test]
    fn test_calculate_score_all_healthy() {
        let mut status = HealthStatus::new()
            .add_component(ComponentHealth::healthy("credential_store"))
            .add_component(ComponentHealth::healthy("sdk_config"));

        status.calculate_score();

        assert_eq!(status.score, 1.0);
        assert!(status.is_healthy);
        assert!(status.message.is_none());
    }

    #[test]
    fn test_single_failure_is_unhealthy() {
        let mut status = HealthStatus::new()
            .add_component(ComponentHealth::healthy("credential_store"))
            .add_component(ComponentHealth::healthy("session"))
            .add_component(ComponentHealth::unhealthy("sdk_config", "API key missing"));

        status.calculate_score();

        assert!(!status.is_healthy);
        assert_eq!(status.message.as_deref(), Some("sdk_config: API key missing"));
    }

    #[test]
    fn test_component_health_constructors() {
        let unhealthy = ComponentHealth::unhealthy("session", "not signed in");
        assert!(!unhealthy.is_healthy);
        assert_eq!(unhealthy.message, Some("not signed in".to_string()));
    }
}
