//! Configuration management

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    AUTH_TOKEN_KEY, DEFAULT_API_URL, DEFAULT_KEYCHAIN_SERVICE, DEFAULT_LOGIN_PATH,
    DEFAULT_SDK_BASE_PATH, DEFAULT_TIMEOUT_MS, ENVIRONMENT_HEADER,
};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub sdk: SdkConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Dashboard transport configuration (bearer-authenticated calls)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Applied uniformly to every request
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_URL.to_string(), timeout_ms: DEFAULT_TIMEOUT_MS }
    }
}

/// Configuration shared by every facade sub-client
///
/// The API key is accepted on deserialization but never serialized back out
/// and never shown by `Debug`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdkConfig {
    pub base_path: String,
    #[serde(skip_serializing)]
    pub api_key: String,
    /// Static headers sent with every facade request
    pub headers: BTreeMap<String, String>,
    pub timeout_ms: u64,
}

impl SdkConfig {
    pub fn new(base_path: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { base_path: base_path.into(), api_key: api_key.into(), ..Self::default() }
    }

    /// Add the environment discriminator header.
    #[must_use]
    pub fn with_environment_id(mut self, environment_id: impl Into<String>) -> Self {
        self.headers.insert(ENVIRONMENT_HEADER.to_string(), environment_id.into());
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Readiness check: both base path and API key are non-blank.
    ///
    /// This does not contact the backend.
    pub fn is_configured(&self) -> bool {
        !self.base_path.trim().is_empty() && !self.api_key.trim().is_empty()
    }
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_SDK_BASE_PATH.to_string(),
            api_key: String::new(),
            headers: BTreeMap::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl fmt::Debug for SdkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SdkConfig")
            .field("base_path", &self.base_path)
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("headers", &self.headers)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Path the host navigates to when the backend rejects the credential
    pub login_path: String,
    /// Name of the credential entry in the store
    pub credential_key: String,
    pub keychain_service: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            credential_key: AUTH_TOKEN_KEY.to_string(),
            keychain_service: DEFAULT_KEYCHAIN_SERVICE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_configured_requires_base_path_and_key() {
        assert!(!SdkConfig::default().is_configured());
        assert!(!SdkConfig::new("", "sk_live").is_configured());
        assert!(!SdkConfig::new("https://api.example.com/v1", "   ").is_configured());
        assert!(SdkConfig::new("https://api.example.com/v1", "sk_live").is_configured());
    }

    #[test]
    fn environment_id_becomes_static_header() {
        let config = SdkConfig::new("https://api.example.com/v1", "sk").with_environment_id("env_1");
        assert_eq!(config.headers.get("X-Environment-ID").map(String::as_str), Some("env_1"));
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = SdkConfig::new("https://api.example.com/v1", "sk_secret_value");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk_secret_value"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn api_key_is_not_serialized() {
        let config = SdkConfig::new("https://api.example.com/v1", "sk_secret_value");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("sk_secret_value"));

        let parsed: SdkConfig =
            serde_json::from_str(r#"{"base_path":"https://x/v1","api_key":"sk_in"}"#).unwrap();
        assert_eq!(parsed.api_key, "sk_in");
        assert_eq!(parsed.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn defaults_do_not_embed_credentials() {
        let config = Config::default();
        assert!(config.sdk.api_key.is_empty());
        assert!(config.sdk.headers.is_empty());
        assert_eq!(config.session.login_path, "/login");
        assert_eq!(config.session.credential_key, "auth_token");
        assert_eq!(config.api.timeout_ms, 10_000);
    }
}
