//! Configuration loader
//!
//! Loads application configuration from a file (or defaults) and then applies
//! environment overrides.
//!
//! ## Loading Strategy
//! 1. Probe the standard locations for a config file
//! 2. Fall back to [`Config::default`] when none exists
//! 3. Apply `FLEXPRICE_*` environment overrides on top
//!
//! ## Environment Variables
//! - `FLEXPRICE_API_URL`: Dashboard transport base URL
//! - `FLEXPRICE_API_TIMEOUT_MS`: Request timeout in milliseconds (both transports)
//! - `FLEXPRICE_BASE_URL`: Facade base path
//! - `FLEXPRICE_API_KEY`: Facade API key
//! - `FLEXPRICE_ENVIRONMENT_ID`: Sent as the `X-Environment-ID` header
//! - `FLEXPRICE_LOGIN_PATH`: Navigation target after a rejected credential
//! - `FLEXPRICE_CREDENTIAL_KEY`: Credential entry name
//! - `FLEXPRICE_KEYCHAIN_SERVICE`: Keychain service name
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./flexprice.json` or `./flexprice.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use flexprice_domain::{Config, FlexPriceError, Result};

const CONFIG_STEMS: [&str; 2] = ["flexprice", "config"];
const CONFIG_EXTENSIONS: [&str; 2] = ["json", "toml"];

/// Load configuration: file or defaults, then environment overrides.
///
/// # Errors
/// Returns `FlexPriceError::Config` if a config file exists but cannot be
/// parsed, or an override holds an invalid value.
pub fn load() -> Result<Config> {
    let config = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    let config = apply_env_overrides(config)?;
    if !config.sdk.is_configured() {
        tracing::warn!("FLEXPRICE_API_KEY is not set; facade calls will be rejected");
    }
    Ok(config)
}

/// Defaults with environment overrides applied, ignoring config files.
///
/// # Errors
/// Returns `FlexPriceError::Config` if an override holds an invalid value.
pub fn load_from_env() -> Result<Config> {
    apply_env_overrides(Config::default())
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Supports JSON and
/// TOML (detected by file extension). Missing sections take their defaults.
///
/// # Errors
/// Returns `FlexPriceError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(FlexPriceError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            FlexPriceError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| FlexPriceError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Overlay `FLEXPRICE_*` variables onto `config`.
///
/// Blank values are treated as unset.
///
/// # Errors
/// Returns `FlexPriceError::Config` for a non-numeric timeout.
pub fn apply_env_overrides(mut config: Config) -> Result<Config> {
    if let Some(url) = env_opt("FLEXPRICE_API_URL") {
        config.api.base_url = url;
    }
    if let Some(raw) = env_opt("FLEXPRICE_API_TIMEOUT_MS") {
        let timeout_ms = raw
            .parse::<u64>()
            .map_err(|e| FlexPriceError::Config(format!("Invalid request timeout: {}", e)))?;
        config.api.timeout_ms = timeout_ms;
        config.sdk.timeout_ms = timeout_ms;
    }
    if let Some(base_path) = env_opt("FLEXPRICE_BASE_URL") {
        config.sdk.base_path = base_path;
    }
    if let Some(api_key) = env_opt("FLEXPRICE_API_KEY") {
        config.sdk.api_key = api_key;
    }
    if let Some(environment_id) = env_opt("FLEXPRICE_ENVIRONMENT_ID") {
        config.sdk = config.sdk.with_environment_id(environment_id);
    }
    if let Some(login_path) = env_opt("FLEXPRICE_LOGIN_PATH") {
        config.session.login_path = login_path;
    }
    if let Some(key) = env_opt("FLEXPRICE_CREDENTIAL_KEY") {
        config.session.credential_key = key;
    }
    if let Some(service) = env_opt("FLEXPRICE_KEYCHAIN_SERVICE") {
        config.session.keychain_service = service;
    }
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `FlexPriceError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| FlexPriceError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| FlexPriceError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(FlexPriceError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf)) {
        dirs.push(exe_dir);
    }

    dirs.iter()
        .flat_map(|dir| {
            CONFIG_STEMS.iter().flat_map(move |stem| {
                CONFIG_EXTENSIONS.iter().map(move |ext| dir.join(format!("{stem}.{ext}")))
            })
        })
        .find(|path| path.exists())
}

/// Read an environment variable, treating unset and blank alike.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const VARS: [&str; 8] = [
        "FLEXPRICE_API_URL",
        "FLEXPRICE_API_TIMEOUT_MS",
        "FLEXPRICE_BASE_URL",
        "FLEXPRICE_API_KEY",
        "FLEXPRICE_ENVIRONMENT_ID",
        "FLEXPRICE_LOGIN_PATH",
        "FLEXPRICE_CREDENTIAL_KEY",
        "FLEXPRICE_KEYCHAIN_SERVICE",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    fn temp_config(contents: &str, extension: &str) -> PathBuf {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(contents.as_bytes()).unwrap();
        let path = temp_file.path().with_extension(extension);
        std::fs::copy(temp_file.path(), &path).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_env() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let config = load_from_env().unwrap();
        assert_eq!(config, Config::default());
        assert!(config.sdk.api_key.is_empty(), "defaults must not embed an API key");
        assert!(config.sdk.headers.is_empty(), "defaults must not embed an environment id");
    }

    #[test]
    fn test_env_overrides_every_section() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("FLEXPRICE_API_URL", "http://localhost:8080/v1");
        std::env::set_var("FLEXPRICE_API_TIMEOUT_MS", "2500");
        std::env::set_var("FLEXPRICE_BASE_URL", "http://localhost:8080/v1");
        std::env::set_var("FLEXPRICE_API_KEY", "sk_test");
        std::env::set_var("FLEXPRICE_ENVIRONMENT_ID", "env_dev");
        std::env::set_var("FLEXPRICE_LOGIN_PATH", "/auth");
        std::env::set_var("FLEXPRICE_CREDENTIAL_KEY", "session_token");
        std::env::set_var("FLEXPRICE_KEYCHAIN_SERVICE", "FlexPrice.test");

        let result = load_from_env();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080/v1");
        assert_eq!(config.api.timeout_ms, 2500);
        assert_eq!(config.sdk.timeout_ms, 2500);
        assert_eq!(config.sdk.api_key, "sk_test");
        assert_eq!(config.sdk.headers.get("X-Environment-ID").map(String::as_str), Some("env_dev"));
        assert!(config.sdk.is_configured());
        assert_eq!(config.session.login_path, "/auth");
        assert_eq!(config.session.credential_key, "session_token");
        assert_eq!(config.session.keychain_service, "FlexPrice.test");
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        std::env::set_var("FLEXPRICE_API_KEY", "   ");

        let result = load_from_env();
        clear_env();

        assert!(result.unwrap().sdk.api_key.is_empty());
    }

    #[test]
    fn test_invalid_timeout_is_config_error() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        std::env::set_var("FLEXPRICE_API_TIMEOUT_MS", "ten seconds");

        let result = load_from_env();
        clear_env();

        assert!(matches!(result, Err(FlexPriceError::Config(_))), "Should be a Config error");
    }

    #[test]
    fn test_load_from_file_json_partial() {
        let path = temp_config(
            r#"{ "sdk": { "base_path": "https://billing.example.com/v1", "api_key": "sk_file" } }"#,
            "json",
        );

        let config = load_from_file(Some(path.clone())).unwrap();
        assert_eq!(config.sdk.base_path, "https://billing.example.com/v1");
        assert_eq!(config.sdk.api_key, "sk_file");
        assert_eq!(config.api, Default::default());
        assert_eq!(config.session.login_path, "/login");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_toml() {
        let path = temp_config(
            r#"
[api]
base_url = "https://dashboard.example.com/v1"
timeout_ms = 5000

[session]
login_path = "/signin"

[sdk.headers]
X-Environment-ID = "env_toml"
"#,
            "toml",
        );

        let config = load_from_file(Some(path.clone())).unwrap();
        assert_eq!(config.api.base_url, "https://dashboard.example.com/v1");
        assert_eq!(config.api.timeout_ms, 5000);
        assert_eq!(config.session.login_path, "/signin");
        assert_eq!(config.sdk.headers.get("X-Environment-ID").map(String::as_str), Some("env_toml"));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_file_then_env_override() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        let path = temp_config(r#"{ "sdk": { "api_key": "sk_file" } }"#, "json");
        std::env::set_var("FLEXPRICE_API_KEY", "sk_env");

        let result = load_from_file(Some(path.clone())).and_then(apply_env_overrides);
        clear_env();
        std::fs::remove_file(path).ok();

        assert_eq!(result.unwrap().sdk.api_key, "sk_env");
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/flexprice.json")));
        assert!(matches!(result, Err(FlexPriceError::Config(_))), "Should be a Config error");
    }

    #[test]
    fn test_load_from_file_invalid_json() {
        let path = temp_config(r#"{ "this is": "not valid json" "#, "json");

        let result = load_from_file(Some(path.clone()));
        assert!(result.is_err(), "Should fail with invalid JSON");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("some content", &PathBuf::from("test.yaml"));
        assert!(result.is_err(), "Should fail with unsupported format");
    }
}
