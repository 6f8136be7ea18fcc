//! Application constants
//!
//! Centralized location for the defaults shared by configuration loading,
//! the transports and the session layer.

// Dashboard transport
pub const DEFAULT_API_URL: &str = "https://api.cloud.flexprice.io/v1";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

// SDK facade
pub const DEFAULT_SDK_BASE_PATH: &str = "https://api.cloud.flexprice.io/v1";
pub const API_KEY_HEADER: &str = "x-api-key";
pub const ENVIRONMENT_HEADER: &str = "X-Environment-ID";

// Session
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const AUTH_TOKEN_KEY: &str = "auth_token";
pub const DEFAULT_KEYCHAIN_SERVICE: &str = "FlexPrice.dashboard";

// Subscription request defaults
pub const DEFAULT_CANCEL_REASON: &str = "User requested cancellation";
pub const DEFAULT_PAUSE_REASON: &str = "User requested pause";

// Demo dashboard
pub const DEMO_CUSTOMER_ID: &str = "demo_user_123";
pub const LLM_USAGE_EVENT: &str = "llm_usage";
pub const DEFAULT_EVENTS_PAGE_SIZE: u32 = 10;
