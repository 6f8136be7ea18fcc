//! # FlexPrice Infrastructure
//!
//! Infrastructure implementations of core ports and the API access layer.
//!
//! This crate contains:
//! - The HTTP transport and the typed, interceptor-driven API client
//! - The FlexPrice resource facade and its reconfigurable handle
//! - Credential stores (memory, platform keychain, JSON file)
//! - Configuration loading from files and environment variables
//!
//! ## Architecture
//! - Implements traits defined in `flexprice-core`
//! - Contains all "impure" code (network, keychain, filesystem)

pub mod api;
pub mod config;
pub mod credentials;
pub mod errors;
pub mod http;
pub mod sdk;

// Re-export commonly used items
pub use api::{ApiClient, ApiError, ApiErrorCategory, SessionGuard};
pub use credentials::{FileCredentialStore, KeychainCredentialStore, MemoryCredentialStore};
pub use errors::InfraError;
pub use sdk::{EventCursor, FlexPrice, FlexPriceHandle};
