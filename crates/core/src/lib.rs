//! # FlexPrice Core
//!
//! Session logic for the dashboard - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces for credential storage and host navigation
//! - The session controller that reacts to rejected credentials
//!
//! ## Architecture Principles
//! - Only depends on `flexprice-domain`
//! - No HTTP, keychain or file code
//! - All external dependencies via traits

pub mod auth;
pub mod session;

pub use auth::ports::CredentialStore;
pub use session::ports::Navigator;
pub use session::SessionService;
