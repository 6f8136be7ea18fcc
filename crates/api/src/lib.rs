//! # FlexPrice Dashboard
//!
//! Application layer - dashboard commands and dependency wiring.
//!
//! This crate contains:
//! - Dashboard commands (the controller layer behind the pages)
//! - Application context (dependency injection, facade reconfiguration)
//! - Logging setup and the readiness report
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Owns navigation: rejected credentials surface here as a login redirect

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
