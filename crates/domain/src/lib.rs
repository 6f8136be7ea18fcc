//! # FlexPrice Domain
//!
//! Wire types and configuration for the FlexPrice dashboard.
//!
//! This crate contains:
//! - Request/response DTOs for every backend resource group
//! - The server error envelope
//! - Domain error types and Result definitions
//! - Configuration structures and defaults
//!
//! ## Architecture
//! - No dependencies on other FlexPrice crates
//! - Only external dependencies allowed
//! - Pure data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
