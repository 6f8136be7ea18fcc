//! Credential ports

pub mod ports;

pub use ports::CredentialStore;
