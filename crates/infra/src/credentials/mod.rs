//! Credential store implementations

pub mod file;
pub mod keychain;
pub mod memory;

pub use file::FileCredentialStore;
pub use keychain::KeychainCredentialStore;
pub use memory::MemoryCredentialStore;
