//! Port interface for bearer credential storage
//!
//! The transport reads the credential before every request and clears it when
//! the backend rejects it. Implementations decide where the token lives
//! (memory, platform keychain, a local file).

use async_trait::async_trait;
use flexprice_domain::Result;

/// Holds at most one bearer token.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Current token. `None` is a valid unauthenticated state, not an error.
    async fn token(&self) -> Result<Option<String>>;

    /// Replace the stored token
    async fn store(&self, token: &str) -> Result<()>;

    /// Remove the token. Clearing an empty store succeeds.
    async fn clear(&self) -> Result<()>;
}
