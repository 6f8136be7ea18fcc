//! File-backed credential store
//!
//! Keeps a JSON object document (for example `session.json`) and owns a
//! single key in it. Other keys written by other tools are preserved whatever
//! their value type.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use flexprice_core::CredentialStore;
use flexprice_domain::{FlexPriceError, Result};
use serde_json::{Map, Value};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::errors::InfraError;

pub struct FileCredentialStore {
    path: PathBuf,
    key: String,
    // Serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self { path: path.into(), key: key.into(), lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Map<String, Value>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) if contents.trim().is_empty() => Ok(Map::new()),
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| InfraError::from(e).into()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(InfraError::from(e).into()),
        }
    }

    async fn write(&self, entries: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(InfraError::from)?;
        }
        let contents = serde_json::to_string_pretty(entries)
            .map_err(|e| FlexPriceError::Internal(format!("Failed to encode credentials: {e}")))?;
        tokio::fs::write(&self.path, contents).await.map_err(|e| InfraError::from(e).into())
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn token(&self) -> Result<Option<String>> {
        let _guard = self.lock.lock().await;
        match self.read().await?.remove(&self.key) {
            Some(Value::String(token)) => Ok(Some(token)),
            Some(Value::Null) | None => Ok(None),
            Some(_) => {
                warn!(path = %self.path.display(), key = %self.key, "ignoring non-string credential");
                Ok(None)
            }
        }
    }

    async fn store(&self, token: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read().await?;
        entries.insert(self.key.clone(), Value::String(token.to_string()));
        self.write(&entries).await?;
        debug!(path = %self.path.display(), key = %self.key, "credential written");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read().await?;
        if entries.remove(&self.key).is_none() {
            return Ok(());
        }
        self.write(&entries).await?;
        debug!(path = %self.path.display(), key = %self.key, "credential removed");
        Ok(())
    }
}

impl std::fmt::Debug for FileCredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileCredentialStore")
            .field("path", &self.path)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
