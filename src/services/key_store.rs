use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::{
    domain::{
        errors::{KeyStoreError, StateError},
        value_objects::SigningKey,
    },
    ports::state::StateStore,
    services::AccountKeyProvisioner,
};

/// State entry the signing key is cached under
pub const SIGNING_KEY_STATE_NAME: &str = "swift_adapter.temp_url_key";

/// Process-wide cache of the account signing key.
///
/// A cached key is trusted as-is. On a cold cache the key is fetched or
/// provisioned once: callers in this process queue on `provisioning`, and the
/// state write is a compare-and-set so a concurrent writer elsewhere wins and
/// everyone adopts its value.
pub struct KeyStore {
    state: Arc<dyn StateStore>,
    provisioner: AccountKeyProvisioner,
    provisioning: Mutex<()>,
}

impl KeyStore {
    pub fn new(state: Arc<dyn StateStore>, provisioner: AccountKeyProvisioner) -> Self {
        Self {
            state,
            provisioner,
            provisioning: Mutex::new(()),
        }
    }

    /// Return the cached key, provisioning and caching one on first use
    pub async fn get_or_create_key(&self) -> Result<SigningKey, KeyStoreError> {
        if let Some(key) = self.cached_key().await? {
            return Ok(key);
        }

        let _guard = self.provisioning.lock().await;

        // Stored by a caller we queued behind
        if let Some(key) = self.cached_key().await? {
            return Ok(key);
        }

        debug!("Signing key cache is cold, fetching from account");
        let key = self.provisioner.fetch_or_create().await?;

        let stored = self
            .state
            .set_if_absent(SIGNING_KEY_STATE_NAME, key.expose())
            .await?;
        if stored != key.expose() {
            warn!("Signing key was cached concurrently by another writer, adopting it");
        }

        Ok(decode(stored)?)
    }

    /// Drop the cached key so the next request reads the account again.
    /// Used after an out-of-band key rotation.
    pub async fn invalidate(&self) -> Result<bool, KeyStoreError> {
        let _guard = self.provisioning.lock().await;
        Ok(self.state.delete(SIGNING_KEY_STATE_NAME).await?)
    }

    async fn cached_key(&self) -> Result<Option<SigningKey>, KeyStoreError> {
        match self.state.get(SIGNING_KEY_STATE_NAME).await? {
            Some(value) => Ok(Some(decode(value)?)),
            None => Ok(None),
        }
    }
}

fn decode(value: String) -> Result<SigningKey, StateError> {
    SigningKey::new(value).map_err(|e| StateError::Corrupt {
        name: SIGNING_KEY_STATE_NAME.to_string(),
        reason: e.to_string(),
    })
}
