use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    domain::{errors::ProvisionError, value_objects::SigningKey},
    ports::backend::SwiftBackend,
};

/// Reads the account's temporary URL key, creating one when the account has none
#[derive(Clone)]
pub struct AccountKeyProvisioner {
    backend: Arc<dyn SwiftBackend>,
}

impl AccountKeyProvisioner {
    pub fn new(backend: Arc<dyn SwiftBackend>) -> Self {
        Self { backend }
    }

    /// Return the account key, generating and writing a new one if unset.
    ///
    /// The returned key is the value that was written, not a re-read.
    pub async fn fetch_or_create(&self) -> Result<SigningKey, ProvisionError> {
        let account = self
            .backend
            .fetch_account()
            .await
            .map_err(ProvisionError::AccountUnreachable)?;

        if let Some(key) = account.temp_url_key {
            debug!("Account already carries a temporary URL key");
            return Ok(key);
        }

        let key = SigningKey::generate();
        self.backend
            .write_temp_url_key(&key)
            .await
            .map_err(ProvisionError::WriteRejected)?;

        info!("Provisioned a new temporary URL key on the account");
        Ok(key)
    }
}
