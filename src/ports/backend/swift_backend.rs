use crate::domain::{
    errors::SwiftResult,
    models::{AccountMetadata, AuthToken, ContainerMetadata, UserCredentials},
    value_objects::{ContainerName, SigningKey},
};
use async_trait::async_trait;

/// Port for the object-storage backend.
/// Abstracts the Swift account/container API and the identity service.
#[async_trait]
pub trait SwiftBackend: Send + Sync + 'static {
    /// Read the account metadata, including any temporary URL key
    async fn fetch_account(&self) -> SwiftResult<AccountMetadata>;

    /// Set the account's temporary URL key (administrative update)
    async fn write_temp_url_key(&self, key: &SigningKey) -> SwiftResult<()>;

    /// Issue a fresh token for the given user; the token carries a service catalog
    async fn issue_token(&self, user: &UserCredentials) -> SwiftResult<AuthToken>;

    /// Read container metadata; fails with `ContainerNotFound` if it does not exist
    async fn head_container(&self, container: &ContainerName) -> SwiftResult<ContainerMetadata>;
}
