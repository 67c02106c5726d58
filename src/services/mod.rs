mod account_key_provisioner;
mod catalog_resolver;
mod container_health_service_impl;
mod key_store;
mod signed_url_service_impl;
mod swift_plugin;

pub use account_key_provisioner::AccountKeyProvisioner;
pub use catalog_resolver::CatalogResolver;
pub use container_health_service_impl::ContainerHealthServiceImpl;
pub use key_store::{KeyStore, SIGNING_KEY_STATE_NAME};
pub use signed_url_service_impl::{sign_object_url, SignedUrlServiceImpl};
pub use swift_plugin::{ContainerAdapter, SwiftStoragePlugin};
