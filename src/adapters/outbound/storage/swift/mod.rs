// OpenStack Swift backends
pub mod error;
pub mod http_client;
pub mod in_memory_backend;
pub mod keystone;

pub use error::SwiftClientError;
pub use http_client::{SwiftClientConfig, SwiftHttpClient};
pub use in_memory_backend::{BackendCalls, InMemorySwiftBackend, MEMORY_ENDPOINT, MEMORY_REGION};
