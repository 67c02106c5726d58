// Provider-specific implementations
pub mod swift;

// Re-export key types
pub use swift::{
    InMemorySwiftBackend, SwiftClientConfig, SwiftClientError, SwiftHttpClient,
};
