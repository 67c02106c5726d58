pub mod backend;
pub mod services;
pub mod state;

// Re-export all port traits for convenience
pub use backend::SwiftBackend;
pub use services::{ContainerHealthService, SignedUrlService};
pub use state::StateStore;
