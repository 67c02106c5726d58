mod swift_backend;

pub use swift_backend::SwiftBackend;
