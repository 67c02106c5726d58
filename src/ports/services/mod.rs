mod container_health_service;
mod signed_url_service;

pub use container_health_service::ContainerHealthService;
pub use signed_url_service::SignedUrlService;
