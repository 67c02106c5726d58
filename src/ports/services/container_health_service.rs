use async_trait::async_trait;

/// Port for verifying the backing container
#[async_trait]
pub trait ContainerHealthService: Send + Sync + 'static {
    /// Check the container; returns one formatted `"{code}: {message}"` string per
    /// failure, an empty list when healthy. `force` is accepted for host
    /// compatibility and has no effect.
    async fn ensure(&self, force: bool) -> Vec<String>;
}
