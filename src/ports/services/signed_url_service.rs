use crate::domain::{
    errors::SignedUrlResult,
    models::{TemporaryUrlRequest, TemporaryUrlResult},
};
use async_trait::async_trait;

/// Port for temporary URL generation.
/// This trait defines how callers obtain signed, time-limited object URLs.
#[async_trait]
pub trait SignedUrlService: Send + Sync + 'static {
    /// Generate a signed URL for the requested object, method and lifetime
    async fn generate(&self, request: TemporaryUrlRequest) -> SignedUrlResult<TemporaryUrlResult>;

    /// Signed GET URL for an object URI with the configured default lifetime
    async fn external_url(&self, uri: &str) -> SignedUrlResult<String>;
}
