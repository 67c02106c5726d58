use crate::domain::errors::StateError;
use async_trait::async_trait;

/// Port for process-wide persistent key/value state
#[async_trait]
pub trait StateStore: Send + Sync + 'static {
    /// Read a value
    async fn get(&self, name: &str) -> Result<Option<String>, StateError>;

    /// Write a value, replacing any previous one
    async fn set(&self, name: &str, value: &str) -> Result<(), StateError>;

    /// Write a value only if none is stored.
    /// Returns the value held after the call: `value` if this call won,
    /// otherwise the value written by the earlier writer.
    async fn set_if_absent(&self, name: &str, value: &str) -> Result<String, StateError>;

    /// Remove a value; returns whether one was present
    async fn delete(&self, name: &str) -> Result<bool, StateError>;
}
