use crate::domain::value_objects::{ContainerName, SigningKey};

/// Account-level metadata read from the object store
#[derive(Debug, Clone, Default)]
pub struct AccountMetadata {
    /// Primary temporary URL key (`X-Account-Meta-Temp-URL-Key`)
    pub temp_url_key: Option<SigningKey>,
    /// Secondary key used during manual rotation (`X-Account-Meta-Temp-URL-Key-2`)
    pub temp_url_key_2: Option<SigningKey>,
    pub container_count: Option<u64>,
    pub object_count: Option<u64>,
    pub bytes_used: Option<u64>,
}

/// Container metadata read from the object store
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerMetadata {
    pub name: ContainerName,
    pub object_count: Option<u64>,
    pub bytes_used: Option<u64>,
}
