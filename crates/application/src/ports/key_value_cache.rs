use async_trait::async_trait;
use ip_gate_domain::DomainError;
use std::time::Duration;

/// Shared key-value cache holding opaque serialized payloads.
///
/// Errors are reported as `DomainError::CacheUnavailable`; callers treat them
/// as misses.
#[async_trait]
pub trait KeyValueCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError>;

    async fn set_with_ttl(&self, key: &str, value: Vec<u8>, ttl: Duration)
        -> Result<(), DomainError>;
}
