use async_trait::async_trait;
use ip_gate_domain::{DomainError, RestrictionRule};

/// Authoritative source of restriction rules.
#[async_trait]
pub trait RestrictionRepository: Send + Sync {
    /// Every rule with `state = 'enabled'`, in store order.
    ///
    /// Fails with `DomainError::StoreUnavailable` when the store cannot be reached.
    async fn get_enabled(&self) -> Result<Vec<RestrictionRule>, DomainError>;
}
