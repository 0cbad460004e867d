use ip_gate_domain::{ClientAddress, Decision};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use crate::ports::KeyValueCache;

pub const DEFAULT_DECISION_TTL: Duration = Duration::from_secs(300);

const KEY_PREFIX: &str = "restriction";

/// Per-address memo of decisions.
///
/// Keys embed the rule set revision, so a reloaded rule set with different
/// content never reads decisions computed against the previous one.
pub struct DecisionCacheService {
    cache: Arc<dyn KeyValueCache>,
    ttl: Duration,
}

impl DecisionCacheService {
    pub fn new(cache: Arc<dyn KeyValueCache>) -> Self {
        Self {
            cache,
            ttl: DEFAULT_DECISION_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn key(revision: u64, address: &ClientAddress) -> String {
        format!("{}:{:016x}:{}", KEY_PREFIX, revision, address)
    }

    pub async fn get(&self, address: &ClientAddress, revision: u64) -> Option<Decision> {
        let key = Self::key(revision, address);
        match self.cache.get(&key).await {
            Ok(Some(payload)) => serde_json::from_slice(&payload).ok(),
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, ip = %address, "Decision cache read failed");
                None
            }
        }
    }

    pub async fn put(&self, address: &ClientAddress, revision: u64, decision: &Decision) {
        let payload = match serde_json::to_vec(decision) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "Failed to serialize decision");
                return;
            }
        };

        let key = Self::key(revision, address);
        if let Err(e) = self.cache.set_with_ttl(&key, payload, self.ttl).await {
            warn!(error = %e, ip = %address, "Decision cache write failed");
        }
    }
}
