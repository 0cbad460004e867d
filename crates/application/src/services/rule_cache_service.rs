use ip_gate_domain::{DomainError, RuleSet};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

use crate::ports::{KeyValueCache, RestrictionRepository};

pub const DEFAULT_RULE_CACHE_KEY: &str = "restrictions";
pub const DEFAULT_RULE_CACHE_TTL: Duration = Duration::from_secs(300);

/// Cache-aside view of the restriction store.
///
/// No locking: concurrent misses may reload and rewrite the same snapshot,
/// the last writer wins.
pub struct RuleCacheService {
    repo: Arc<dyn RestrictionRepository>,
    cache: Arc<dyn KeyValueCache>,
    key: String,
    ttl: Duration,
}

impl RuleCacheService {
    pub fn new(repo: Arc<dyn RestrictionRepository>, cache: Arc<dyn KeyValueCache>) -> Self {
        Self {
            repo,
            cache,
            key: DEFAULT_RULE_CACHE_KEY.to_string(),
            ttl: DEFAULT_RULE_CACHE_TTL,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    #[instrument(skip(self), fields(key = %self.key))]
    pub async fn get_or_load(&self) -> Result<Arc<RuleSet>, DomainError> {
        if let Some(rules) = self.read_cached().await {
            return Ok(Arc::new(rules));
        }

        let rules = self.load_rule_set().await?;
        self.write_cached(&rules).await;
        Ok(Arc::new(rules))
    }

    /// Reads the authoritative store, bypassing the cache.
    pub async fn load_rule_set(&self) -> Result<RuleSet, DomainError> {
        let rows = self.repo.get_enabled().await.map_err(|e| {
            error!(error = %e, "Failed to load restriction rules");
            if matches!(e, DomainError::StoreUnavailable(_)) {
                e
            } else {
                DomainError::StoreUnavailable(e.to_string())
            }
        })?;

        let rules = RuleSet::from_rules(rows);
        debug!(
            rules = rules.len(),
            revision = rules.revision(),
            "Restriction rules loaded from store"
        );
        Ok(rules)
    }

    async fn read_cached(&self) -> Option<RuleSet> {
        let payload = match self.cache.get(&self.key).await {
            Ok(Some(payload)) => payload,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "Rule cache read failed; falling back to store");
                return None;
            }
        };

        match serde_json::from_slice::<RuleSet>(&payload) {
            Ok(rules) => Some(rules),
            Err(e) => {
                warn!(error = %e, "Discarding undecodable cached rule set");
                None
            }
        }
    }

    async fn write_cached(&self, rules: &RuleSet) {
        let payload = match serde_json::to_vec(rules) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "Failed to serialize rule set");
                return;
            }
        };

        if let Err(e) = self.cache.set_with_ttl(&self.key, payload, self.ttl).await {
            warn!(error = %e, "Rule cache write failed");
        }
    }
}
