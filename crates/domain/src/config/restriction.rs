use serde::{Deserialize, Serialize};

use crate::policy::{ScopePrecedence, StoreUnavailablePolicy};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RestrictionConfig {
    #[serde(default)]
    pub scope_precedence: ScopePrecedence,

    #[serde(default)]
    pub on_store_unavailable: StoreUnavailablePolicy,

    #[serde(default = "default_rule_cache_key")]
    pub rule_cache_key: String,

    #[serde(default = "default_ttl_secs")]
    pub rule_cache_ttl_secs: u64,

    #[serde(default = "default_true")]
    pub decision_cache_enabled: bool,

    #[serde(default = "default_ttl_secs")]
    pub decision_cache_ttl_secs: u64,
}

impl Default for RestrictionConfig {
    fn default() -> Self {
        Self {
            scope_precedence: ScopePrecedence::default(),
            on_store_unavailable: StoreUnavailablePolicy::default(),
            rule_cache_key: default_rule_cache_key(),
            rule_cache_ttl_secs: default_ttl_secs(),
            decision_cache_enabled: true,
            decision_cache_ttl_secs: default_ttl_secs(),
        }
    }
}

fn default_rule_cache_key() -> String {
    "restrictions".to_string()
}

fn default_ttl_secs() -> u64 {
    300
}

fn default_true() -> bool {
    true
}
