mod decision_cache_service;
mod resolution_engine;
mod rule_cache_service;

pub use decision_cache_service::{DecisionCacheService, DEFAULT_DECISION_TTL};
pub use resolution_engine::ResolutionEngine;
pub use rule_cache_service::{RuleCacheService, DEFAULT_RULE_CACHE_KEY, DEFAULT_RULE_CACHE_TTL};
