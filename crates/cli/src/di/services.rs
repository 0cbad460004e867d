use super::Repositories;
use ip_gate_application::ports::GeoResolver;
use ip_gate_application::services::{DecisionCacheService, ResolutionEngine, RuleCacheService};
use ip_gate_application::use_cases::EvaluateRestrictionUseCase;
use ip_gate_domain::Config;
use ip_gate_infrastructure::cache::InMemoryKeyValueCache;
use ip_gate_infrastructure::geo::{MaxMindGeoResolver, NullGeoResolver};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

pub struct Services {
    pub cache: Arc<InMemoryKeyValueCache>,
    pub evaluate: Arc<EvaluateRestrictionUseCase>,
}

impl Services {
    pub fn new(config: &Config, repos: &Repositories) -> anyhow::Result<Self> {
        let cache = Arc::new(InMemoryKeyValueCache::new(config.cache.max_entries));
        let geo = build_geo_resolver(config)?;

        let restriction = &config.restriction;
        let rules = Arc::new(
            RuleCacheService::new(repos.restriction.clone(), cache.clone())
                .with_key(restriction.rule_cache_key.clone())
                .with_ttl(Duration::from_secs(restriction.rule_cache_ttl_secs)),
        );

        let mut evaluate = EvaluateRestrictionUseCase::new(
            geo,
            rules,
            ResolutionEngine::new(restriction.scope_precedence),
        );
        if restriction.decision_cache_enabled {
            let decisions = DecisionCacheService::new(cache.clone())
                .with_ttl(Duration::from_secs(restriction.decision_cache_ttl_secs));
            evaluate = evaluate.with_decision_cache(Arc::new(decisions));
        }

        info!(
            precedence = restriction.scope_precedence.to_str(),
            decision_cache = restriction.decision_cache_enabled,
            "Restriction engine ready"
        );

        Ok(Self {
            cache,
            evaluate: Arc::new(evaluate),
        })
    }
}

fn build_geo_resolver(config: &Config) -> anyhow::Result<Arc<dyn GeoResolver>> {
    match &config.geo.database_path {
        Some(path) => Ok(Arc::new(MaxMindGeoResolver::open(path)?)),
        None => {
            warn!("No geolocation database configured; country and continent rules will not match");
            Ok(Arc::new(NullGeoResolver))
        }
    }
}
