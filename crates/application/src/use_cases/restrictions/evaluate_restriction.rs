use ip_gate_domain::{ClientAddress, Decision, DomainError};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::GeoResolver;
use crate::services::{DecisionCacheService, ResolutionEngine, RuleCacheService};

/// Inbound operation: the restriction verdict for one request address.
pub struct EvaluateRestrictionUseCase {
    geo: Arc<dyn GeoResolver>,
    rules: Arc<RuleCacheService>,
    engine: ResolutionEngine,
    decisions: Option<Arc<DecisionCacheService>>,
}

impl EvaluateRestrictionUseCase {
    pub fn new(
        geo: Arc<dyn GeoResolver>,
        rules: Arc<RuleCacheService>,
        engine: ResolutionEngine,
    ) -> Self {
        Self {
            geo,
            rules,
            engine,
            decisions: None,
        }
    }

    pub fn with_decision_cache(mut self, decisions: Arc<DecisionCacheService>) -> Self {
        self.decisions = Some(decisions);
        self
    }

    /// Fails only with `DomainError::StoreUnavailable`; applying a fail-open
    /// or fail-closed posture is left to the caller.
    #[instrument(skip(self), fields(ip = %address))]
    pub async fn execute(&self, address: &ClientAddress) -> Result<Decision, DomainError> {
        let rules = self.rules.get_or_load().await?;

        if let Some(decisions) = &self.decisions {
            if let Some(decision) = decisions.get(address, rules.revision()).await {
                debug!(restricted = decision.restricted, "Decision cache hit");
                return Ok(decision);
            }
        }

        let geo = self.geo.resolve(address);
        let decision = self.engine.resolve(address, &geo, &rules);

        if let Some(decisions) = &self.decisions {
            decisions.put(address, rules.revision(), &decision).await;
        }

        if decision.restricted {
            info!(
                country = %geo.country,
                continent = %geo.continent,
                category = ?decision.category,
                scope = ?decision.scope,
                status = ?decision.status_code,
                "Request restricted"
            );
        }

        Ok(decision)
    }

    pub async fn execute_raw(&self, ip: &str) -> Result<Decision, DomainError> {
        self.execute(&ClientAddress::parse(ip)).await
    }
}
