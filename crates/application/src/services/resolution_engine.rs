use ip_gate_domain::{
    Category, ClientAddress, Decision, GeoInfo, RestrictionRule, RuleSet, Scope,
    ScopePrecedence,
};

/// Turns an address, its geolocation and a rule snapshot into a [`Decision`].
///
/// Pure and synchronous: no I/O, no shared state beyond the configured
/// precedence.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolutionEngine {
    precedence: ScopePrecedence,
}

impl ResolutionEngine {
    pub fn new(precedence: ScopePrecedence) -> Self {
        Self { precedence }
    }

    pub fn precedence(&self) -> ScopePrecedence {
        self.precedence
    }

    pub fn resolve(&self, address: &ClientAddress, geo: &GeoInfo, rules: &RuleSet) -> Decision {
        for category in Category::EVALUATION_ORDER {
            if let Some((scope, rule)) = self.find_match(category, address, geo, rules) {
                return match category {
                    Category::Whitelist => Decision::whitelisted(scope),
                    _ => Decision::restrict(category, scope, rule.status_code()),
                };
            }
        }
        Decision::allow()
    }

    /// First rule of `category` matching the address, scanning scopes in
    /// precedence order and rules in load order.
    pub fn find_match<'a>(
        &self,
        category: Category,
        address: &ClientAddress,
        geo: &GeoInfo,
        rules: &'a RuleSet,
    ) -> Option<(Scope, &'a RestrictionRule)> {
        self.precedence.scope_order().iter().find_map(|&scope| {
            rules
                .rules_for(category, scope)
                .iter()
                .find(|compiled| compiled.matcher().matches(address, geo))
                .map(|compiled| (scope, compiled.rule()))
        })
    }
}
