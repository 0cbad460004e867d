use ip_gate_domain::{Category, Decision, Scope};
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct DecisionResponse {
    pub ip: String,
    pub restricted: bool,
    pub category: Option<Category>,
    pub scope: Option<Scope>,
    pub status_code: Option<u16>,
    pub error: Option<String>,
}

impl DecisionResponse {
    pub fn new(ip: String, decision: &Decision) -> Self {
        Self {
            ip,
            restricted: decision.restricted,
            category: decision.category,
            scope: decision.scope,
            status_code: decision.status_code,
            error: decision.error_key(),
        }
    }
}
