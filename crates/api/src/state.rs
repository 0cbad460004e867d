use ip_gate_application::use_cases::EvaluateRestrictionUseCase;
use ip_gate_domain::{config::HttpConfig, StoreUnavailablePolicy};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub evaluate: Arc<EvaluateRestrictionUseCase>,
    pub http: Arc<HttpConfig>,
    pub on_store_unavailable: StoreUnavailablePolicy,
}

impl AppState {
    pub fn is_exempt(&self, path: &str) -> bool {
        self.http.exempt_paths.iter().any(|p| p == path)
    }

    /// `blocklogin` decisions deny everywhere unless login paths are configured.
    pub fn is_login_path(&self, path: &str) -> bool {
        self.http.login_paths.is_empty() || self.http.login_paths.iter().any(|p| p == path)
    }
}
