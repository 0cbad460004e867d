use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Best-effort geolocation of a request address. Both fields may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeoInfo {
    pub country: Arc<str>,
    pub continent: Arc<str>,
}

impl GeoInfo {
    pub fn new(country: &str, continent: &str) -> Self {
        Self {
            country: Arc::from(country),
            continent: Arc::from(continent),
        }
    }

    pub fn empty() -> Self {
        Self::new("", "")
    }

    pub fn is_empty(&self) -> bool {
        self.country.is_empty() && self.continent.is_empty()
    }
}
