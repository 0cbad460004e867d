use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,

    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

fn default_max_entries() -> usize {
    100_000
}

fn default_sweep_interval_secs() -> u64 {
    60
}
