use serde::{Deserialize, Serialize};

use super::cache::CacheConfig;
use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::geo::GeoConfig;
use super::http::HttpConfig;
use super::logging::LoggingConfig;
use super::restriction::RestrictionConfig;
use super::server::ServerConfig;

/// Main configuration structure for IP Gate
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Server configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Restriction engine configuration (precedence, fail policy, cache TTLs)
    #[serde(default)]
    pub restriction: RestrictionConfig,

    /// Client address extraction and response mapping
    #[serde(default)]
    pub http: HttpConfig,

    /// Offline geolocation database
    #[serde(default)]
    pub geo: GeoConfig,

    /// In-process key-value cache
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ip-gate.toml in current directory
    /// 3. /etc/ip-gate/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(geo) = overrides.geo_database_path {
            self.geo.database_path = Some(geo);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        if self.restriction.rule_cache_key.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Rule cache key cannot be empty".to_string(),
            ));
        }

        if self.restriction.rule_cache_ttl_secs == 0 {
            return Err(ConfigError::Validation(
                "Rule cache TTL must be greater than 0".to_string(),
            ));
        }

        if self.restriction.decision_cache_enabled && self.restriction.decision_cache_ttl_secs == 0
        {
            return Err(ConfigError::Validation(
                "Decision cache TTL must be greater than 0".to_string(),
            ));
        }

        if self.cache.max_entries == 0 {
            return Err(ConfigError::Validation(
                "Cache max_entries must be greater than 0".to_string(),
            ));
        }

        if let Some(header) = &self.http.trusted_ip_header {
            if header.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "Trusted IP header cannot be empty; omit it instead".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new("ip-gate.toml").exists() {
            Some("ip-gate.toml".to_string())
        } else if std::path::Path::new("/etc/ip-gate/config.toml").exists() {
            Some("/etc/ip-gate/config.toml".to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_path: Option<String>,
    pub geo_database_path: Option<String>,
    pub log_level: Option<String>,
}
