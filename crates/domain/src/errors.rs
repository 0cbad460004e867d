use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid IP address: {0}")]
    InvalidAddress(String),

    #[error("Restriction store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Malformed {scope} rule value: {value}")]
    MalformedRuleValue { scope: String, value: String },

    #[error("Cache unavailable: {0}")]
    CacheUnavailable(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Geolocation database error: {0}")]
    GeoDatabase(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
