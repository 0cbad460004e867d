pub mod cache;
pub mod database;
pub mod errors;
pub mod geo;
pub mod http;
pub mod logging;
pub mod restriction;
pub mod root;
pub mod server;

pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use geo::GeoConfig;
pub use http::HttpConfig;
pub use logging::LoggingConfig;
pub use restriction::RestrictionConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
