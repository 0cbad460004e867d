mod cache_maintenance_port;
mod geo_resolver;
mod key_value_cache;
mod restriction_repository;

pub use cache_maintenance_port::{CacheCompactionOutcome, CacheMaintenancePort};
pub use geo_resolver::GeoResolver;
pub use key_value_cache::KeyValueCache;
pub use restriction_repository::RestrictionRepository;
