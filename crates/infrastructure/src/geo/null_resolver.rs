use ip_gate_application::ports::GeoResolver;
use ip_gate_domain::{ClientAddress, GeoInfo};

/// Used when no geolocation database is configured; `country`/`continent`
/// rules then never match.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullGeoResolver;

impl GeoResolver for NullGeoResolver {
    fn resolve(&self, _address: &ClientAddress) -> GeoInfo {
        GeoInfo::empty()
    }
}
