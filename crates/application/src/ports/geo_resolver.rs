use ip_gate_domain::{ClientAddress, GeoInfo};

/// Offline IP geolocation. Best-effort: unknown or unparsable addresses
/// resolve to `GeoInfo::empty()`.
pub trait GeoResolver: Send + Sync {
    fn resolve(&self, address: &ClientAddress) -> GeoInfo;
}
