use ip_gate_application::ports::GeoResolver;
use ip_gate_domain::{ClientAddress, DomainError, GeoInfo};
use maxminddb::{geoip2, MaxMindDBError, Reader};
use std::net::IpAddr;
use std::path::Path;
use tracing::{debug, info};

/// Offline geolocation backed by a MaxMind `.mmdb` database (GeoLite2/GeoIP2
/// Country or City). The whole file is held in memory.
pub struct MaxMindGeoResolver {
    reader: Reader<Vec<u8>>,
}

impl MaxMindGeoResolver {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let reader = Reader::open_readfile(path).map_err(|e| {
            DomainError::GeoDatabase(format!("Failed to open {}: {}", path.display(), e))
        })?;

        info!(
            path = %path.display(),
            database_type = %reader.metadata.database_type,
            build_epoch = reader.metadata.build_epoch,
            "Geolocation database loaded"
        );
        Ok(Self { reader })
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, DomainError> {
        let reader = Reader::from_source(bytes)
            .map_err(|e| DomainError::GeoDatabase(format!("Invalid database: {}", e)))?;
        Ok(Self { reader })
    }

    pub fn database_type(&self) -> &str {
        &self.reader.metadata.database_type
    }

    /// `None` when the address has no record.
    pub fn lookup(&self, ip: IpAddr) -> Option<GeoInfo> {
        let record: geoip2::Country = match self.reader.lookup(ip.to_canonical()) {
            Ok(record) => record,
            Err(MaxMindDBError::AddressNotFoundError(_)) => return None,
            Err(e) => {
                debug!(ip = %ip, error = %e, "Geolocation lookup failed");
                return None;
            }
        };

        let country = record
            .country
            .and_then(|c| c.iso_code)
            .unwrap_or_default()
            .to_ascii_uppercase();
        let continent = record
            .continent
            .and_then(|c| c.code)
            .unwrap_or_default()
            .to_ascii_uppercase();

        Some(GeoInfo::new(&country, &continent))
    }
}

impl GeoResolver for MaxMindGeoResolver {
    fn resolve(&self, address: &ClientAddress) -> GeoInfo {
        address
            .ip()
            .and_then(|ip| self.lookup(ip))
            .unwrap_or_default()
    }
}
