use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeoConfig {
    /// MaxMind GeoIP2/GeoLite2 Country or City database (`.mmdb`). Lookups
    /// return empty geolocation when unset.
    #[serde(default)]
    pub database_path: Option<String>,
}
