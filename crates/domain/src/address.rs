use std::net::IpAddr;
use std::sync::Arc;

use crate::errors::DomainError;

/// Request origin as received, plus its parsed form when it is a valid IP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientAddress {
    raw: Arc<str>,
    parsed: Option<IpAddr>,
}

impl ClientAddress {
    /// Never fails: an unparsable input keeps `ip()` as `None`. The raw text
    /// is kept as given; the parsed form is canonical.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        Self {
            raw: Arc::from(raw),
            parsed: raw.parse::<IpAddr>().ok().map(|ip| ip.to_canonical()),
        }
    }

    pub fn strict(raw: &str) -> Result<Self, DomainError> {
        let address = Self::parse(raw);
        if address.parsed.is_none() {
            return Err(DomainError::InvalidAddress(raw.to_string()));
        }
        Ok(address)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn ip(&self) -> Option<IpAddr> {
        self.parsed
    }
}

impl From<IpAddr> for ClientAddress {
    fn from(ip: IpAddr) -> Self {
        let ip = ip.to_canonical();
        Self {
            raw: Arc::from(ip.to_string().as_str()),
            parsed: Some(ip),
        }
    }
}

impl std::fmt::Display for ClientAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
