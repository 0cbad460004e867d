use ipnetwork::IpNetwork;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

use crate::address::ClientAddress;
use crate::errors::DomainError;
use crate::geo::GeoInfo;
use crate::restriction::Scope;

/// Compiled form of a rule's `value` under its scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleMatcher {
    All,
    /// `ip` is set when `value` parses; it is then compared by address so
    /// case and zero-padding differences in IPv6 text do not matter.
    Ip {
        value: Arc<str>,
        ip: Option<IpAddr>,
    },
    Subnet(IpNetwork),
    Continent(Arc<str>),
    Country(Arc<str>),
    /// Value did not parse for its scope; never matches.
    Malformed,
}

impl RuleMatcher {
    pub fn compile(scope: Scope, value: &Arc<str>) -> Self {
        match scope {
            Scope::All => RuleMatcher::All,
            Scope::Ip if value.trim().is_empty() => {
                debug!("Skipping ip restriction rule with empty value");
                RuleMatcher::Malformed
            }
            Scope::Ip => RuleMatcher::Ip {
                value: Arc::clone(value),
                ip: value
                    .trim()
                    .parse::<IpAddr>()
                    .ok()
                    .map(|ip| ip.to_canonical()),
            },
            Scope::IpSubnet => match parse_cidr(value) {
                Ok(network) => RuleMatcher::Subnet(network),
                Err(e) => {
                    debug!(error = %e, "Skipping restriction rule");
                    RuleMatcher::Malformed
                }
            },
            Scope::Continent => RuleMatcher::Continent(Arc::clone(value)),
            Scope::Country => RuleMatcher::Country(Arc::clone(value)),
        }
    }

    pub fn matches(&self, address: &ClientAddress, geo: &GeoInfo) -> bool {
        match self {
            RuleMatcher::All => true,
            RuleMatcher::Ip { value, ip } => match (ip, address.ip()) {
                (Some(rule_ip), Some(client_ip)) => *rule_ip == client_ip,
                _ => !address.as_str().is_empty() && value.as_ref() == address.as_str(),
            },
            RuleMatcher::Subnet(network) => address.ip().is_some_and(|ip| network.contains(ip)),
            RuleMatcher::Continent(code) => geo_code_matches(code, &geo.continent),
            RuleMatcher::Country(code) => geo_code_matches(code, &geo.country),
            RuleMatcher::Malformed => false,
        }
    }
}

pub fn parse_cidr(value: &str) -> Result<IpNetwork, DomainError> {
    let malformed = || DomainError::MalformedRuleValue {
        scope: Scope::IpSubnet.as_str().to_string(),
        value: value.to_string(),
    };

    if !value.contains('/') {
        return Err(malformed());
    }
    value.trim().parse::<IpNetwork>().map_err(|_| malformed())
}

fn geo_code_matches(rule_code: &str, resolved: &str) -> bool {
    !resolved.is_empty() && rule_code.trim().eq_ignore_ascii_case(resolved)
}
