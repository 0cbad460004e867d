use serde::{Deserialize, Serialize};

use crate::restriction::Scope;

/// Order in which scopes are tried inside one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopePrecedence {
    /// `all, ip, ip_subnet, continent, country`: any `all` rule pre-empts the category.
    #[default]
    UnconditionalFirst,
    /// `ip, ip_subnet, country, continent, all`: `all` is a catch-all.
    SpecificityFirst,
}

impl ScopePrecedence {
    pub fn scope_order(&self) -> &'static [Scope; 5] {
        match self {
            ScopePrecedence::UnconditionalFirst => &[
                Scope::All,
                Scope::Ip,
                Scope::IpSubnet,
                Scope::Continent,
                Scope::Country,
            ],
            ScopePrecedence::SpecificityFirst => &[
                Scope::Ip,
                Scope::IpSubnet,
                Scope::Country,
                Scope::Continent,
                Scope::All,
            ],
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            ScopePrecedence::UnconditionalFirst => "unconditional_first",
            ScopePrecedence::SpecificityFirst => "specificity_first",
        }
    }
}

/// What the inbound layer does when no rule set can be obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreUnavailablePolicy {
    #[default]
    FailClosed,
    FailOpen,
}

impl StoreUnavailablePolicy {
    pub fn to_str(&self) -> &'static str {
        match self {
            StoreUnavailablePolicy::FailClosed => "fail_closed",
            StoreUnavailablePolicy::FailOpen => "fail_open",
        }
    }
}
