use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

pub const DEFAULT_STATUS_CODE: u16 = 403;

/// Restriction outcome class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Whitelist,
    Maintenance,
    Blacklist,
    Blocklogin,
}

impl Category {
    /// Fixed order in which categories are consulted; the first match wins.
    pub const EVALUATION_ORDER: [Category; 4] = [
        Category::Whitelist,
        Category::Maintenance,
        Category::Blacklist,
        Category::Blocklogin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Whitelist => "whitelist",
            Category::Maintenance => "maintenance",
            Category::Blacklist => "blacklist",
            Category::Blocklogin => "blocklogin",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "whitelist" => Ok(Category::Whitelist),
            "maintenance" => Ok(Category::Maintenance),
            "blacklist" => Ok(Category::Blacklist),
            "blocklogin" => Ok(Category::Blocklogin),
            other => Err(format!("Unknown restriction category: {}", other)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of match target a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    All,
    Ip,
    IpSubnet,
    Continent,
    Country,
}

impl Scope {
    pub const ALL_SCOPES: [Scope; 5] = [
        Scope::All,
        Scope::Ip,
        Scope::IpSubnet,
        Scope::Continent,
        Scope::Country,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::All => "all",
            Scope::Ip => "ip",
            Scope::IpSubnet => "ip_subnet",
            Scope::Continent => "continent",
            Scope::Country => "country",
        }
    }
}

impl FromStr for Scope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Scope::All),
            "ip" => Ok(Scope::Ip),
            "ip_subnet" => Ok(Scope::IpSubnet),
            "continent" => Ok(Scope::Continent),
            "country" => Ok(Scope::Country),
            other => Err(format!("Unknown restriction scope: {}", other)),
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleState {
    Enabled,
    Disabled,
}

impl RuleState {
    pub fn to_str(&self) -> &'static str {
        match self {
            RuleState::Enabled => "enabled",
            RuleState::Disabled => "disabled",
        }
    }
}

/// One enabled row of the restriction store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RestrictionRule {
    pub category: Category,
    pub scope: Scope,
    pub value: Arc<str>,
    pub code: Option<u16>,
}

impl RestrictionRule {
    pub fn new(category: Category, scope: Scope, value: &str, code: Option<u16>) -> Self {
        Self {
            category,
            scope,
            value: Arc::from(value),
            code,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.code.unwrap_or(DEFAULT_STATUS_CODE)
    }
}
