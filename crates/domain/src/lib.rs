//! IP Gate Domain Layer
pub mod address;
pub mod config;
pub mod decision;
pub mod errors;
pub mod geo;
pub mod policy;
pub mod restriction;
pub mod rule_matcher;
pub mod rule_set;

pub use address::ClientAddress;
pub use config::{CliOverrides, Config, ConfigError};
pub use decision::Decision;
pub use errors::DomainError;
pub use geo::GeoInfo;
pub use policy::{ScopePrecedence, StoreUnavailablePolicy};
pub use restriction::{Category, RestrictionRule, RuleState, Scope, DEFAULT_STATUS_CODE};
pub use rule_matcher::RuleMatcher;
pub use rule_set::{CompiledRule, RuleSet};
