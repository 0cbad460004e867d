use serde::{Deserialize, Serialize};

use crate::restriction::{Category, Scope};

/// Verdict for one request address.
///
/// `restricted == false` means the request proceeds. A whitelist match is an
/// allow that keeps `category`/`scope` for observability only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub restricted: bool,
    pub category: Option<Category>,
    pub scope: Option<Scope>,
    pub status_code: Option<u16>,
}

impl Decision {
    pub fn allow() -> Self {
        Self {
            restricted: false,
            category: None,
            scope: None,
            status_code: None,
        }
    }

    pub fn whitelisted(scope: Scope) -> Self {
        Self {
            restricted: false,
            category: Some(Category::Whitelist),
            scope: Some(scope),
            status_code: None,
        }
    }

    pub fn restrict(category: Category, scope: Scope, status_code: u16) -> Self {
        Self {
            restricted: true,
            category: Some(category),
            scope: Some(scope),
            status_code: Some(status_code),
        }
    }

    /// Error identifier sent to denied clients, e.g. `restrict.blacklist`.
    pub fn error_key(&self) -> Option<String> {
        match (self.restricted, self.category) {
            (true, Some(category)) => Some(format!("restrict.{}", category)),
            _ => None,
        }
    }
}
