use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role identifier used for RBAC.
///
/// Roles are intentionally opaque strings at this layer; mapping roles to
/// permissions and UI capabilities is done by the registry in
/// `gridwatch-auth`. Unknown role strings are valid values — the registry
/// degrades them to the minimum-privilege role rather than rejecting them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    /// Default / minimum-privilege role.
    pub const CITIZEN: Role = Role(Cow::Borrowed("citizen"));
    /// Field crew role.
    pub const GRID_WORKER: Role = Role(Cow::Borrowed("grid_worker"));
    /// Operations manager role.
    pub const MANAGER: Role = Role(Cow::Borrowed("manager"));
    /// Top-tier role with the super wildcard grant.
    pub const DECISION_MAKER: Role = Role(Cow::Borrowed("decision_maker"));

    pub fn new(code: impl Into<Cow<'static, str>>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Role {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
