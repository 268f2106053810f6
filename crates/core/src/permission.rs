use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Permission identifier.
///
/// Permissions are modeled as opaque strings (e.g. `"event.create"`). Two
/// wildcard forms are recognized by policy layers:
///
/// - the exact string `"*"` grants everything (super wildcard);
/// - a trailing `*` (e.g. `"event.*"`) grants any permission sharing the
///   stripped prefix.
///
/// Matching is case-sensitive with no normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the exact super-wildcard entry `"*"`.
    pub fn is_super_wildcard(&self) -> bool {
        self.as_str() == "*"
    }

    /// For a prefix-wildcard entry (trailing `*`, not the bare `"*"`),
    /// returns the stripped prefix; `None` for literal entries.
    pub fn prefix_wildcard(&self) -> Option<&str> {
        if self.is_super_wildcard() {
            return None;
        }
        self.as_str().strip_suffix('*')
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Permission {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Permission {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn super_wildcard_detection() {
        assert!(Permission::new("*").is_super_wildcard());
        assert!(!Permission::new("event.*").is_super_wildcard());
        assert!(!Permission::new("event.create").is_super_wildcard());
    }

    #[test]
    fn prefix_wildcard_strips_trailing_star() {
        assert_eq!(Permission::new("event.*").prefix_wildcard(), Some("event."));
        assert_eq!(Permission::new("event.create").prefix_wildcard(), None);
        // The bare super wildcard is not a prefix wildcard.
        assert_eq!(Permission::new("*").prefix_wildcard(), None);
    }
}
