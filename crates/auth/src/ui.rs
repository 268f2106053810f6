//! UI element descriptors for permission-gated visibility filtering.

use serde::{Deserialize, Serialize};

use gridwatch_core::Permission;

/// A UI element that may require a permission to be shown.
///
/// Elements without a required permission are visible to every role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiElement {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_permission: Option<Permission>,
}

impl UiElement {
    /// An element visible to everyone.
    pub fn public(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            required_permission: None,
        }
    }

    /// An element gated behind a permission.
    pub fn guarded(id: impl Into<String>, permission: impl Into<Permission>) -> Self {
        Self {
            id: id.into(),
            required_permission: Some(permission.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_elements_carry_no_requirement() {
        let element = UiElement::public("report-button");
        assert!(element.required_permission.is_none());

        let json = serde_json::to_value(&element).unwrap();
        assert!(json.get("required_permission").is_none());
    }

    #[test]
    fn guarded_elements_roundtrip() {
        let element = UiElement::guarded("bulk-close", "event.close");
        let json = serde_json::to_string(&element).unwrap();
        let back: UiElement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, element);
    }
}
